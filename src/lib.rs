//! dosboxx-launch: DOSBox-X launch generation
//!
//! Builds the command line and scratch config for running a DOS game under
//! DOSBox-X from a frontend. The emulator's own config files are never
//! modified; every launch runs against a merged scratch copy.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod game;
pub mod hotkeys;
pub mod launch;
pub mod logging;
pub mod merger;
pub mod mount;

pub use document::ConfigDocument;
pub use error::LaunchError;
pub use game::{GameEntry, GameLocation};
pub use hotkeys::{hotkeys_context, HotkeyMap};
pub use launch::{LaunchSpec, LaunchSpecBuilder, Launcher};
pub use merger::ConfigMerger;
pub use mount::{Drive, MountDirective, MountPlan, MountPlanner};
