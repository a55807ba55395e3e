//! Launcher settings sources, lowest to highest precedence after defaults:
//! a settings file, then environment overrides.

pub mod environment;
pub mod global_file;
