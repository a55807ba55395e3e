//! Integration tests for DOSBox-X launch generation

mod config_merge;
mod launch_spec;
mod test_utils;

pub use test_utils::{with_xdg_env, GameFixture};
