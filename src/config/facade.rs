//! Settings loading facade: one entry point over defaults, files, and the
//! environment.

use super::merge::merge_policy;
use super::sources::{environment, global_file};
use super::LauncherConfig;
use crate::error::LaunchError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`LauncherConfig`] in precedence order: defaults, settings file,
/// environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load using the global settings file when present.
    pub fn load() -> Result<LauncherConfig, LaunchError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        let config: LauncherConfig = builder.build()?.try_deserialize()?;
        debug!("Loaded launcher settings");
        Ok(config)
    }

    /// Load from an explicit settings file instead of the global one. The
    /// file must exist.
    pub fn load_from_file(path: &Path) -> Result<LauncherConfig, LaunchError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_file(builder, path, true)?;
        let builder = environment::add_to_builder(builder);
        let config: LauncherConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Loaded launcher settings");
        Ok(config)
    }

    /// Load, then validate. All validation problems are reported together.
    pub fn load_validated(path: Option<&Path>) -> Result<LauncherConfig, LaunchError> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            LaunchError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }

    /// Path of the global settings file, if a config home can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
