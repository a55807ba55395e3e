//! Global settings file source: $XDG_CONFIG_HOME/dosboxx-launch/config.toml
//! or ~/.config/dosboxx-launch/config.toml

use crate::config::APP_NAME;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to global settings file.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join(APP_NAME).join("config.toml"))
}

/// Add the global settings file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) if path.exists() => add_file(builder, &path, false),
        Some(path) => {
            debug!(
                config_path = %path.display(),
                "No global settings file, using defaults"
            );
            Ok(builder)
        }
        None => Ok(builder),
    }
}

/// Add a TOML settings file to builder.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let canonical = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let name = canonical.to_str().ok_or_else(|| {
        ConfigError::Message(format!("Settings path is not valid UTF-8: {:?}", canonical))
    })?;
    Ok(builder.add_source(
        File::new(name, FileFormat::Toml).required(required),
    ))
}
