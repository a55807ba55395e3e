//! Error types for DOSBox-X launch generation.

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while merging the emulator config or building a launch.
///
/// A missing source config and an empty game directory are not errors; both
/// fall back to defaults.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to copy config {from:?} to {to:?}: {source}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?} at line {line}: {message}")]
    ParseFailed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Failed to write config {path:?}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read game location {path:?}: {source}")]
    GameLocation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised by text and JSON output only; launch tokens keep their bytes.
    #[error("Launch argument is not valid UTF-8: {0:?}")]
    NotUnicode(OsString),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for LaunchError {
    fn from(err: config::ConfigError) -> Self {
        LaunchError::ConfigError(err.to_string())
    }
}
