//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::LaunchError;

/// Map launcher errors to a string for CLI output.
pub fn map_error(e: &LaunchError) -> String {
    match e {
        LaunchError::ParseFailed { path, line, message } => {
            format!("Invalid emulator config {}:{}: {}", path.display(), line, message)
        }
        other => other.to_string(),
    }
}
