//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string for log fields (e.g. "launch", "plan").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Launch { .. } => "launch",
        Commands::Plan { .. } => "plan",
        Commands::Hotkeys => "hotkeys",
        Commands::Config => "config",
    }
}
