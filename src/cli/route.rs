//! CLI route: single route table and run context. Dispatches to the launcher
//! and presentation.

use crate::cli::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_hotkeys, format_launch_spec_json, format_launch_spec_text, format_mount_plan_json,
    format_mount_plan_text, format_settings_toml,
};
use crate::config::{ConfigLoader, LauncherConfig};
use crate::error::LaunchError;
use crate::game::GameLocation;
use crate::launch::Launcher;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: loaded settings and the launcher built
/// from them.
pub struct RunContext {
    config: LauncherConfig,
    launcher: Launcher,
}

impl RunContext {
    /// Load and validate settings from the optional settings file path.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, LaunchError> {
        let config = ConfigLoader::load_validated(config_path.as_deref())?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: LauncherConfig) -> Self {
        let launcher = Launcher::from_config(&config);
        Self { config, launcher }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, LaunchError> {
        debug!(command = command_name(command), "Executing command");
        match command {
            Commands::Launch { rom, format } => {
                let game = read_game(rom)?;
                debug!(
                    scratch = %self.launcher.paths().scratch_config.display(),
                    "Generating launch"
                );
                let spec = self.launcher.generate(&game)?;
                match format {
                    OutputFormat::Text => format_launch_spec_text(&spec),
                    OutputFormat::Json => format_launch_spec_json(&spec),
                }
            }
            Commands::Plan { rom, format } => {
                let game = read_game(rom)?;
                let plan = self.launcher.plan(&game);
                match format {
                    OutputFormat::Text => Ok(format_mount_plan_text(&plan)),
                    OutputFormat::Json => format_mount_plan_json(&plan),
                }
            }
            Commands::Hotkeys => format_hotkeys(&self.launcher.hotkeys_context()),
            Commands::Config => format_settings_toml(self.config()),
        }
    }
}

fn read_game(rom: &Path) -> Result<GameLocation, LaunchError> {
    let root = dunce::canonicalize(rom).map_err(|e| LaunchError::GameLocation {
        path: rom.to_path_buf(),
        source: e,
    })?;
    GameLocation::read(root)
}
