//! Configuration System
//!
//! Launcher settings: where the emulator and its config files live, the
//! forced config override, mount classification, and logging. Loaded in layers
//! (defaults, global file or explicit file, environment) by [`ConfigLoader`].

use crate::logging::LoggingConfig;
use crate::mount::{MountPlanner, BOOT_SCRIPT, DISK_IMAGE_EXTENSIONS, OPTICAL_IMAGE_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Application directory name under the user config home.
pub const APP_NAME: &str = "dosboxx-launch";

/// Prefix for environment overrides, e.g. `DOSBOXX_LAUNCH_PATHS__EMULATOR`.
pub const ENV_PREFIX: &str = "DOSBOXX_LAUNCH";

/// Root launcher configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Emulator and config file locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Key forced into every generated emulator config
    #[serde(default, rename = "override")]
    pub forced: ForcedOverride,

    /// Media classification
    #[serde(default)]
    pub mount: MountConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Emulator and config file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Shared configs directory; also exported as the emulator's config home
    #[serde(default = "default_configs_root")]
    pub configs_root: PathBuf,

    /// Emulator executable
    #[serde(default = "default_emulator")]
    pub emulator: PathBuf,

    /// Emulator directory under `configs_root`
    #[serde(default = "default_config_dir")]
    pub config_dir: String,

    /// System default config file name
    #[serde(default = "default_base_config")]
    pub base_config: String,

    /// Scratch config file name, rewritten on every launch
    #[serde(default = "default_scratch_config")]
    pub scratch_config: String,

    /// Per-game config file name looked up in the game directory
    #[serde(default = "default_game_config")]
    pub game_config: String,
}

pub(crate) fn default_configs_root() -> PathBuf {
    PathBuf::from("/userdata/system/configs")
}

pub(crate) fn default_emulator() -> PathBuf {
    PathBuf::from("/usr/bin/dosbox-x")
}

pub(crate) fn default_config_dir() -> String {
    "dosbox".to_string()
}

pub(crate) fn default_base_config() -> String {
    "dosboxx.conf".to_string()
}

pub(crate) fn default_scratch_config() -> String {
    "dosboxx-custom.conf".to_string()
}

pub(crate) fn default_game_config() -> String {
    "dosbox.cfg".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            configs_root: default_configs_root(),
            emulator: default_emulator(),
            config_dir: default_config_dir(),
            base_config: default_base_config(),
            scratch_config: default_scratch_config(),
            game_config: default_game_config(),
        }
    }
}

/// Fully resolved launch paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPaths {
    pub emulator: PathBuf,
    pub config_home: PathBuf,
    pub base_config: PathBuf,
    pub scratch_config: PathBuf,
    pub game_config: String,
}

impl PathsConfig {
    pub fn resolve(&self) -> LaunchPaths {
        let emulator_dir = self.configs_root.join(&self.config_dir);
        LaunchPaths {
            emulator: self.emulator.clone(),
            config_home: self.configs_root.clone(),
            base_config: emulator_dir.join(&self.base_config),
            scratch_config: emulator_dir.join(&self.scratch_config),
            game_config: self.game_config.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.configs_root.as_os_str().is_empty() {
            return Err("Configs root cannot be empty".to_string());
        }
        if self.emulator.as_os_str().is_empty() {
            return Err("Emulator path cannot be empty".to_string());
        }
        for (field, value) in [
            ("base_config", &self.base_config),
            ("scratch_config", &self.scratch_config),
            ("game_config", &self.game_config),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} cannot be empty", field));
            }
        }
        if self.base_config == self.scratch_config {
            return Err("scratch_config must differ from base_config".to_string());
        }
        Ok(())
    }
}

/// A key/value pair applied to the emulator config after merging, replacing
/// whatever the source config set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedOverride {
    #[serde(default = "default_override_section")]
    pub section: String,
    #[serde(default = "default_override_key")]
    pub key: String,
    #[serde(default = "default_override_value")]
    pub value: String,
}

pub(crate) fn default_override_section() -> String {
    "sdl".to_string()
}

pub(crate) fn default_override_key() -> String {
    "output".to_string()
}

pub(crate) fn default_override_value() -> String {
    "opengl".to_string()
}

impl Default for ForcedOverride {
    fn default() -> Self {
        Self {
            section: default_override_section(),
            key: default_override_key(),
            value: default_override_value(),
        }
    }
}

impl ForcedOverride {
    pub fn new(
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.section.trim().is_empty() {
            return Err("Override section cannot be empty".to_string());
        }
        if self.key.trim().is_empty() {
            return Err("Override key cannot be empty".to_string());
        }
        if self.section.contains(['[', ']']) {
            return Err(format!("Invalid override section name '{}'", self.section));
        }
        if self.key.contains(['=', ':']) {
            return Err(format!("Invalid override key '{}'", self.key));
        }
        Ok(())
    }
}

/// Media classification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountConfig {
    #[serde(default = "default_optical_extensions")]
    pub optical_extensions: Vec<String>,
    #[serde(default = "default_disk_extensions")]
    pub disk_extensions: Vec<String>,
    #[serde(default = "default_boot_script")]
    pub boot_script: String,
}

fn default_optical_extensions() -> Vec<String> {
    OPTICAL_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_disk_extensions() -> Vec<String> {
    DISK_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

pub(crate) fn default_boot_script() -> String {
    BOOT_SCRIPT.to_string()
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            optical_extensions: default_optical_extensions(),
            disk_extensions: default_disk_extensions(),
            boot_script: default_boot_script(),
        }
    }
}

impl MountConfig {
    pub fn planner(&self) -> MountPlanner {
        MountPlanner::new(
            self.optical_extensions.clone(),
            self.disk_extensions.clone(),
            self.boot_script.clone(),
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.optical_extensions.is_empty() {
            return Err("optical_extensions cannot be empty".to_string());
        }
        if self.disk_extensions.is_empty() {
            return Err("disk_extensions cannot be empty".to_string());
        }
        if let Some(ext) = self
            .optical_extensions
            .iter()
            .find(|e| self.disk_extensions.contains(*e))
        {
            return Err(format!(
                "Extension '{}' is listed as both optical and disk image",
                ext
            ));
        }
        if self.boot_script.trim().is_empty() {
            return Err("boot_script cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Paths(String),
    Override(String),
    Mount(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Paths(msg) => write!(f, "Paths: {}", msg),
            ValidationError::Override(msg) => write!(f, "Override: {}", msg),
            ValidationError::Mount(msg) => write!(f, "Mount: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl LauncherConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.paths.validate() {
            errors.push(ValidationError::Paths(e));
        }
        if let Err(e) = self.forced.validate() {
            errors.push(ValidationError::Override(e));
        }
        if let Err(e) = self.mount.validate() {
            errors.push(ValidationError::Mount(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
