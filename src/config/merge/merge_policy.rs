//! Merge rules: defaults, override order, conflict handling.

use crate::config::{
    default_base_config, default_boot_script, default_config_dir, default_configs_root,
    default_emulator, default_game_config, default_override_key, default_override_section,
    default_override_value, default_scratch_config,
};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// List settings (mount extensions) are left to serde defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default(
            "paths.configs_root",
            default_configs_root().to_string_lossy().into_owned(),
        )?
        .set_default(
            "paths.emulator",
            default_emulator().to_string_lossy().into_owned(),
        )?
        .set_default("paths.config_dir", default_config_dir())?
        .set_default("paths.base_config", default_base_config())?
        .set_default("paths.scratch_config", default_scratch_config())?
        .set_default("paths.game_config", default_game_config())?
        .set_default("override.section", default_override_section())?
        .set_default("override.key", default_override_key())?
        .set_default("override.value", default_override_value())?
        .set_default("mount.boot_script", default_boot_script())
}
