//! CLI presentation: formatters for launch specs, mount plans, hotkeys, and
//! settings.

use crate::config::LauncherConfig;
use crate::error::LaunchError;
use crate::hotkeys::HotkeyMap;
use crate::launch::{utf8, LaunchSpec};
use crate::mount::{MountDirective, MountPlan};
use comfy_table::Table;

fn json_error(e: serde_json::Error) -> LaunchError {
    LaunchError::ConfigError(format!("Failed to serialize output: {}", e))
}

/// `KEY=value` lines for the environment, then one argument token per line.
/// Tokens that are not UTF-8 are an error rather than being altered.
pub fn format_launch_spec_text(spec: &LaunchSpec) -> Result<String, LaunchError> {
    let mut lines = Vec::with_capacity(spec.env().len() + spec.args().len());
    for (name, value) in spec.env() {
        lines.push(format!("{}={}", name, utf8(value)?));
    }
    for arg in spec.args() {
        lines.push(utf8(arg)?.to_string());
    }
    Ok(lines.join("\n"))
}

pub fn format_launch_spec_json(spec: &LaunchSpec) -> Result<String, LaunchError> {
    for token in spec.args().iter().chain(spec.env().values()) {
        utf8(token)?;
    }
    serde_json::to_string_pretty(spec).map_err(json_error)
}

fn mount_kind(directive: &MountDirective) -> &'static str {
    match directive {
        MountDirective::OpticalImage { .. } => "optical image",
        MountDirective::BootDiskImage { .. } => "boot disk image",
        MountDirective::HostDirectory { .. } => "directory",
    }
}

pub fn format_mount_plan_text(plan: &MountPlan) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Drive", "Mount", "Path", "Commands"]);
    for directive in plan.directives() {
        let commands: Vec<String> = directive
            .to_args()
            .iter()
            .filter(|arg| *arg != "-c")
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        table.add_row(vec![
            directive.drive().to_string(),
            mount_kind(directive).to_string(),
            directive.path().display().to_string(),
            commands.join("; "),
        ]);
    }
    table.to_string()
}

pub fn format_mount_plan_json(plan: &MountPlan) -> Result<String, LaunchError> {
    let mut directives = Vec::new();
    for d in plan.directives() {
        let args = d
            .to_args()
            .iter()
            .map(|arg| utf8(arg).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;
        directives.push(serde_json::json!({
            "drive": d.drive().to_string(),
            "mount": d,
            "args": args,
        }));
    }
    serde_json::to_string_pretty(&serde_json::json!({
        "directives": directives,
        "directory_fallback": plan.is_directory_fallback(),
    }))
    .map_err(json_error)
}

pub fn format_hotkeys(hotkeys: &HotkeyMap) -> Result<String, LaunchError> {
    serde_json::to_string_pretty(hotkeys).map_err(json_error)
}

pub fn format_settings_toml(config: &LauncherConfig) -> Result<String, LaunchError> {
    toml::to_string_pretty(config)
        .map_err(|e| LaunchError::ConfigError(format!("Failed to serialize settings: {}", e)))
}
