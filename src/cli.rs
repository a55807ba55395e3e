//! CLI domain: parse, route, help, output, and presentation only.
//! No launch logic; a single route table dispatches to the launcher.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_hotkeys, format_launch_spec_json, format_launch_spec_text, format_mount_plan_json,
    format_mount_plan_text, format_settings_toml,
};
pub use route::RunContext;
