//! CLI parse: clap types for dosboxx-launch. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// dosboxx-launch - DOSBox-X launch command and config generation
#[derive(Parser)]
#[command(name = "dosboxx-launch")]
#[command(about = "Generate the DOSBox-X command line and scratch config for a DOS game")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file path (replaces the global settings file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the scratch config and print the launch command
    Launch {
        /// Game directory
        rom: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the drive mount plan without touching any config file
    Plan {
        /// Game directory
        rom: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the hotkey context as JSON
    Hotkeys,
    /// Print the effective launcher settings as TOML
    Config,
}
