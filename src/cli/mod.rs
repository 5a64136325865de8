//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for envslots using clap.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

/// envslots - expand platform configuration slots into named properties
#[derive(Parser, Debug)]
#[command(name = "envslots")]
#[command(version, about, long_about = None)]
#[command(author = "Envslots Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = crate::config::DEFAULT_CONFIG_PATH,
        env = "ENVSLOTS_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ENVSLOTS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the properties collected from the platform slots
    Collect(commands::collect::CollectArgs),

    /// Show the properties a raw custom slot value expands to
    Flatten(commands::flatten::FlattenArgs),

    /// Resolve the active profiles from the current environment
    Profiles(commands::profiles::ProfilesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Output format shared by the data-producing commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `name=value` line per property
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
