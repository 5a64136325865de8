// Envslots - Platform configuration slot expander
// Copyright (c) 2025 Envslots Contributors
// Licensed under the MIT License

use clap::Parser;
use envslots::cli::{Cli, Commands};
use envslots::config::load_config_or_fallback;
use envslots::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging falls back to defaults when the configuration is unusable
    let (config, config_error) = load_config_or_fallback(&cli.config);
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);

    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    if let Some(e) = config_error {
        tracing::warn!(
            path = %cli.config,
            error = %e,
            "Configuration could not be loaded; logging with default settings"
        );
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "envslots starting");

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Collect(args) => args.execute(),
        Commands::Flatten(args) => args.execute(),
        Commands::Profiles(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
