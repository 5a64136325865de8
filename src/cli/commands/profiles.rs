//! Profiles command implementation
//!
//! Runs active profile resolution against the process environment and
//! reports the outcome. The resolved list is applied to an in-process
//! [`ActiveProfiles`] target and printed.

use crate::adapters::{ActiveProfiles, SystemEnv, ValueReader};
use crate::cli::OutputFormat;
use crate::config::{load_config_or_default, ProfilesConfig};
use crate::core::{ActiveProfileResolver, EnvironmentPropertySource, Resolution};
use clap::Args;
use serde_json::{json, Value};

/// Arguments for the profiles command
#[derive(Args, Debug)]
pub struct ProfilesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Property carrying the profile list (overrides the configuration)
    #[arg(long)]
    pub key: Option<String>,
}

/// Picks the profiles key and the override variable name
///
/// `--key` replaces the configured key. It also becomes the override name,
/// unless the configuration names an override variable explicitly.
fn select_keys<'a>(
    key_arg: Option<&'a str>,
    profiles: &'a ProfilesConfig,
) -> (&'a str, &'a str) {
    match key_arg {
        Some(key) => (key, profiles.override_key.as_deref().unwrap_or(key)),
        None => (profiles.key.as_str(), profiles.override_key()),
    }
}

impl ProfilesArgs {
    /// Execute the profiles command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration file");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        let (key, override_key) = select_keys(self.key.as_deref(), &config.profiles);

        let resolver = match ActiveProfileResolver::new(key) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let source = EnvironmentPropertySource::from_env();
        let mut active = ActiveProfiles::default();
        let resolution = resolver.initialize(|| SystemEnv.read(override_key), &source, &mut active);

        tracing::info!(
            key = %resolver.key(),
            outcome = resolution.kind(),
            "Active profile resolution finished"
        );

        match self.format {
            OutputFormat::Json => {
                let report = json_report(resolver.key(), override_key, &resolution, &active);
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text if resolution.is_resolved() => {
                println!("{}", text_report(&resolution, override_key));
            }
            OutputFormat::Text => eprintln!("{}", text_report(&resolution, override_key)),
        }

        Ok(0)
    }
}

fn json_report(
    key: &str,
    override_key: &str,
    resolution: &Resolution,
    active: &ActiveProfiles,
) -> Value {
    json!({
        "key": key,
        "override_key": override_key,
        "outcome": resolution.kind(),
        "profiles": active.profiles(),
    })
}

/// One profile per line when resolved, otherwise a short notice
fn text_report(resolution: &Resolution, override_key: &str) -> String {
    match resolution {
        Resolution::Resolved(profiles) => profiles
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        Resolution::OverridePresent { .. } => {
            format!("ℹ️  {override_key} is already set, leaving profiles to it")
        }
        other => format!("ℹ️  No active profiles: {other}"),
    }
}
