//! Init command implementation
//!
//! Generates a sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set profiles.key to the property your platform slots carry");
                println!("  2. Validate configuration: envslots validate-config");
                println!("  3. Check resolution: envslots profiles");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    fn sample_config() -> &'static str {
        r#"# envslots configuration
#
# Platform slots (AWS_ACCESS_KEY_ID, AWS_SECRET_KEY, JDBC_CONNECTION_STRING,
# PARAM1..PARAM5) are read from the process environment. PARAM* slots may
# embed several properties:
#
#   PARAM1="db.pool=10, profiles.active=prod|aws"

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[profiles]
# Property holding the pipe-delimited list of active profiles
key = "profiles.active"

# Process variable that, when already set, disables resolution.
# Defaults to the value of `key`.
# override_key = "PROFILES_ACTIVE"

[logging]
# JSON log files with rotation (daily, hourly, never)
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
    }
}
