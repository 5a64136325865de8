//! Configuration schema types
//!
//! Every section is optional in the TOML file; missing sections and fields
//! fall back to their defaults.

use crate::core::resolver::DEFAULT_PROFILES_KEY;
use serde::{Deserialize, Serialize};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_ROTATIONS: [&str; 3] = ["daily", "hourly", "never"];

/// Main envslots configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvslotsConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Active profile resolution settings
    #[serde(default)]
    pub profiles: ProfilesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EnvslotsConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.profiles.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Active profile resolution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilesConfig {
    /// Property holding the pipe-delimited profile list
    #[serde(default = "default_profiles_key")]
    pub key: String,

    /// Process variable that, when set, disables resolution entirely.
    /// Defaults to `key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_key: Option<String>,
}

impl ProfilesConfig {
    /// The override variable name, falling back to the profiles key
    pub fn override_key(&self) -> &str {
        self.override_key.as_deref().unwrap_or(&self.key)
    }

    fn validate(&self) -> Result<(), String> {
        if self.key.trim().is_empty() {
            return Err("profiles.key cannot be empty".to_string());
        }
        if matches!(&self.override_key, Some(key) if key.trim().is_empty()) {
            return Err("profiles.override_key cannot be empty when set".to_string());
        }
        Ok(())
    }
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            key: default_profiles_key(),
            override_key: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to rolling files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !VALID_ROTATIONS.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                VALID_ROTATIONS.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_profiles_key() -> String {
    DEFAULT_PROFILES_KEY.to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
