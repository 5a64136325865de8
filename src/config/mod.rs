//! Configuration management for envslots.
//!
//! The slot catalog itself is fixed; what is configurable is the surrounding
//! application: which property carries the active profiles, which process
//! variable counts as an explicit override, and how logs are written.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [profiles]
//! key = "profiles.active"
//! override_key = "PROFILES_ACTIVE"
//!
//! [logging]
//! local_enabled = true
//! local_path = "${LOG_DIR}"
//! local_rotation = "daily"
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted before parsing, and
//! `ENVSLOTS_<SECTION>_<KEY>` variables override file values afterwards:
//!
//! ```bash
//! export ENVSLOTS_PROFILES_KEY="spring.profiles.active"
//! export ENVSLOTS_LOGGING_LOCAL_ENABLED=true
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envslots::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("envslots.toml")?;
//! println!("Profiles key: {}", config.profiles.key);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_or_default, load_config_or_fallback, load_config_with,
    DEFAULT_CONFIG_PATH,
};
pub use schema::{ApplicationConfig, EnvslotsConfig, LoggingConfig, ProfilesConfig};
