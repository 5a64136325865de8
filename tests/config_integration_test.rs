//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables take ENV_MUTEX to avoid
//! interfering with each other.

use envslots::config::{load_config, load_config_or_default, EnvslotsConfig};
use std::io::Write;
use std::sync::Mutex;
use tempfile::{NamedTempFile, TempDir};

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("ENVSLOTS_APPLICATION_LOG_LEVEL");
    std::env::remove_var("ENVSLOTS_PROFILES_KEY");
    std::env::remove_var("ENVSLOTS_PROFILES_OVERRIDE_KEY");
    std::env::remove_var("ENVSLOTS_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("ENVSLOTS_LOGGING_LOCAL_PATH");
    std::env::remove_var("ENVSLOTS_LOGGING_LOCAL_ROTATION");
    std::env::remove_var("TEST_ENVSLOTS_LOG_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_ENVSLOTS_LOG_DIR", "/tmp/envslots-logs");

    let temp_file = write_config(
        r#"
[application]
log_level = "warn"

[profiles]
key = "spring.profiles.active"
override_key = "SPRING_PROFILES_ACTIVE"

[logging]
local_enabled = true
# local_path = "${NOT_SUBSTITUTED_IN_COMMENTS}"
local_path = "${TEST_ENVSLOTS_LOG_DIR}"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path());
    cleanup_env_vars();
    let config = config.expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.profiles.key, "spring.profiles.active");
    assert_eq!(config.profiles.override_key(), "SPRING_PROFILES_ACTIVE");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/envslots-logs");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_override_beats_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("ENVSLOTS_PROFILES_KEY", "app.profiles");
    std::env::set_var("ENVSLOTS_APPLICATION_LOG_LEVEL", "debug");

    let temp_file = write_config("[profiles]\nkey = \"from.file\"\n");
    let config = load_config(temp_file.path());
    cleanup_env_vars();
    let config = config.unwrap();

    assert_eq!(config.profiles.key, "app.profiles");
    assert_eq!(config.application.log_level, "debug");
}

#[test]
fn test_missing_placeholder_is_reported() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[logging]\nlocal_path = \"${TEST_ENVSLOTS_LOG_DIR}\"\n");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("TEST_ENVSLOTS_LOG_DIR"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let dir = TempDir::new().unwrap();
    let config = load_config_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, EnvslotsConfig::default());

    assert!(load_config(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[profiles]\nkey = \"  \"\n");
    assert!(load_config(temp_file.path()).is_err());

    let temp_file = write_config("[logging]\nlocal_rotation = \"weekly\"\n");
    assert!(load_config(temp_file.path()).is_err());
}
