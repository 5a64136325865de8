//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::EnvslotsConfig;
use crate::adapters::{SystemEnv, ValueReader};
use crate::domain::errors::EnvslotsError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Default configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "envslots.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into EnvslotsConfig
/// 4. Applies environment variable overrides (ENVSLOTS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use envslots::config::loader::load_config;
///
/// let config = load_config("envslots.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<EnvslotsConfig> {
    load_config_with(path, &SystemEnv)
}

/// Like [`load_config`], but falls back to defaults when the file is missing
///
/// Environment overrides and validation still apply to the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<EnvslotsConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = EnvslotsConfig::default();
    apply_env_overrides(&mut config, &SystemEnv)?;
    validate(&config)?;
    Ok(config)
}

/// Like [`load_config_or_default`], but never fails
///
/// An unusable configuration yields the defaults together with the error,
/// so the caller can still start up and report it.
pub fn load_config_or_fallback(
    path: impl AsRef<Path>,
) -> (EnvslotsConfig, Option<EnvslotsError>) {
    match load_config_or_default(path) {
        Ok(config) => (config, None),
        Err(e) => (EnvslotsConfig::default(), Some(e)),
    }
}

/// Loads configuration, resolving `${VAR}` placeholders and overrides
/// through `env` instead of the process environment
pub fn load_config_with<R: ValueReader>(
    path: impl AsRef<Path>,
    env: &R,
) -> Result<EnvslotsConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(EnvslotsError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        EnvslotsError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents, env)?;

    let mut config: EnvslotsConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config, env)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &EnvslotsConfig) -> Result<()> {
    config.validate().map_err(|e| {
        EnvslotsError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars<R: ValueReader>(input: &str, env: &R) -> Result<String> {
    let re = placeholder_pattern();
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match env.read(var_name) {
                Some(value) => value,
                None => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    String::new()
                }
            }
        });
        lines.push(processed.into_owned());
    }

    if !missing_vars.is_empty() {
        return Err(EnvslotsError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    let mut result = lines.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    Ok(result)
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        EnvslotsError::Configuration(format!("Invalid value for {var}: must be true or false"))
    })
}

/// Applies environment variable overrides using the ENVSLOTS_* prefix
///
/// Variables follow the pattern ENVSLOTS_<SECTION>_<KEY>, for example
/// ENVSLOTS_PROFILES_KEY or ENVSLOTS_LOGGING_LOCAL_ENABLED.
pub fn apply_env_overrides<R: ValueReader>(config: &mut EnvslotsConfig, env: &R) -> Result<()> {
    // Application overrides
    if let Some(val) = env.read("ENVSLOTS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Profile overrides
    if let Some(val) = env.read("ENVSLOTS_PROFILES_KEY") {
        config.profiles.key = val;
    }
    if let Some(val) = env.read("ENVSLOTS_PROFILES_OVERRIDE_KEY") {
        config.profiles.override_key = Some(val);
    }

    // Logging overrides
    if let Some(val) = env.read("ENVSLOTS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("ENVSLOTS_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = env.read("ENVSLOTS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env.read("ENVSLOTS_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MapReader;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_substitute_env_vars() {
        let env = MapReader::new().with("TEST_VAR", "test_value");
        let input = "key = \"${TEST_VAR}\"";
        let result = substitute_env_vars(input, &env).unwrap();
        assert_eq!(result, "key = \"test_value\"");
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let env = MapReader::new();
        let input = "# key = \"${NOT_SET}\"\nlevel = \"info\"\n";
        let result = substitute_env_vars(input, &env).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let env = MapReader::new();
        let input = "a = \"${MISSING_ONE}\"\nb = \"${MISSING_TWO}${MISSING_ONE}\"";
        let err = substitute_env_vars(input, &env).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required environment variables: MISSING_ONE, MISSING_TWO"
        );
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_with("nonexistent.toml", &MapReader::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let temp_file = write_config(
            r#"
[application]
log_level = "debug"

[profiles]
key = "${PROFILE_KEY}"
"#,
        );

        let env = MapReader::new().with("PROFILE_KEY", "spring.profiles.active");
        let config = load_config_with(temp_file.path(), &env).unwrap();

        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.profiles.key, "spring.profiles.active");
        assert_eq!(config.profiles.override_key(), "spring.profiles.active");
    }

    #[test]
    fn test_env_overrides() {
        let temp_file = write_config("[logging]\nlocal_enabled = false\n");
        let env = MapReader::new()
            .with("ENVSLOTS_PROFILES_KEY", "app.profiles")
            .with("ENVSLOTS_PROFILES_OVERRIDE_KEY", "APP_PROFILES")
            .with("ENVSLOTS_LOGGING_LOCAL_ENABLED", "true")
            .with("ENVSLOTS_LOGGING_LOCAL_ROTATION", "hourly");

        let config = load_config_with(temp_file.path(), &env).unwrap();

        assert_eq!(config.profiles.key, "app.profiles");
        assert_eq!(config.profiles.override_key(), "APP_PROFILES");
        assert!(config.logging.local_enabled);
        assert_eq!(config.logging.local_rotation, "hourly");
    }

    #[test]
    fn test_invalid_bool_override() {
        let mut config = EnvslotsConfig::default();
        let env = MapReader::new().with("ENVSLOTS_LOGGING_LOCAL_ENABLED", "maybe");
        assert!(apply_env_overrides(&mut config, &env).is_err());
    }

    #[test]
    fn test_validation_failure() {
        let temp_file = write_config("[application]\nlog_level = \"loud\"\n");
        let err = load_config_with(temp_file.path(), &MapReader::new()).unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }

    #[test]
    fn test_fallback_keeps_error() {
        let temp_file = write_config("[application]\nlog_level = \"loud\"\n");
        let (config, error) = load_config_or_fallback(temp_file.path());

        assert_eq!(config, EnvslotsConfig::default());
        let error = error.expect("invalid log level should be reported");
        assert!(error.to_string().contains("Invalid log_level 'loud'"));
    }

    #[test]
    fn test_parse_failure() {
        let temp_file = write_config("[profiles\nkey = ");
        let err = load_config_with(temp_file.path(), &MapReader::new()).unwrap_err();
        assert!(matches!(err, EnvslotsError::Configuration(_)));
    }
}
