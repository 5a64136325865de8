//! Domain error types
//!
//! The slot flattening and profile resolution algorithms are total and never
//! produce errors. Everything in this module belongs to the surrounding
//! application: configuration loading, caller preconditions and logging setup.

use thiserror::Error;

/// Main envslots error type
#[derive(Debug, Error)]
pub enum EnvslotsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller precondition violations (e.g. a blank target key)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl From<toml::de::Error> for EnvslotsError {
    fn from(err: toml::de::Error) -> Self {
        EnvslotsError::Configuration(format!("TOML parse error: {err}"))
    }
}
