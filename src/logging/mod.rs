//! Logging and observability
//!
//! Structured logging via `tracing`, with:
//! - Human-readable console output on stderr
//! - Configurable log levels (`RUST_LOG` takes precedence)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use envslots::config::LoggingConfig;
//! use envslots::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
