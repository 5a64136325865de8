// Envslots - Platform configuration slot expander
// Copyright (c) 2025 Envslots Contributors
// Licensed under the MIT License

//! # Envslots
//!
//! Some hosting platforms only pass a handful of fixed configuration slots to
//! an application (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_KEY`,
//! `JDBC_CONNECTION_STRING`, `PARAM1`..`PARAM5`). Envslots turns those slots
//! into an open-ended set of named properties and derives the application's
//! active profiles from them.
//!
//! ## Overview
//!
//! - **Flattening** custom slots: `PARAM1="db.pool=10, profiles.active=prod|aws"`
//!   yields `db.pool -> 10` and `profiles.active -> prod|aws`
//! - **Collecting** every slot into one ordered [`domain::PropertyMap`]
//! - **Resolving** active profiles, unless an explicit override is already set
//!
//! ## Architecture
//!
//! - [`domain`] - slot catalog, property and profile types, errors
//! - [`core`] - flattening, property collection, profile resolution
//! - [`adapters`] - read and apply capabilities
//! - [`config`] - configuration management
//! - [`logging`] - structured logging
//! - [`cli`] - command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use envslots::adapters::{ActiveProfiles, SystemEnv, ValueReader};
//! use envslots::core::{ActiveProfileResolver, EnvironmentPropertySource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = EnvironmentPropertySource::from_env();
//! let resolver = ActiveProfileResolver::new("profiles.active")?;
//! let mut active = ActiveProfiles::default();
//!
//! let resolution = resolver.initialize(
//!     || SystemEnv.read("profiles.active"),
//!     &source,
//!     &mut active,
//! );
//! println!("{resolution}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Envslots uses structured logging with the `tracing` crate. Values of
//! credential slots and raw segment contents are never logged.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
