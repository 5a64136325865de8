//! Core algorithms for envslots.
//!
//! # Modules
//!
//! - [`flatten`] - lenient `name=value, ...` parsing of custom slot values
//! - [`source`] - builds the property map from the platform slots
//! - [`resolver`] - override precedence and active profile resolution
//!
//! # Data Flow
//!
//! 1. **Read**: each catalog slot is read through a [`ValueReader`](crate::adapters::ValueReader)
//! 2. **Normalize**: values are trimmed; blank values count as absent
//! 3. **Flatten**: custom slot values are split into embedded properties
//! 4. **Merge**: everything lands in one ordered [`PropertyMap`](crate::domain::PropertyMap)
//! 5. **Resolve**: unless an override is set, the profiles key is split on `|`
//! 6. **Apply**: a non-empty list replaces the target's active profiles
//!
//! All of this is synchronous and keeps no state between calls, so a source
//! and a resolver can be shared freely across threads.
//!
//! # Example
//!
//! ```rust
//! use envslots::adapters::{ActiveProfiles, MapReader};
//! use envslots::core::{ActiveProfileResolver, EnvironmentPropertySource};
//!
//! let source = EnvironmentPropertySource::new(
//!     MapReader::new().with("PARAM1", "profiles.active=staging"),
//! );
//! let mut active = ActiveProfiles::default();
//! ActiveProfileResolver::default().initialize(|| None, &source, &mut active);
//! assert_eq!(active.profiles().as_slice(), ["staging"]);
//! ```

pub mod flatten;
pub mod resolver;
pub mod source;

pub use flatten::flatten;
pub use resolver::{ActiveProfileResolver, Resolution, DEFAULT_PROFILES_KEY};
pub use source::{normalize, EnvironmentPropertySource};
