//! Active profile resolution
//!
//! Decides which profile names, if any, should be handed to a
//! [`ProfileTarget`]. Precedence, first match wins:
//!
//! 1. An explicit override is already set. The target is expected to honor
//!    it by itself, so the resolver stays inert.
//! 2. The slot properties carry the target key. Its value is split on `|`
//!    and applied, replacing the target's current list.
//! 3. Otherwise nothing happens.
//!
//! None of these outcomes is an error.

use crate::adapters::{ProfileTarget, ValueReader};
use crate::core::source::EnvironmentPropertySource;
use crate::domain::{EnvslotsError, ProfileList, Result};
use std::fmt;

/// Property name that carries the active profiles by default
pub const DEFAULT_PROFILES_KEY: &str = "profiles.active";

/// Terminal state of one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An override is already set; nothing was looked up or applied
    OverridePresent { value: String },
    /// The slots produced no properties at all
    NoProperties,
    /// The slot properties do not contain the target key
    KeyAbsent,
    /// The target key is present but lists no profile names
    EmptyList,
    /// Profiles to apply
    Resolved(ProfileList),
}

impl Resolution {
    /// The resolved profiles, if resolution produced any
    pub fn profiles(&self) -> Option<&ProfileList> {
        match self {
            Resolution::Resolved(profiles) => Some(profiles),
            _ => None,
        }
    }

    pub fn into_profiles(self) -> Option<ProfileList> {
        match self {
            Resolution::Resolved(profiles) => Some(profiles),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Short machine-friendly name of the outcome
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::OverridePresent { .. } => "override_present",
            Resolution::NoProperties => "no_properties",
            Resolution::KeyAbsent => "key_absent",
            Resolution::EmptyList => "empty_list",
            Resolution::Resolved(_) => "resolved",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::OverridePresent { value } => write!(f, "override already set ({value})"),
            Resolution::NoProperties => f.write_str("no slot properties found"),
            Resolution::KeyAbsent => f.write_str("profiles key not set"),
            Resolution::EmptyList => f.write_str("profiles key lists no profiles"),
            Resolution::Resolved(profiles) => write!(f, "resolved profiles: {profiles}"),
        }
    }
}

/// Resolves the active profile list for one target key
///
/// # Examples
///
/// ```
/// use envslots::adapters::{ActiveProfiles, MapReader};
/// use envslots::core::resolver::ActiveProfileResolver;
/// use envslots::core::source::EnvironmentPropertySource;
///
/// # fn example() -> envslots::domain::Result<()> {
/// let source = EnvironmentPropertySource::new(
///     MapReader::new().with("PARAM1", "profiles.active=prod|aws, region=eu"),
/// );
/// let resolver = ActiveProfileResolver::new("profiles.active")?;
/// let mut active = ActiveProfiles::default();
///
/// let resolution = resolver.initialize(|| None, &source, &mut active);
/// assert!(resolution.is_resolved());
/// assert_eq!(active.profiles().as_slice(), ["prod", "aws"]);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProfileResolver {
    key: String,
}

impl ActiveProfileResolver {
    /// Creates a resolver for `key`
    ///
    /// # Errors
    ///
    /// Returns [`EnvslotsError::Validation`] if the key is blank.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(EnvslotsError::Validation(
                "Profiles key cannot be empty".to_string(),
            ));
        }
        Ok(Self { key })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Work out which profiles should be applied, without applying them
    ///
    /// `override_read` is called first and exactly once. When it yields a
    /// value, even an empty one, the property source is never consulted.
    pub fn resolve<O, R>(
        &self,
        override_read: O,
        source: &EnvironmentPropertySource<R>,
    ) -> Resolution
    where
        O: FnOnce() -> Option<String>,
        R: ValueReader,
    {
        if let Some(value) = override_read() {
            tracing::info!(
                key = %self.key,
                "Override is already set and will be honored as is; no active profiles will be applied"
            );
            return Resolution::OverridePresent { value };
        }

        let props = source.collect();
        if props.is_empty() {
            return Resolution::NoProperties;
        }

        let Some(value) = props.get(&self.key) else {
            tracing::debug!(
                key = %self.key,
                "Profiles key not found in slot properties; no active profiles will be applied"
            );
            return Resolution::KeyAbsent;
        };

        let profiles = ProfileList::parse(value);
        if profiles.is_empty() {
            return Resolution::EmptyList;
        }

        Resolution::Resolved(profiles)
    }

    /// Resolve and, when profiles were found, apply them to `target`
    ///
    /// The target is touched at most once and only for
    /// [`Resolution::Resolved`].
    pub fn initialize<O, R, T>(
        &self,
        override_read: O,
        source: &EnvironmentPropertySource<R>,
        target: &mut T,
    ) -> Resolution
    where
        O: FnOnce() -> Option<String>,
        R: ValueReader,
        T: ProfileTarget + ?Sized,
    {
        let resolution = self.resolve(override_read, source);
        if let Resolution::Resolved(profiles) = &resolution {
            tracing::debug!(profiles = %profiles, "Applying discovered active profiles");
            target.apply_profiles(profiles);
        }
        resolution
    }
}

impl Default for ActiveProfileResolver {
    fn default() -> Self {
        Self {
            key: DEFAULT_PROFILES_KEY.to_string(),
        }
    }
}
