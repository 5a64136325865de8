//! Read capability over a named-value store
//!
//! The property source never touches the process environment directly. It
//! reads through [`ValueReader`], so tests can hand it a [`MapReader`] or a
//! closure instead of mutating real global state.

use std::collections::BTreeMap;

/// Point lookup of a named value
///
/// Implementations must be side-effect free; readers are shared across
/// threads and may be called any number of times.
pub trait ValueReader: Send + Sync {
    /// Returns the raw value stored under `name`, if any
    fn read(&self, name: &str) -> Option<String>;
}

impl<F> ValueReader for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn read(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Reads from the process environment
///
/// Only unset variables read as absent. A value that is not valid unicode
/// is converted lossily, so its presence is never lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ValueReader for SystemEnv {
    fn read(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

/// In-memory store, mostly useful as a deterministic fixture
///
/// # Examples
///
/// ```
/// use envslots::adapters::{MapReader, ValueReader};
///
/// let reader = MapReader::new().with("PARAM1", "a=1");
/// assert_eq!(reader.read("PARAM1").as_deref(), Some("a=1"));
/// assert_eq!(reader.read("PARAM2"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapReader {
    values: BTreeMap<String, String>,
}

impl MapReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MapReader
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ValueReader for MapReader {
    fn read(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
