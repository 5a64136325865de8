//! Environment property source
//!
//! Builds a [`PropertyMap`] from the platform's slots. Every slot with a
//! value contributes a `SLOT_NAME -> value` entry; custom slots additionally
//! contribute the properties embedded in their value.

use crate::adapters::{SystemEnv, ValueReader};
use crate::core::flatten::flatten;
use crate::domain::{PropertyMap, SlotName};

/// Trim a raw value, treating a blank result as absent
///
/// # Examples
///
/// ```
/// use envslots::core::source::normalize;
///
/// assert_eq!(normalize(Some("  x ".to_string())), Some("x".to_string()));
/// assert_eq!(normalize(Some(" \t".to_string())), None);
/// assert_eq!(normalize(None), None);
/// ```
pub fn normalize(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == raw.len() {
        Some(raw)
    } else {
        Some(trimmed.to_string())
    }
}

/// Collects properties from the platform slots through a [`ValueReader`]
///
/// The source holds no state besides its reader: every call to
/// [`collect`](Self::collect) reads the slots afresh and builds a new map.
///
/// # Examples
///
/// ```
/// use envslots::adapters::MapReader;
/// use envslots::core::source::EnvironmentPropertySource;
///
/// let reader = MapReader::new()
///     .with("AWS_ACCESS_KEY_ID", "AKIA")
///     .with("PARAM1", "k=v");
/// let props = EnvironmentPropertySource::new(reader).collect();
///
/// let entries: Vec<(&str, &str)> = props.iter().collect();
/// assert_eq!(
///     entries,
///     vec![("AWS_ACCESS_KEY_ID", "AKIA"), ("PARAM1", "k=v"), ("k", "v")]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentPropertySource<R> {
    reader: R,
}

impl EnvironmentPropertySource<SystemEnv> {
    /// Source backed by the process environment
    pub fn from_env() -> Self {
        Self::new(SystemEnv)
    }
}

impl<R: ValueReader> EnvironmentPropertySource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read and normalize a single slot
    pub fn read_slot(&self, slot: SlotName) -> Option<String> {
        normalize(self.reader.read(slot.as_str()))
    }

    /// Build the property map
    ///
    /// Slots are visited in catalog order. A custom slot's embedded
    /// properties are inserted right after its own entry, so an embedded
    /// property named like a slot overwrites that slot's entry.
    pub fn collect(&self) -> PropertyMap {
        let mut props = PropertyMap::new();

        for slot in SlotName::iter() {
            let Some(value) = self.read_slot(slot) else {
                continue;
            };

            let embedded = if slot.is_custom() {
                flatten(&value)
            } else {
                PropertyMap::new()
            };

            props.insert(slot.as_str(), value);

            if !embedded.is_empty() {
                tracing::debug!(
                    slot = %slot,
                    embedded_count = embedded.len(),
                    "Flattened custom slot"
                );
                props.extend(embedded);
            }
        }

        tracing::debug!(property_count = props.len(), "Collected slot properties");
        props
    }
}
