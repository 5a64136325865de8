//! Domain models and types for envslots.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The slot catalog** ([`SlotName`]) - the closed, ordered set of platform slots
//! - **Property mapping** ([`PropertyMap`]) - ordered name/value pairs with overwrite semantics
//! - **Profile lists** ([`ProfileList`]) - ordered active profile names
//! - **Error types** ([`EnvslotsError`]) and the [`Result`] alias
//!
//! ```rust
//! use envslots::domain::{PropertyMap, SlotName};
//!
//! let mut props = PropertyMap::new();
//! for slot in SlotName::iter().filter(SlotName::is_custom) {
//!     props.insert(slot.as_str(), "");
//! }
//! assert_eq!(props.len(), 5);
//! ```

pub mod errors;
pub mod profile;
pub mod property;
pub mod result;
pub mod slot;

pub use errors::EnvslotsError;
pub use profile::ProfileList;
pub use property::PropertyMap;
pub use result::Result;
pub use slot::{SlotName, CUSTOM_PARAM_PREFIX};
