//! Well-known platform configuration slots
//!
//! The hosting platform exposes a small, closed set of named slots. Their
//! catalog order is significant: the property source walks the slots in the
//! order of [`SlotName::ALL`] and later insertions overwrite earlier ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier prefix shared by every custom slot
pub const CUSTOM_PARAM_PREFIX: &str = "PARAM";

/// A platform configuration slot
///
/// # Examples
///
/// ```
/// use envslots::domain::slot::SlotName;
/// use std::str::FromStr;
///
/// let slot = SlotName::from_str("PARAM2").unwrap();
/// assert_eq!(slot, SlotName::Param2);
/// assert!(slot.is_custom());
/// assert!(!SlotName::JdbcConnectionString.is_custom());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotName {
    AwsAccessKeyId,
    AwsSecretKey,
    JdbcConnectionString,
    Param1,
    Param2,
    Param3,
    Param4,
    Param5,
}

impl SlotName {
    /// Every slot, in catalog order
    pub const ALL: [SlotName; 8] = [
        SlotName::AwsAccessKeyId,
        SlotName::AwsSecretKey,
        SlotName::JdbcConnectionString,
        SlotName::Param1,
        SlotName::Param2,
        SlotName::Param3,
        SlotName::Param4,
        SlotName::Param5,
    ];

    /// Returns the identifier the platform uses for this slot
    pub const fn as_str(&self) -> &'static str {
        match self {
            SlotName::AwsAccessKeyId => "AWS_ACCESS_KEY_ID",
            SlotName::AwsSecretKey => "AWS_SECRET_KEY",
            SlotName::JdbcConnectionString => "JDBC_CONNECTION_STRING",
            SlotName::Param1 => "PARAM1",
            SlotName::Param2 => "PARAM2",
            SlotName::Param3 => "PARAM3",
            SlotName::Param4 => "PARAM4",
            SlotName::Param5 => "PARAM5",
        }
    }

    /// Whether the slot's value may embed `name=value` pairs
    pub fn is_custom(&self) -> bool {
        self.as_str().starts_with(CUSTOM_PARAM_PREFIX)
    }

    /// Whether the slot carries a credential that must not be echoed
    pub fn is_sensitive(&self) -> bool {
        matches!(self, SlotName::AwsSecretKey | SlotName::JdbcConnectionString)
    }

    /// Iterates the catalog in its defined order
    pub fn iter() -> impl Iterator<Item = SlotName> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SlotName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SlotName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown slot '{s}'"))
    }
}
