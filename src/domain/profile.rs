//! Active profile lists

use serde::Serialize;
use std::fmt;

/// Delimiter between profile names in a property value
pub const PROFILE_DELIMITER: char = '|';

/// Ordered list of active profile names
///
/// Order is preserved and duplicates are kept.
///
/// # Examples
///
/// ```
/// use envslots::domain::profile::ProfileList;
///
/// let profiles = ProfileList::parse("p1|p2| p3 ||p1");
/// assert_eq!(profiles.as_slice(), ["p1", "p2", "p3", "p1"]);
/// assert!(ProfileList::parse(" | ").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProfileList(Vec<String>);

impl ProfileList {
    /// Splits a pipe-delimited value, trimming items and dropping empty ones
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(PROFILE_DELIMITER)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ProfileList {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl<'a> IntoIterator for &'a ProfileList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProfileList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}
