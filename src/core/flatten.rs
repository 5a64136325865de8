//! Custom slot flattening
//!
//! A custom slot packs several properties into one value:
//!
//! ```text
//! name1=value1, name2=value2, ..., nameN=valueN
//! ```
//!
//! Parsing is lenient. Segments that do not split into exactly one name and
//! one value are dropped silently; nothing here can fail.

use crate::domain::PropertyMap;

/// Separates segments within a custom slot value
pub const SEGMENT_DELIMITER: char = ',';

/// Separates a segment's name from its value
pub const NAME_VALUE_DELIMITER: char = '=';

/// Flatten a raw custom slot value into ordered properties
///
/// Segments are split on `,` and trimmed; blank segments are skipped. Each
/// remaining segment becomes a property when [`flatten_segment`] accepts it.
/// A later segment with the same name overwrites an earlier one.
///
/// # Examples
///
/// ```
/// use envslots::core::flatten::flatten;
///
/// let props = flatten(" a = 1 ,, b=2, c, d=1=2");
/// let entries: Vec<(&str, &str)> = props.iter().collect();
/// assert_eq!(entries, vec![("a", "1"), ("b", "2")]);
/// ```
pub fn flatten(raw: &str) -> PropertyMap {
    raw.split(SEGMENT_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(flatten_segment)
        .collect()
}

/// Parse one segment into a `(name, value)` pair
///
/// The segment is split on every `=`, tokens are trimmed and empty tokens are
/// discarded. Only a segment left with exactly two tokens is a pair, so
/// `a==1` is accepted while `a=1=2` is rejected as a whole rather than
/// truncated to its first two tokens.
pub fn flatten_segment(segment: &str) -> Option<(String, String)> {
    let tokens: Vec<&str> = segment
        .split(NAME_VALUE_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    match tokens.as_slice() {
        [name, value] => Some((name.to_string(), value.to_string())),
        _ => {
            // Segment content may hold credentials, only its shape is logged.
            tracing::trace!(token_count = tokens.len(), "Dropping malformed segment");
            None
        }
    }
}
