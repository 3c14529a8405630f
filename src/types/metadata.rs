//! Ordered metadata entries attached to reasons.

use core::fmt;

use crate::types::alloc_type::{Cow, String, Vec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single metadata value.
///
/// Values are a closed set of plain data shapes so reasons stay structurally
/// comparable and cheaply cloneable. `From` conversions cover the common
/// primitives:
///
/// ```
/// use reason_rail::MetadataValue;
///
/// assert_eq!(MetadataValue::from(3), MetadataValue::Int(3));
/// assert_eq!(MetadataValue::from("id"), MetadataValue::Str("id".into()));
/// assert_eq!(MetadataValue::from(true), MetadataValue::Bool(true));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for MetadataValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(String::from(value))
    }
}

impl From<String> for MetadataValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Cow<'static, str>> for MetadataValue {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

impl From<i64> for MetadataValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for MetadataValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for MetadataValue {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for MetadataValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for MetadataValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered key/value entries with unique keys.
///
/// Insertion order is preserved. Writing an existing key replaces the value
/// in place, keeping the key's original position.
///
/// # Examples
///
/// ```
/// use reason_rail::Metadata;
///
/// let mut metadata = Metadata::new();
/// metadata.insert("attempt", 1);
/// metadata.insert("host", "db-3");
/// metadata.insert("attempt", 2);
///
/// assert_eq!(metadata.len(), 2);
/// assert_eq!(metadata.to_string(), "attempt=2; host=db-3");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    /// Creates an empty metadata map.
    #[inline]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns `true` when no entries are present.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts an entry. An existing key keeps its position and takes the
    /// new value.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Merges another map into this one, entry by entry.
    pub fn merge(&mut self, other: Metadata) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{key}={value}")?;
            first = false;
        }
        Ok(())
    }
}
