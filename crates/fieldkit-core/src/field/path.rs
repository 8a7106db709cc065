use super::FieldKey;

use std::{fmt, ops};

/// An ordered traversal of field keys into a (possibly nested) attribute.
///
/// An empty path addresses a whole nested value that has no storage key of
/// its own.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    keys: Vec<FieldKey>,
}

impl FieldPath {
    pub const fn empty() -> FieldPath {
        FieldPath { keys: Vec::new() }
    }

    pub fn as_slice(&self) -> &[FieldKey] {
        &self.keys
    }

    /// Returns a copy of this path with `prefix` applied to its first segment.
    pub fn prefixed(&self, prefix: &str) -> FieldPath {
        self.clone().into_prefixed(prefix)
    }

    /// Applies `prefix` to the first segment only.
    ///
    /// Deeper segments belong to nested compound fields which prefix their own
    /// boundary, so rewriting them here would apply a prefix twice. Empty paths
    /// are returned unchanged.
    pub fn into_prefixed(mut self, prefix: &str) -> FieldPath {
        if let Some(first) = self.keys.first_mut() {
            let base = std::mem::replace(first, FieldKey::Id);
            *first = FieldKey::prefixed(prefix, base);
        }
        self
    }
}

impl ops::Deref for FieldPath {
    type Target = [FieldKey];

    fn deref(&self) -> &Self::Target {
        &self.keys[..]
    }
}

impl From<FieldKey> for FieldPath {
    fn from(key: FieldKey) -> Self {
        FieldPath { keys: vec![key] }
    }
}

impl FromIterator<FieldKey> for FieldPath {
    fn from_iter<T: IntoIterator<Item = FieldKey>>(iter: T) -> Self {
        FieldPath {
            keys: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FieldPath {
    type Item = FieldKey;
    type IntoIter = std::vec::IntoIter<FieldKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldPath {
    type Item = &'a FieldKey;
    type IntoIter = std::slice::Iter<'a, FieldKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(key, f)?;
        }
        Ok(())
    }
}
