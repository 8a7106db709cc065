use super::Prefixed;
use crate::{Error, FieldKey, Result, Value};

/// A readable row.
pub trait Output {
    /// Returns the value stored under `key`, if the row carries it.
    fn get(&self, key: &FieldKey) -> Option<&Value>;

    fn contains(&self, key: &FieldKey) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value stored under `key`, or a missing field error.
    fn require(&self, key: &FieldKey) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::missing_field(key))
    }
}

impl<'a> dyn Output + 'a {
    /// Returns a view of this row where every lookup of `key` resolves
    /// `FieldKey::prefixed(prefix, key)` instead.
    pub fn prefixed<'b>(&'b self, prefix: &'b str) -> Prefixed<'b> {
        Prefixed::new(self, prefix)
    }
}

impl<T: Output + ?Sized> Output for &T {
    fn get(&self, key: &FieldKey) -> Option<&Value> {
        (**self).get(key)
    }
}
