use super::Output;
use crate::{FieldKey, Value};

use indexmap::IndexMap;

/// Values to be written to a row, in the order they were supplied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Input {
    values: IndexMap<FieldKey, Value>,
}

impl Input {
    pub fn new() -> Input {
        Input::default()
    }

    /// Sets the value written under `key`, returning the value it replaces.
    pub fn insert(&mut self, key: impl Into<FieldKey>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &FieldKey) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> + '_ {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &Value)> + '_ {
        self.values.iter()
    }
}

impl Output for Input {
    fn get(&self, key: &FieldKey) -> Option<&Value> {
        self.values.get(key)
    }
}

impl IntoIterator for Input {
    type Item = (FieldKey, Value);
    type IntoIter = indexmap::map::IntoIter<FieldKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<K: Into<FieldKey>, V: Into<Value>> FromIterator<(K, V)> for Input {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Input {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
