use super::{Input, Output};
use crate::{FieldKey, Value};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A flat row keyed by column name.
///
/// This is the shape a driver returns. Lookups resolve a [`FieldKey`] through
/// its storage name, so `Prefixed { prefix: "home_", key: "city" }` reads the
/// `home_city` column.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.columns.insert(column.into(), value.into())
    }

    pub fn column(&self, name: &str) -> Option<&Value> {
        self.columns.get(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Output for Row {
    fn get(&self, key: &FieldKey) -> Option<&Value> {
        self.columns.get(&*key.storage_name())
    }
}

impl From<Input> for Row {
    fn from(input: Input) -> Self {
        input
            .into_iter()
            .map(|(key, value)| (key.storage_name().into_owned(), value))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Row {
            columns: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
