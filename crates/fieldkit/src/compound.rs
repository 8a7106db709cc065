mod projected;
pub use projected::Projected;

use crate::{FieldAccess, Fields, Keyed, Property};
use fieldkit_core::{err, FieldKey, FieldPath, Input, Output, Result};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

/// Separator placed between a compound field's key and its members' keys.
pub const DEFAULT_SEPARATOR: &str = "_";

/// A property embedding a whole nested model in the owner's row.
///
/// Every key of the nested model `V` is stored under this field's prefix:
/// a `CompoundField<Address>` with prefix `home_` stores `Address::city` in
/// the `home_city` column. The nested value is absent until it is read,
/// assigned, or loaded from a row.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundField<V> {
    prefix: String,
    value: Option<V>,
}

impl<V: Fields> CompoundField<V> {
    pub fn new(prefix: impl Into<String>) -> CompoundField<V> {
        CompoundField {
            prefix: prefix.into(),
            value: None,
        }
    }

    /// Creates a compound field whose prefix is `key` followed by `separator`.
    pub fn with_key(key: &str, separator: &str) -> CompoundField<V> {
        CompoundField::new(format!("{key}{separator}"))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The nested value, without materializing it.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// Replaces the nested value, discarding whatever was held before.
    pub fn set_value(&mut self, value: Option<V>) {
        self.value = value;
    }

    pub fn take(&mut self) -> Option<V> {
        self.value.take()
    }

    /// Returns the nested value, materializing `V::default()` first if it is
    /// absent. Later calls return the same instance until it is replaced.
    pub fn get(&mut self) -> &mut V {
        self.value.get_or_insert_with(|| {
            trace!(prefix = %self.prefix, "materializing compound field");
            V::default()
        })
    }

    /// Replaces the nested value.
    pub fn set(&mut self, value: V) {
        self.value = Some(value);
    }

    /// Projects one member of the nested model to a path under this prefix.
    ///
    /// The member is taken from a fresh `V::default()`, not from the held
    /// value, so projecting never observes or materializes state.
    pub fn field<F, A>(&self, accessor: A) -> Projected<F>
    where
        A: FnOnce(&V) -> &F,
        F: Clone,
    {
        let template = V::default();
        Projected::new(self.prefix.clone(), accessor(&template).clone())
    }

    /// Serializes the nested value as a single value, materializing it first.
    pub fn encode<S>(&mut self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        self.get().serialize(serializer)
    }

    /// Replaces the nested value with one deserialized from `deserializer`.
    ///
    /// An explicit null is accepted only when `V` has a null representation
    /// (see [`Fields::null`]); it is then assigned as-is.
    pub fn decode<'de, D>(&mut self, deserializer: D) -> core::result::Result<(), D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        match Option::<V>::deserialize(deserializer)? {
            Some(value) => self.value = Some(value),
            None => match V::null() {
                Some(null) => {
                    debug!(prefix = %self.prefix, "decoded null compound field");
                    self.value = Some(null);
                }
                None => {
                    return Err(de::Error::invalid_type(
                        de::Unexpected::Option,
                        &"a non-null nested value",
                    ))
                }
            },
        }
        Ok(())
    }
}

impl<V: Fields> Property for CompoundField<V> {
    /// Keys of the nested model under this field's prefix.
    ///
    /// When no value is held a transient default supplies the keys; it is
    /// not stored, so `value()` stays `None`.
    fn keys(&self) -> Vec<FieldKey> {
        let keys = match &self.value {
            Some(value) => value.keys(),
            None => V::default().keys(),
        };

        keys.into_iter()
            .map(|key| FieldKey::prefixed(self.prefix.as_str(), key))
            .collect()
    }

    fn input(&self, input: &mut Input) {
        let Some(value) = &self.value else {
            return;
        };

        for (key, value) in value.input_values() {
            input.insert(FieldKey::prefixed(self.prefix.as_str(), key), value);
        }
    }

    fn output(&mut self, output: &dyn Output) -> Result<()> {
        let mut value = V::default();
        value
            .output(&output.prefixed(&self.prefix))
            .map_err(|e| e.context(err!("failed to load compound field `{}`", self.prefix)))?;

        trace!(prefix = %self.prefix, "loaded compound field");
        self.value = Some(value);
        Ok(())
    }
}

impl<V: Fields> FieldAccess for CompoundField<V> {
    type Value = V;

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn path(&self) -> FieldPath {
        FieldPath::empty()
    }
}

impl<V: Fields> Keyed for CompoundField<V> {
    fn keyed(name: &str) -> Self {
        CompoundField::with_key(name, DEFAULT_SEPARATOR)
    }
}

/// Serializes the held value, or a default one if none is held.
///
/// Unlike [`CompoundField::encode`] this does not store the default.
impl<V: Fields + Serialize> Serialize for CompoundField<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match &self.value {
            Some(value) => value.serialize(serializer),
            None => V::default().serialize(serializer),
        }
    }
}
