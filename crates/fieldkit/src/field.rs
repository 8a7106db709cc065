use crate::{FieldAccess, Keyed, Primitive, Property};
use fieldkit_core::{FieldKey, FieldPath, Input, Output, Result};

/// A property stored in a single column.
///
/// The field is unset until it is assigned or read from a row that carries
/// its column. Unset fields contribute nothing to row input.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    key: FieldKey,
    value: Option<T>,
}

impl<T> Field<T> {
    pub fn new(key: impl Into<FieldKey>) -> Field<T> {
        Field {
            key: key.into(),
            value: None,
        }
    }

    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn set(&mut self, value: impl Into<T>) {
        self.value = Some(value.into());
    }
}

impl<T: Primitive> Property for Field<T> {
    fn keys(&self) -> Vec<FieldKey> {
        vec![self.key.clone()]
    }

    fn input(&self, input: &mut Input) {
        if let Some(value) = &self.value {
            input.insert(self.key.clone(), value.to_value());
        }
    }

    fn output(&mut self, output: &dyn Output) -> Result<()> {
        // Nullable columns may be absent; the field is then left unset
        if T::NULLABLE && !output.contains(&self.key) {
            self.value = None;
            return Ok(());
        }

        let value = output.require(&self.key)?.clone();
        self.value = Some(T::load(value)?);
        Ok(())
    }
}

impl<T> FieldAccess for Field<T> {
    type Value = T;

    fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    fn path(&self) -> FieldPath {
        FieldPath::from(self.key.clone())
    }
}

impl<T> Keyed for Field<T> {
    fn keyed(name: &str) -> Self {
        Field::new(name)
    }
}
