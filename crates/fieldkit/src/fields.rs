use crate::Property;
use fieldkit_core::{FieldKey, Input, Output, Result, Value};

/// A structured model made of properties.
///
/// Implementors list their properties; the lifecycle methods are provided on
/// top of that list. Usually derived with `#[derive(Fields)]`, which also
/// derives a `Default` that keys every property by its member name.
///
/// `Default` must be total: it is how fresh instances are materialized, both
/// when a compound field is first read and when key metadata is needed.
pub trait Fields: Default {
    fn properties(&self) -> Vec<&dyn Property>;

    fn properties_mut(&mut self) -> Vec<&mut dyn Property>;

    /// Every key the model occupies in a row, in property order.
    fn keys(&self) -> Vec<FieldKey> {
        self.properties()
            .into_iter()
            .flat_map(|property| property.keys())
            .collect()
    }

    /// Writes the model's current values into `input`.
    fn input(&self, input: &mut Input) {
        for property in self.properties() {
            property.input(input);
        }
    }

    /// Collects the model's current values into a fresh [`Input`].
    fn input_values(&self) -> Input {
        let mut input = Input::new();
        self.input(&mut input);
        input
    }

    /// Populates the model from `output`.
    ///
    /// Stops at the first property that fails, so `self` may be left partially
    /// populated on error. Callers that need atomicity read into a fresh
    /// instance (as [`CompoundField`](crate::CompoundField) does).
    fn output(&mut self, output: &dyn Output) -> Result<()> {
        for property in self.properties_mut() {
            property.output(output)?;
        }
        Ok(())
    }

    /// The canonical "no value" representation, for models that have one.
    ///
    /// Transport decoding assigns this when it encounters an explicit null.
    fn null() -> Option<Self> {
        None
    }
}

/// An optional model: `None` is stored as a null in every column of `T`.
impl<T: Fields> Fields for Option<T> {
    fn properties(&self) -> Vec<&dyn Property> {
        match self {
            Some(value) => value.properties(),
            None => vec![],
        }
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn Property> {
        match self {
            Some(value) => value.properties_mut(),
            None => vec![],
        }
    }

    fn keys(&self) -> Vec<FieldKey> {
        match self {
            Some(value) => value.keys(),
            None => T::default().keys(),
        }
    }

    fn input(&self, input: &mut Input) {
        match self {
            Some(value) => value.input(input),
            None => {
                for key in T::default().keys() {
                    input.insert(key, Value::Null);
                }
            }
        }
    }

    fn output(&mut self, output: &dyn Output) -> Result<()> {
        let absent = T::default()
            .keys()
            .iter()
            .all(|key| output.get(key).map_or(true, Value::is_null));

        if absent {
            *self = None;
            return Ok(());
        }

        let mut value = T::default();
        value.output(output)?;
        *self = Some(value);
        Ok(())
    }

    fn null() -> Option<Self> {
        Some(None)
    }
}
