use fieldkit_core::{FieldKey, FieldPath, Input, Output, Result};

/// The persistence lifecycle shared by every member of a [`Fields`](crate::Fields) model.
pub trait Property {
    /// The keys this property occupies in the owner's row.
    ///
    /// Must not depend on the property's current value: schema declaration
    /// happens before any row exists.
    fn keys(&self) -> Vec<FieldKey>;

    /// Writes the property's current value into `input`.
    fn input(&self, input: &mut Input);

    /// Replaces the property's value with the one read from `output`.
    fn output(&mut self, output: &dyn Output) -> Result<()>;
}

/// An addressable attribute: exposes its value and the path that names it.
///
/// Query and schema code use the path to refer to the attribute's storage.
pub trait FieldAccess {
    type Value;

    /// The attribute's value, if it holds one.
    fn value(&self) -> Option<&Self::Value>;

    /// The attribute's path. Empty when the attribute is a whole nested value
    /// with no storage key of its own.
    fn path(&self) -> FieldPath;
}

/// Properties that can be constructed from their member name.
pub trait Keyed {
    fn keyed(name: &str) -> Self;
}
