use super::CompoundField;
use crate::{FieldAccess, Fields};
use fieldkit_core::FieldPath;

/// One member of a compound field's nested model, addressed from the owner.
///
/// Derived on demand by [`CompoundField::field`]; it carries the member as
/// found on a default instance, so [`value`](FieldAccess::value) reports the
/// member's default rather than live data.
#[derive(Debug, Clone, PartialEq)]
pub struct Projected<F> {
    prefix: String,
    field: F,
}

impl<F> Projected<F> {
    pub fn new(prefix: impl Into<String>, field: F) -> Projected<F> {
        Projected {
            prefix: prefix.into(),
            field,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn field(&self) -> &F {
        &self.field
    }
}

impl<W: Fields> Projected<CompoundField<W>> {
    /// Continues the projection into a member of a nested compound field.
    ///
    /// Each level prefixes only its own boundary, so a leaf two levels down
    /// ends up with both prefixes applied outermost-first.
    pub fn project<F, A>(&self, accessor: A) -> Projected<Projected<F>>
    where
        A: FnOnce(&W) -> &F,
        F: Clone,
    {
        Projected::new(self.prefix.clone(), self.field.field(accessor))
    }
}

impl<F: FieldAccess> FieldAccess for Projected<F> {
    type Value = F::Value;

    fn value(&self) -> Option<&F::Value> {
        self.field.value()
    }

    fn path(&self) -> FieldPath {
        self.field.path().into_prefixed(&self.prefix)
    }
}
