use super::Output;
use crate::{FieldKey, Result, Value};

use std::fmt;

/// A prefix-scoped view over another [`Output`].
///
/// Views nest: a view over a view resolves the outer prefix last, so the key
/// seen by the underlying row carries every prefix outermost-first.
#[derive(Clone, Copy)]
pub struct Prefixed<'a> {
    output: &'a dyn Output,
    prefix: &'a str,
}

impl<'a> Prefixed<'a> {
    pub fn new(output: &'a dyn Output, prefix: &'a str) -> Prefixed<'a> {
        Prefixed { output, prefix }
    }

    pub fn prefix(&self) -> &'a str {
        self.prefix
    }
}

impl Output for Prefixed<'_> {
    fn get(&self, key: &FieldKey) -> Option<&Value> {
        self.output
            .get(&FieldKey::prefixed(self.prefix, key.clone()))
    }

    // Report the key as the underlying row sees it
    fn require(&self, key: &FieldKey) -> Result<&Value> {
        self.output
            .require(&FieldKey::prefixed(self.prefix, key.clone()))
    }
}

impl fmt::Debug for Prefixed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prefixed")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
