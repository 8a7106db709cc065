use super::{Error, ErrorKind};
use crate::FieldKey;

/// Error when a row does not carry a column a field needs.
#[derive(Debug)]
pub(super) struct MissingFieldError {
    key: FieldKey,
}

impl std::error::Error for MissingFieldError {}

impl core::fmt::Display for MissingFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing field `{}`", self.key)
    }
}

impl Error {
    /// Creates a missing field error for `key`.
    pub fn missing_field(key: &FieldKey) -> Error {
        Error::from(ErrorKind::MissingField(MissingFieldError { key: key.clone() }))
    }

    /// Returns `true` if this error, or any error it wraps, is a missing field error.
    pub fn is_missing_field(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::MissingField(_)))
    }
}
