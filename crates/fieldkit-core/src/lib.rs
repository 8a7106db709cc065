#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod field;
pub use field::{FieldKey, FieldPath};

pub mod row;
pub use row::{Input, Output, Prefixed, Row};

pub mod value;
pub use value::{Type, Value};

/// A Result type alias that uses fieldkit's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
