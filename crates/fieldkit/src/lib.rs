//! Compound field mapping for flat rows.
//!
//! A model is any [`Fields`] type: a struct whose members are properties
//! ([`Field`] for a single column, [`CompoundField`] for a whole nested
//! model). A compound field embeds the nested model's columns in the owner's
//! row under a prefix:
//!
//! ```
//! use fieldkit::{CompoundField, Field, Fields};
//!
//! #[derive(Debug, Clone, Fields)]
//! struct Address {
//!     street: Field<String>,
//!     city: Field<String>,
//! }
//!
//! #[derive(Debug, Clone, Fields)]
//! struct User {
//!     name: Field<String>,
//!     home: CompoundField<Address>,
//! }
//!
//! let user = User::default();
//! let columns: Vec<_> = user.keys().iter().map(|key| key.to_string()).collect();
//! assert_eq!(columns, ["name", "home_street", "home_city"]);
//! ```

extern crate self as fieldkit;

pub mod codec;

mod compound;
pub use compound::{CompoundField, Projected, DEFAULT_SEPARATOR};

mod field;
pub use field::Field;

mod fields;
pub use fields::Fields;

mod primitive;
pub use primitive::Primitive;

mod property;
pub use property::{FieldAccess, Keyed, Property};

pub use fieldkit_core::{
    err, path, Error, FieldKey, FieldPath, Input, Output, Prefixed, Result, Row, Type, Value,
};

pub use fieldkit_macros::Fields;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{codec, CompoundField, Fields, Keyed, Property};
    pub use serde;
    pub use std::{default::Default, vec::Vec};
}
