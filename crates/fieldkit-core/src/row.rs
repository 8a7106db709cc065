//! Flat row structures exchanged with the storage layer.
//!
//! Writes go through [`Input`], keyed by [`FieldKey`](crate::FieldKey). Reads
//! go through the [`Output`] trait, implemented by [`Row`] (what a driver
//! hands back, keyed by column name) and by [`Input`] itself. Compound fields
//! read their nested members through a [`Prefixed`] view.

mod input;
pub use input::Input;

mod output;
pub use output::Output;

mod prefixed;
pub use prefixed::Prefixed;

mod record;
pub use record::Row;
