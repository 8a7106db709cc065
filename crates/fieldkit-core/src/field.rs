mod key;
pub use key::FieldKey;

mod path;
pub use path::FieldPath;
