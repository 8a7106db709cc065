/// The type of a stored [`Value`](super::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I32,
    I64,
    F64,
    String,
    Uuid,

    /// The type of `Value::Null`
    Null,
}
