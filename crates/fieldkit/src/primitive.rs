use fieldkit_core::{Result, Value};

use uuid::Uuid;

/// A Rust type that is stored in a single column.
pub trait Primitive: Sized {
    /// `true` for types that store no value as `Value::Null`. A nullable
    /// field tolerates its column being absent from a row.
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty, )* ) => {
        $(
            impl Primitive for $ty {
                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }
            }
        )*
    };
}

impl_primitive! {
    bool,
    i32,
    i64,
    f64,
    String,
    Uuid,
}

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
