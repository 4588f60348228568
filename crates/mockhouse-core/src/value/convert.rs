use crate::value::Value;
use thiserror::Error as ThisError;

///
/// AssignError
///
/// Single-slot conversion failure, carrying the two type names but no
/// position. Scan loops lift it into a positioned error.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("cannot assign value of type {actual} to destination of type {expected}")]
pub struct AssignError {
    /// Destination type name.
    pub expected: &'static str,
    /// Dynamic type name of the refused value.
    pub actual: &'static str,
}

///
/// FromValue
///
/// Conversion out of a dynamically-typed column value. A conversion succeeds
/// only when the value's variant is the destination's own variant; there is
/// no widening and no lossy coercion anywhere in the crate.
///

pub trait FromValue: Sized {
    /// Destination type name used in error messages.
    ///
    /// The default is the full path name; concrete impls shorten it.
    #[must_use]
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Convert `value` when its dynamic type matches exactly.
    fn from_value(value: &Value) -> Option<Self>;
}

/// Assign `value` into `slot`, writing only on success.
///
/// This is the one coercion routine; every scan path funnels through it. On
/// failure the slot keeps its prior contents.
pub fn assign<T: FromValue>(value: &Value, slot: &mut T) -> Result<(), AssignError> {
    match T::from_value(value) {
        Some(converted) => {
            *slot = converted;
            Ok(())
        }
        None => Err(AssignError {
            expected: T::type_name(),
            actual: value.type_name(),
        }),
    }
}

///
/// Impls
///

macro_rules! impl_from_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FromValue for $type {
                fn type_name() -> &'static str {
                    stringify!($type)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    i8   => Int8,
    i16  => Int16,
    i32  => Int32,
    i64  => Int64,
    u8   => UInt8,
    u16  => UInt16,
    u32  => UInt32,
    u64  => UInt64,
    f32  => Float32,
    f64  => Float64,
}

impl FromValue for String {
    fn type_name() -> &'static str {
        "String"
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

// Byte vectors are blobs; `Array(UInt8(..))` does not convert.
impl FromValue for Vec<u8> {
    fn type_name() -> &'static str {
        "Vec<u8>"
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Blob(bytes) => Some(bytes.clone()),
            _ => None,
        }
    }
}

macro_rules! impl_from_value_array {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl FromValue for Vec<$type> {
                fn type_name() -> &'static str {
                    concat!("Vec<", stringify!($type), ">")
                }

                fn from_value(value: &Value) -> Option<Self> {
                    let Value::Array(items) = value else {
                        return None;
                    };
                    // All elements must convert; one bad element fails the lot.
                    items.iter().map(<$type>::from_value).collect()
                }
            }
        )*
    };
}

impl_from_value_array! {
    bool, i8, i16, i32, i64, u16, u32, u64, f32, f64, String, Value,
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }
        T::from_value(value).map(Some)
    }
}

impl FromValue for Value {
    fn type_name() -> &'static str {
        "Value"
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}
