mod convert;


use serde::{Deserialize, Serialize};

// re-exports
pub use convert::{AssignError, FromValue, assign};

///
/// Value
///
/// Dynamically-typed column value preloaded into row fixtures.
///
/// Null → the column carries no value; scans accept it only into `Option`
/// destinations.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Blob(Vec<u8>),
    Array(Vec<Value>),
}

impl Value {
    /// Variant name, as reported in scan error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Int8(_) => "Int8",
            Self::Int16(_) => "Int16",
            Self::Int32(_) => "Int32",
            Self::Int64(_) => "Int64",
            Self::UInt8(_) => "UInt8",
            Self::UInt16(_) => "UInt16",
            Self::UInt32(_) => "UInt32",
            Self::UInt64(_) => "UInt64",
            Self::Float32(_) => "Float32",
            Self::Float64(_) => "Float64",
            Self::Text(_) => "Text",
            Self::Blob(_) => "Blob",
            Self::Array(_) => "Array",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Build a `Value::Array` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

///
/// From impls
///
/// One conversion per fixture literal type. `Vec<u8>` maps to `Blob`, so the
/// per-element array conversions cover every scalar except `u8`.
///

macro_rules! impl_value_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from! {
    bool   => Bool,
    i8     => Int8,
    i16    => Int16,
    i32    => Int32,
    i64    => Int64,
    u8     => UInt8,
    u16    => UInt16,
    u32    => UInt32,
    u64    => UInt64,
    f32    => Float32,
    f64    => Float64,
    &str   => Text,
    String => Text,
}

macro_rules! impl_value_from_array {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<Vec<$type>> for Value {
                fn from(items: Vec<$type>) -> Self {
                    Self::from_list(items)
                }
            }
        )*
    };
}

impl_value_from_array! {
    bool, i8, i16, i32, i64, u16, u32, u64, f32, f64, &str, String, Value,
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Blob(bytes)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
