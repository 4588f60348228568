//! Literal construction macros for row and table fixtures.

/// Build a `Vec<Value>` row literal; every element goes through `Value::from`.
///
/// ```ignore
/// let row = values!["ada", 36u8, Value::Null];
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ( $( $value:expr ),+ $(,)? ) => {
        ::std::vec![ $( $crate::value::Value::from($value) ),+ ]
    };
}

/// Build a `Vec<Vec<Value>>` table literal, row-major.
///
/// ```ignore
/// let table = table![["a", 1i64], ["b", 2i64]];
/// ```
#[macro_export]
macro_rules! table {
    () => {
        ::std::vec::Vec::<::std::vec::Vec<$crate::value::Value>>::new()
    };
    ( $( [ $( $value:expr ),* $(,)? ] ),+ $(,)? ) => {
        ::std::vec![ $( $crate::values![ $( $value ),* ] ),+ ]
    };
}
