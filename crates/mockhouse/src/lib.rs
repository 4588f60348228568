//! ## Crate layout
//! - `client`: the programmable mock client facade.
//! - `error`: scanning and client error types.
//! - `row` / `rows`: single-row and cursor result-set fixtures.
//! - `scan`: destination contracts behind both scan forms.
//! - `value`: dynamically-typed column values and their conversions.
//!
//! The `prelude` module mirrors the surface a test file touches.

pub use mockhouse_core::{client, error, row, rows, scan, value};

// fixture literal macros
pub use mockhouse_core::{table, values};

// the derive shares its name with the `scan::ScanRow` trait
pub use mockhouse_derive::ScanRow;

pub use mockhouse_core::error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        ScanRow,
        client::{MockClient, ServerVersion, Version},
        error::{ClientError, Error, ScanError},
        row::Row,
        rows::{ColumnType, Rows},
        scan::ScanRow as _,
        table,
        value::{FromValue as _, Value},
        values,
    };
}
