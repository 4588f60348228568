//! Core runtime for Mockhouse: dynamic column values, the scanning contracts,
//! preloaded row and result-set fixtures, and the mock client facade.
#![warn(unreachable_pub)]

extern crate self as mockhouse;

pub mod client;
pub mod error;
pub mod row;
pub mod rows;
pub mod scan;
pub mod value;

mod macros;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, scan plumbing, or conversion traits are re-exported here.
///

pub mod prelude {
    pub use crate::{client::MockClient, row::Row, rows::Rows, value::Value};
}
