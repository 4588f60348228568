use thiserror::Error as ThisError;

///
/// Error
///
/// Umbrella error for callers that bubble both scanning and client failures
/// through one `Result`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

///
/// ScanError
///
/// Failures raised while assigning preloaded column values into caller
/// destinations. Errors are values; nothing is logged and nothing retries.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ScanError {
    /// Strict scans require the destination count to equal the column count.
    #[error("expected {expected} destination arguments, got {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// Positional conversion failure; earlier columns keep their assignments.
    #[error("cannot assign value of type {actual} to destination of type {expected} at column {column}")]
    TypeMismatch {
        column: usize,
        expected: &'static str,
        actual: &'static str,
    },

    /// Conversion failure keyed by struct field name.
    #[error("cannot assign value of type {actual} to field `{field}` of type {expected}")]
    FieldTypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// Strict struct scans refuse fields marked `#[scan(skip)]`.
    #[error("field `{field}` is marked skip and cannot be scanned")]
    SkippedField { field: &'static str },

    /// The cursor is not positioned on a row.
    #[error("no row positioned: call next() before scanning")]
    EndOfRows,
}

///
/// ClientError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ClientError {
    /// A multi-row query was issued but no result set fixture is installed.
    #[error("no rows configured for this client")]
    RowsNotConfigured,
}
