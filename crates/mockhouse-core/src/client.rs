use crate::{error::ClientError, row::Row, rows::Rows, value::Value};
use derive_more::Display;

///
/// MockClient
///
/// Programmable stand-in for a ClickHouse-style client. Tests preload at most
/// one result-set fixture and one single-row fixture; queries hand the
/// fixtures back without reading the query text or bind arguments. Everything
/// else on the surface succeeds as a no-op.
///

#[derive(Clone, Debug, Default)]
pub struct MockClient {
    rows: Option<Rows>,
    row: Option<Row>,
}

impl MockClient {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: None,
            row: None,
        }
    }

    /// Install the result-set fixture served by `query`.
    #[must_use]
    pub fn with_rows(mut self, rows: Rows) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Install the single-row fixture served by `query_row`.
    #[must_use]
    pub fn with_row(mut self, row: Row) -> Self {
        self.row = Some(row);
        self
    }

    /// Hand out a fresh cursor over the preloaded table.
    ///
    /// Every call restarts iteration; the fixture is never consumed. Fails
    /// when no result set is installed.
    pub fn query(&self, _query: &str, _args: &[Value]) -> Result<Rows, ClientError> {
        self.rows
            .as_ref()
            .map(Rows::reopened)
            .ok_or(ClientError::RowsNotConfigured)
    }

    /// Hand out the preloaded single row.
    ///
    /// # Panics
    ///
    /// Panics when no single-row fixture is installed. A missing fixture is a
    /// test-authoring bug, so this fails at the fault point instead of
    /// returning an error.
    #[must_use]
    pub fn query_row(&self, _query: &str, _args: &[Value]) -> Row {
        match &self.row {
            Some(row) => row.clone(),
            None => panic!("no single-row result configured for this client"),
        }
    }

    /// Accept and discard a statement.
    pub const fn exec(&self, _query: &str, _args: &[Value]) -> Result<(), ClientError> {
        Ok(())
    }

    /// Accept and discard an asynchronous insert; `wait` is ignored.
    pub const fn async_insert(&self, _query: &str, _wait: bool) -> Result<(), ClientError> {
        Ok(())
    }

    /// Liveness probe; the mock is always reachable.
    pub const fn ping(&self) -> Result<(), ClientError> {
        Ok(())
    }

    /// Fixed placeholder identity; no handshake backs it.
    pub const fn server_version(&self) -> Result<ServerVersion, ClientError> {
        Ok(ServerVersion::placeholder())
    }

    /// Release the client; nothing to release, never fails.
    pub const fn close(&self) -> Result<(), ClientError> {
        Ok(())
    }
}

///
/// ServerVersion
///
/// Server identity as reported by the mock. The values are inert
/// placeholders; assert on them only to pin the mock's contract.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServerVersion {
    pub name: &'static str,
    pub display_name: &'static str,
    pub revision: u64,
    pub version: Version,
    pub timezone: &'static str,
}

impl ServerVersion {
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            name: "name",
            display_name: "display-name",
            revision: 0,
            version: Version::ZERO,
            timezone: "America/New_York",
        }
    }
}

///
/// Version
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
#[display("{major}.{minor}.{patch}")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const ZERO: Self = Self {
        major: 0,
        minor: 0,
        patch: 0,
    };
}
