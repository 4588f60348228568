use crate::{
    error::{Error, ScanError},
    scan::{self, ScanRow, ScanTargets},
    value::Value,
};
use std::sync::Arc;

///
/// Rows
///
/// A preloaded result set with an instance-owned cursor. The table itself is
/// shared (`MockClient::query` hands out a fresh cursor over the same data on
/// every call), the iteration state is not: two instances advance fully
/// independently, threads included.
///
/// The cursor starts before the first row; `next` must return `true` before
/// the first scan, and a scan reads the row of the most recent advance.
///

#[derive(Clone, Debug)]
pub struct Rows {
    table: Arc<Vec<Vec<Value>>>,
    cursor: usize,
    state: CursorState,
}

///
/// CursorState
///
/// `Active` spans both "before the first row" (cursor 0) and "positioned on
/// row k-1" (cursor k). `Exhausted` and `Closed` are terminal.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CursorState {
    Active,
    Exhausted,
    Closed,
}

impl Rows {
    #[must_use]
    pub fn new(table: Vec<Vec<Value>>) -> Self {
        Self {
            table: Arc::new(table),
            cursor: 0,
            state: CursorState::Active,
        }
    }

    /// Fresh cursor over the same shared table.
    pub(crate) fn reopened(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            cursor: 0,
            state: CursorState::Active,
        }
    }

    /// Advance to the next row.
    ///
    /// Returns `true` exactly once per preloaded row, then `false` forever;
    /// repeated calls past the end (or after `close`) are harmless.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.state != CursorState::Active {
            return false;
        }
        if self.cursor >= self.table.len() {
            self.state = CursorState::Exhausted;
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Scan the current row into the destination pack.
    ///
    /// Intended once per successful `next`. Assigns up to the shorter of the
    /// column count and the destination count; surplus on either side is
    /// ignored. Fails with `EndOfRows` when no row is positioned.
    pub fn scan<D: ScanTargets>(&self, mut dest: D) -> Result<(), ScanError> {
        let row = self.current()?;
        scan::assign_slots_lenient(row, &mut dest)
    }

    /// Scan the current row into `dest`'s fields, in declaration order.
    ///
    /// Assigns up to the shorter of the field count and the column count;
    /// skipped fields consume their column without being written.
    pub fn scan_struct<T: ScanRow>(&self, dest: &mut T) -> Result<(), ScanError> {
        let row = self.current()?;
        scan::assign_fields_lenient(row, dest)
    }

    /// Column names; the mock models no column metadata.
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        &[]
    }

    /// Column type metadata; always empty, like `columns`.
    #[must_use]
    pub const fn column_types(&self) -> &'static [ColumnType] {
        &[]
    }

    /// Totals row; the mock never carries one, so nothing is assigned.
    pub fn totals<D: ScanTargets>(&self, _dest: D) -> Result<(), ScanError> {
        Ok(())
    }

    /// Deferred error check mirroring the real client surface; never fails.
    pub const fn err(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Release the cursor. Idempotent, and never fails.
    ///
    /// A closed cursor reports no more rows and refuses further scans.
    pub fn close(&mut self) -> Result<(), Error> {
        self.state = CursorState::Closed;
        Ok(())
    }

    fn current(&self) -> Result<&[Value], ScanError> {
        if self.state != CursorState::Active || self.cursor == 0 {
            return Err(ScanError::EndOfRows);
        }
        self.table
            .get(self.cursor - 1)
            .map(Vec::as_slice)
            .ok_or(ScanError::EndOfRows)
    }
}

///
/// ColumnType
///
/// Column metadata record. The mock never populates one; the type exists so
/// call sites iterating `column_types` keep compiling.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnType {
    pub name: &'static str,
    pub database_type: &'static str,
}
