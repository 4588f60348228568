use crate::{
    error::{Error, ScanError},
    scan::{self, ScanRow, ScanTargets},
    value::Value,
};

///
/// Row
///
/// A single preloaded row, the fixture behind `MockClient::query_row`. Both
/// scan forms are strict: the whole row is taken or nothing is.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Deferred error check mirroring the real client surface; never fails.
    pub const fn err(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Scan every column into the destination pack, in order.
    ///
    /// The destination count must equal the column count. The first
    /// conversion failure aborts the scan; earlier destinations keep their
    /// assignments.
    pub fn scan<D: ScanTargets>(&self, mut dest: D) -> Result<(), ScanError> {
        scan::assign_slots_strict(&self.values, &mut dest)
    }

    /// Scan every column into `dest`'s fields, in declaration order.
    ///
    /// The field count must equal the column count, every field must be
    /// settable, and every conversion must be exact.
    pub fn scan_struct<T: ScanRow>(&self, dest: &mut T) -> Result<(), ScanError> {
        scan::assign_fields_strict(&self.values, dest)
    }
}
