#[cfg(test)]
mod tests;

use crate::{
    error::ScanError,
    value::{AssignError, FromValue, Value, assign},
};

///
/// FieldSpec
///
/// Static descriptor for one derived struct field, in declaration order.
/// Skipped fields stay in the list so positional alignment holds.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub settable: bool,
}

///
/// ScanRow
///
/// Struct destination for positional struct scans. Normally derived with
/// `#[derive(ScanRow)]`; a field marked `#[scan(skip)]` keeps its slot in
/// `FIELDS` but is never written.
///

pub trait ScanRow {
    /// Field descriptors in declaration order, skipped fields included.
    const FIELDS: &'static [FieldSpec];

    /// Assign `value` into the field at `index`.
    ///
    /// Skipped fields and indices at or beyond the field count are no-ops.
    fn assign_field(&mut self, index: usize, value: &Value) -> Result<(), AssignError>;
}

///
/// ScanTargets
///
/// Positional destination pack for `scan`. Implemented for tuples of
/// `&mut T` from one up to twelve elements; the single-destination form is
/// the one-tuple `(&mut x,)`.
///

pub trait ScanTargets {
    /// Number of destination slots.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assign `value` into slot `index`.
    ///
    /// Indices at or beyond `len()` are no-ops.
    fn set(&mut self, index: usize, value: &Value) -> Result<(), AssignError>;
}

macro_rules! impl_scan_targets {
    ( $len:literal => $( $idx:tt : $type:ident ),+ ) => {
        impl<'a, $( $type: FromValue ),+> ScanTargets for ( $( &'a mut $type, )+ ) {
            fn len(&self) -> usize {
                $len
            }

            fn set(&mut self, index: usize, value: &Value) -> Result<(), AssignError> {
                match index {
                    $( $idx => assign(value, &mut *self.$idx), )+
                    _ => Ok(()),
                }
            }
        }
    };
}

impl_scan_targets!(1 => 0: T0);
impl_scan_targets!(2 => 0: T0, 1: T1);
impl_scan_targets!(3 => 0: T0, 1: T1, 2: T2);
impl_scan_targets!(4 => 0: T0, 1: T1, 2: T2, 3: T3);
impl_scan_targets!(5 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
impl_scan_targets!(6 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5);
impl_scan_targets!(7 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6);
impl_scan_targets!(8 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7);
impl_scan_targets!(9 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8);
impl_scan_targets!(10 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8, 9: T9);
impl_scan_targets!(11 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8, 9: T9, 10: T10);
impl_scan_targets!(12 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8, 9: T9, 10: T10, 11: T11);

///
/// Scan policies
///
/// The strict pair backs the single-row scanner, the lenient pair backs the
/// cursor result set. All four assign in column order and stop at the first
/// failure, so earlier destinations keep what they were given.
///

pub(crate) fn assign_slots_strict<D: ScanTargets>(
    columns: &[Value],
    dest: &mut D,
) -> Result<(), ScanError> {
    if dest.len() != columns.len() {
        return Err(ScanError::ArityMismatch {
            expected: columns.len(),
            found: dest.len(),
        });
    }

    assign_slots(columns, dest, columns.len())
}

pub(crate) fn assign_slots_lenient<D: ScanTargets>(
    columns: &[Value],
    dest: &mut D,
) -> Result<(), ScanError> {
    assign_slots(columns, dest, columns.len().min(dest.len()))
}

fn assign_slots<D: ScanTargets>(
    columns: &[Value],
    dest: &mut D,
    bound: usize,
) -> Result<(), ScanError> {
    for (column, value) in columns.iter().take(bound).enumerate() {
        dest.set(column, value).map_err(|err| ScanError::TypeMismatch {
            column,
            expected: err.expected,
            actual: err.actual,
        })?;
    }

    Ok(())
}

pub(crate) fn assign_fields_strict<T: ScanRow>(
    columns: &[Value],
    dest: &mut T,
) -> Result<(), ScanError> {
    if T::FIELDS.len() != columns.len() {
        return Err(ScanError::ArityMismatch {
            expected: columns.len(),
            found: T::FIELDS.len(),
        });
    }

    for (index, (spec, value)) in T::FIELDS.iter().zip(columns).enumerate() {
        if !spec.settable {
            return Err(ScanError::SkippedField { field: spec.name });
        }
        assign_field(dest, index, spec, value)?;
    }

    Ok(())
}

pub(crate) fn assign_fields_lenient<T: ScanRow>(
    columns: &[Value],
    dest: &mut T,
) -> Result<(), ScanError> {
    let bound = T::FIELDS.len().min(columns.len());

    for (index, (spec, value)) in T::FIELDS.iter().zip(columns).take(bound).enumerate() {
        // A skipped field still consumes its column; alignment is positional.
        if spec.settable {
            assign_field(dest, index, spec, value)?;
        }
    }

    Ok(())
}

fn assign_field<T: ScanRow>(
    dest: &mut T,
    index: usize,
    spec: &FieldSpec,
    value: &Value,
) -> Result<(), ScanError> {
    dest.assign_field(index, value)
        .map_err(|err| ScanError::FieldTypeMismatch {
            field: spec.name,
            expected: err.expected,
            actual: err.actual,
        })
}
