
use crate::{
    error::ScanError,
    scan::{
        FieldSpec, ScanRow, ScanTargets, assign_fields_lenient, assign_fields_strict,
        assign_slots_lenient, assign_slots_strict,
    },
    value::Value,
};
use mockhouse_derive::ScanRow;

// ---- fixtures ----------------------------------------------------------

#[derive(Debug, Default, PartialEq, ScanRow)]
struct Visit {
    path: String,
    hits: i64,
}

#[derive(Debug, Default, PartialEq, ScanRow)]
struct Session {
    id: i64,
    #[scan(skip)]
    cache: String,
    user: String,
}

fn visit_row() -> Vec<Value> {
    vec![Value::Text("/index".into()), Value::Int64(9)]
}

// ---- tuple destinations ------------------------------------------------

#[test]
fn tuples_report_their_arity() {
    let (mut a, mut b, mut c) = (0i64, String::new(), false);
    assert_eq!((&mut a,).len(), 1);
    assert_eq!((&mut a, &mut b).len(), 2);
    assert!(!(&mut a, &mut b, &mut c).is_empty());
}

#[test]
fn set_past_the_last_slot_is_a_no_op() {
    let mut a = 5i64;
    let mut dest = (&mut a,);
    dest.set(3, &Value::Text("ignored".into()))
        .expect("out-of-range set should be a no-op");
    assert_eq!(a, 5);
}

// ---- positional policies -----------------------------------------------

#[test]
fn strict_slots_assign_every_column_in_order() {
    let row = visit_row();
    let (mut path, mut hits) = (String::new(), 0i64);

    assign_slots_strict(&row, &mut (&mut path, &mut hits)).expect("matching row should scan");

    assert_eq!(path, "/index");
    assert_eq!(hits, 9);
}

#[test]
fn strict_slots_reject_any_arity_difference() {
    let row = visit_row();
    let mut path = String::new();

    let err = assign_slots_strict(&row, &mut (&mut path,))
        .expect_err("one destination for two columns should fail");
    assert_eq!(
        err,
        ScanError::ArityMismatch {
            expected: 2,
            found: 1,
        }
    );

    let (mut a, mut b, mut c) = (String::new(), 0i64, 0i64);
    let err = assign_slots_strict(&row, &mut (&mut a, &mut b, &mut c))
        .expect_err("three destinations for two columns should fail");
    assert_eq!(
        err,
        ScanError::ArityMismatch {
            expected: 2,
            found: 3,
        }
    );
}

#[test]
fn strict_slots_stop_at_the_first_mismatch_and_keep_earlier_writes() {
    let row = visit_row();
    let (mut path, mut hits) = (String::new(), String::new());

    let err = assign_slots_strict(&row, &mut (&mut path, &mut hits))
        .expect_err("Int64 into String should fail");
    assert_eq!(
        err,
        ScanError::TypeMismatch {
            column: 1,
            expected: "String",
            actual: "Int64",
        }
    );
    assert_eq!(path, "/index", "column 0 was assigned before the failure");
    assert_eq!(hits, "", "column 1 must stay untouched");
}

#[test]
fn lenient_slots_truncate_to_the_shorter_side() {
    let row = visit_row();

    // Fewer destinations than columns: the surplus columns are dropped.
    let mut path = String::new();
    assign_slots_lenient(&row, &mut (&mut path,)).expect("truncated scan should succeed");
    assert_eq!(path, "/index");

    // More destinations than columns: the surplus slots keep their contents.
    let (mut a, mut b, mut c) = (String::new(), 0i64, 123i64);
    assign_slots_lenient(&row, &mut (&mut a, &mut b, &mut c))
        .expect("extra destinations should be ignored");
    assert_eq!((a.as_str(), b, c), ("/index", 9, 123));
}

#[test]
fn lenient_slots_still_enforce_exact_types() {
    let row = visit_row();
    let (mut path, mut hits) = (String::new(), 0u64);

    let err = assign_slots_lenient(&row, &mut (&mut path, &mut hits))
        .expect_err("Int64 into u64 should fail");
    assert_eq!(
        err,
        ScanError::TypeMismatch {
            column: 1,
            expected: "u64",
            actual: "Int64",
        }
    );
}

// ---- struct policies ---------------------------------------------------

#[test]
fn derived_fields_keep_declaration_order_and_flags() {
    assert_eq!(
        Visit::FIELDS,
        &[
            FieldSpec {
                name: "path",
                settable: true,
            },
            FieldSpec {
                name: "hits",
                settable: true,
            },
        ]
    );
    assert_eq!(
        Session::FIELDS,
        &[
            FieldSpec {
                name: "id",
                settable: true,
            },
            FieldSpec {
                name: "cache",
                settable: false,
            },
            FieldSpec {
                name: "user",
                settable: true,
            },
        ]
    );
}

#[test]
fn strict_fields_fill_the_whole_struct() {
    let mut visit = Visit::default();
    assign_fields_strict(&visit_row(), &mut visit).expect("matching struct should scan");
    assert_eq!(
        visit,
        Visit {
            path: "/index".into(),
            hits: 9,
        }
    );
}

#[test]
fn strict_fields_reject_arity_differences() {
    let mut visit = Visit::default();
    let err = assign_fields_strict(&[Value::Text("/index".into())], &mut visit)
        .expect_err("one column for two fields should fail");
    assert_eq!(
        err,
        ScanError::ArityMismatch {
            expected: 1,
            found: 2,
        }
    );
}

#[test]
fn strict_fields_refuse_skipped_fields() {
    let mut session = Session::default();
    let row = vec![
        Value::Int64(1),
        Value::Text("stale".into()),
        Value::Text("ada".into()),
    ];

    let err = assign_fields_strict(&row, &mut session).expect_err("skipped field should fail");
    assert_eq!(err, ScanError::SkippedField { field: "cache" });
    assert_eq!(session.id, 1, "fields before the skip keep their assignment");
    assert_eq!(session.user, "", "fields after the skip stay untouched");
}

#[test]
fn strict_fields_report_mismatches_by_field_name() {
    let mut visit = Visit::default();
    let row = vec![Value::Text("/index".into()), Value::Bool(true)];

    let err = assign_fields_strict(&row, &mut visit).expect_err("Bool into i64 should fail");
    assert_eq!(
        err,
        ScanError::FieldTypeMismatch {
            field: "hits",
            expected: "i64",
            actual: "Bool",
        }
    );
}

#[test]
fn lenient_fields_skip_silently_but_consume_the_column() {
    let mut session = Session::default();
    let row = vec![
        Value::Int64(1),
        Value::Text("stale".into()),
        Value::Text("ada".into()),
    ];

    assign_fields_lenient(&row, &mut session).expect("lenient scan should pass over the skip");
    assert_eq!(session.id, 1);
    assert_eq!(session.cache, "", "skipped field is never written");
    assert_eq!(session.user, "ada", "the skip consumed column 1, not column 2");
}

#[test]
fn lenient_fields_truncate_to_the_shorter_side() {
    let mut visit = Visit::default();
    assign_fields_lenient(&[Value::Text("/a".into())], &mut visit)
        .expect("fewer columns than fields should scan");
    assert_eq!(visit.path, "/a");
    assert_eq!(visit.hits, 0, "unmatched field keeps its default");

    let mut visit = Visit::default();
    let wide = vec![Value::Text("/b".into()), Value::Int64(2), Value::Null];
    assign_fields_lenient(&wide, &mut visit).expect("extra columns should be dropped");
    assert_eq!(
        visit,
        Visit {
            path: "/b".into(),
            hits: 2,
        }
    );
}
