// Data file loading tests for dobj

mod common;

use common::*;
use dobj_core::error::LoadError;
use dobj_core::record::{load_objects, parse_records};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Serialized records parse back to the same records, in order
    #[test]
    fn test_records_survive_json(records in arb_records()) {
        let json = serde_json::to_string(&records).unwrap();
        let parsed = parse_records(&json)?;
        prop_assert_eq!(parsed, records);
    }

    /// Integers outside their declared width are rejected
    #[test]
    fn test_out_of_range_integers_rejected(width in 1u32..63, excess in 0i64..1000) {
        let value = (1i64 << (width - 1)) + excess;
        let json = format!(r#"[{{"type": "integer", "value": {}, "width": {}}}]"#, value, width);
        match load_objects(&json) {
            Err(LoadError::IntegerOutOfRange { value: v, width: w }) => {
                prop_assert_eq!(v, value);
                prop_assert_eq!(w, width);
            }
            other => prop_assert!(
                false,
                "Expected IntegerOutOfRange, got {:?}",
                other.map(|o| o.len())
            ),
        }
    }

    /// Widths outside 1..=64 are rejected before range checks
    #[test]
    fn test_invalid_widths_rejected(width in 65u32..10_000) {
        let json = format!(r#"[{{"type": "integer", "value": 0, "width": {}}}]"#, width);
        prop_assert!(matches!(
            load_objects(&json),
            Err(LoadError::InvalidWidth { width: w }) if w == width
        ), "expected InvalidWidth error for width {}", width);
    }
}

#[test]
fn test_empty_array_loads_empty_container() {
    let objects = load_objects("[]").unwrap();
    assert!(objects.is_empty());
}

#[test]
fn test_malformed_json() {
    assert!(matches!(load_objects("[{"), Err(LoadError::Json(_))));
    assert!(matches!(load_objects("{}"), Err(LoadError::Json(_))));
}

#[test]
fn test_first_invalid_record_fails_whole_file() {
    let json = r#"[
        {"type": "string", "text": "ok", "encoding": "utf-8"},
        {"type": "integer", "value": -129, "width": 8}
    ]"#;
    assert!(matches!(
        load_objects(json),
        Err(LoadError::IntegerOutOfRange {
            value: -129,
            width: 8
        })
    ));
}
