//! Bulk Put Tests
//!
//! Observable effects of the bulk put function on a region.

use crate::common::*;
use proptest::prelude::*;
use regionfn::function::{bulk_put, BulkPutArgs};

fn sorted(mut keys: Vec<String>) -> Vec<String> {
    keys.sort();
    keys
}

// ============================================================================
// Basic behavior
// ============================================================================

#[test]
fn writes_value_under_generated_keys() {
    let test_grid = TestGrid::new();

    let result = test_grid
        .bulk_put(vec![Value::from("x"), Value::Float(3.0)])
        .unwrap();

    assert_eq!(result, Value::Bool(true));
    let region = test_grid.region();
    assert_eq!(region.keys(), vec!["foo0", "foo1", "foo2"]);
    for key in ["foo0", "foo1", "foo2"] {
        assert_eq!(region.get(key), Some(Value::from("x")));
    }
}

#[test]
fn zero_count_writes_nothing_and_succeeds() {
    let test_grid = TestGrid::new();

    let result = test_grid
        .bulk_put(vec![Value::from("x"), Value::Float(0.0)])
        .unwrap();

    assert_eq!(result, Value::Bool(true));
    assert!(test_grid.region().is_empty());
}

#[test]
fn fractional_count_truncates() {
    let test_grid = TestGrid::new();

    test_grid
        .bulk_put(vec![Value::from("x"), Value::Float(2.9)])
        .unwrap();

    assert_eq!(test_grid.region().keys(), vec!["foo0", "foo1"]);
}

#[test]
fn forty_two_keys_end_at_foo41() {
    let test_grid = TestGrid::new();

    test_grid
        .bulk_put(vec![Value::Int(1), Value::Float(42.0)])
        .unwrap();

    let region = test_grid.region();
    assert_eq!(region.len(), 42);
    assert!(region.contains_key("foo41"));
    assert!(!region.contains_key("foo42"));
    assert!(!region.contains_key("foo00"));
}

#[test]
fn leaves_unrelated_keys_alone() {
    let test_grid = TestGrid::new();
    test_grid.grid.put(DEFAULT_REGION, "bar", "keep").unwrap();
    test_grid.grid.put(DEFAULT_REGION, "foo5", "keep").unwrap();

    test_grid
        .bulk_put(vec![Value::from("x"), Value::Float(3.0)])
        .unwrap();

    let region = test_grid.region();
    assert_eq!(region.get("bar"), Some(Value::from("keep")));
    assert_eq!(region.get("foo5"), Some(Value::from("keep")));
    assert_eq!(region.len(), 5);
}

#[test]
fn stores_structured_values_unchanged() {
    let test_grid = TestGrid::new();
    let value = Value::from(json!({"foo": "bar", "n": [1, 2, 3]}));

    test_grid
        .bulk_put(vec![value.clone(), Value::Float(2.0)])
        .unwrap();

    assert_eq!(test_grid.region().get("foo1"), Some(value));
}

// ============================================================================
// Overwrite semantics
// ============================================================================

#[test]
fn reinvoking_overwrites_and_extends() {
    let test_grid = TestGrid::new();

    test_grid
        .bulk_put(vec![Value::from("v"), Value::Float(3.0)])
        .unwrap();
    test_grid
        .bulk_put(vec![Value::from("w"), Value::Float(5.0)])
        .unwrap();

    let region = test_grid.region();
    assert_eq!(region.keys(), expected_keys(5));
    for key in expected_keys(5) {
        assert_eq!(region.get(&key), Some(Value::from("w")));
    }
}

#[test]
fn repeating_same_invocation_is_idempotent() {
    let test_grid = TestGrid::new();

    test_grid
        .bulk_put(vec![Value::from("v"), Value::Float(4.0)])
        .unwrap();
    let first: Vec<_> = test_grid
        .region()
        .keys()
        .into_iter()
        .map(|k| (k.clone(), test_grid.region().get(&k)))
        .collect();

    test_grid
        .bulk_put(vec![Value::from("v"), Value::Float(4.0)])
        .unwrap();
    let second: Vec<_> = test_grid
        .region()
        .keys()
        .into_iter()
        .map(|k| (k.clone(), test_grid.region().get(&k)))
        .collect();

    assert_eq!(first, second);
}

// ============================================================================
// Invalid arguments
// ============================================================================

#[test]
fn missing_count_is_invalid_argument() {
    let test_grid = TestGrid::new();

    let err = test_grid.bulk_put(vec![Value::from("x")]).unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(test_grid.region().is_empty());
}

#[test]
fn empty_arguments_are_invalid() {
    let test_grid = TestGrid::new();

    let err = test_grid.bulk_put(vec![]).unwrap_err();

    assert!(err.is_invalid_argument());
}

#[test]
fn non_numeric_count_is_invalid_argument() {
    let test_grid = TestGrid::new();

    for count in [Value::from("3"), Value::Null, Value::Bool(true), Value::Array(vec![])] {
        let err = test_grid
            .bulk_put(vec![Value::from("x"), count])
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
    assert!(test_grid.region().is_empty());
}

#[test]
fn negative_count_writes_nothing() {
    let test_grid = TestGrid::new();

    let result = test_grid
        .bulk_put(vec![Value::from("x"), Value::Float(-5.0)])
        .unwrap();

    assert_eq!(result, Value::Bool(true));
    assert!(test_grid.region().is_empty());
}

// ============================================================================
// Store failures
// ============================================================================

#[test]
fn store_failure_aborts_at_failing_index() {
    init_tracing();
    let region = FailingRegion::failing_on("foo3");

    let err = bulk_put(&region, &BulkPutArgs::new("x", 10)).unwrap_err();

    assert!(matches!(err, StoreWriteError::Rejected { ref key, .. } if key == "foo3"));
    assert_eq!(region.keys(), vec!["foo0", "foo1", "foo2"]);
    assert_eq!(region.attempts(), expected_keys(4));
}

#[test]
fn store_failure_sends_no_result() {
    init_tracing();
    let region = FailingRegion::failing_on("foo3");
    let args = Arguments::new(vec![Value::from("x"), Value::Float(10.0)]);

    let result = BulkPut.execute(&FunctionContext::new(&args, &region));

    let err = result.unwrap_err();
    assert!(err.is_store_write());
    assert!(err.is_retryable());
}

#[test]
fn capacity_failure_keeps_earlier_writes() {
    init_tracing();
    let grid = Grid::builder()
        .region_with("small", RegionConfig::default().with_max_entries(4))
        .open()
        .unwrap();

    let err = grid
        .execute_function(
            BulkPut::ID,
            "small",
            Arguments::new(vec![Value::from("x"), Value::Float(10.0)]),
        )
        .unwrap_err();

    assert!(err.is_store_write());
    assert!(!err.is_retryable());
    assert_eq!(grid.region("small").unwrap().keys(), expected_keys(4));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn writes_exactly_count_keys_all_equal(count in 0u64..300, payload in ".*") {
        let region = MemoryRegion::new("prop");
        let args = Arguments::new(vec![Value::from(payload.clone()), Value::Float(count as f64)]);

        let result = BulkPut.execute(&FunctionContext::new(&args, &region)).unwrap();

        prop_assert_eq!(result, Value::Bool(true));
        prop_assert_eq!(region.keys(), sorted(expected_keys(count)));
        for key in region.keys() {
            prop_assert_eq!(region.get(&key), Some(Value::from(payload.clone())));
        }
    }

    #[test]
    fn fractional_counts_truncate_toward_zero(whole in 0u64..100, frac in 0.0f64..0.99) {
        let region = MemoryRegion::new("prop");
        let args = Arguments::new(vec![Value::Null, Value::Float(whole as f64 + frac)]);

        BulkPut.execute(&FunctionContext::new(&args, &region)).unwrap();

        prop_assert_eq!(region.len() as u64, whole);
    }
}
