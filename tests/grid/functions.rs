//! Function Dispatch Tests
//!
//! Invocation by id, JSON arguments, custom functions and grid shutdown.

use crate::common::*;
use std::sync::Arc;

/// Counts the keys of its region
struct CountKeys;

impl Function for CountKeys {
    fn id(&self) -> &str {
        "count_keys"
    }

    fn execute(&self, ctx: &FunctionContext<'_>) -> regionfn_core::Result<Value> {
        Ok(Value::Int(ctx.data_region().len() as i64))
    }
}

#[test]
fn bulk_put_id_is_stable() {
    assert_eq!(BulkPut::ID, "regionfn_function::bulk_put::BulkPut");
    assert_eq!(BulkPut.id(), BulkPut::ID);
}

#[test]
fn execute_with_json_arguments() {
    let test_grid = TestGrid::new();

    let result = test_grid
        .grid
        .execute_function_json(BulkPut::ID, DEFAULT_REGION, r#"[{"foo": "bar"}, 3]"#)
        .unwrap();

    assert_eq!(result, json!(true));
    assert_eq!(
        test_grid.grid.get(DEFAULT_REGION, "foo2").unwrap(),
        Some(Value::from(json!({"foo": "bar"})))
    );
}

#[test]
fn json_arguments_must_be_an_array() {
    let test_grid = TestGrid::new();

    let err = test_grid
        .grid
        .execute_function_json(BulkPut::ID, DEFAULT_REGION, r#"{"count": 3}"#)
        .unwrap_err();

    assert!(err.is_invalid_argument());
}

#[test]
fn malformed_json_is_serialization_error() {
    let test_grid = TestGrid::new();

    let err = test_grid
        .grid
        .execute_function_json(BulkPut::ID, DEFAULT_REGION, "[1,")
        .unwrap_err();

    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn unknown_function_is_not_found() {
    let test_grid = TestGrid::new();

    let err = test_grid
        .grid
        .execute_function("nope", DEFAULT_REGION, Arguments::default())
        .unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn unknown_region_is_not_found() {
    let test_grid = TestGrid::new();

    let err = test_grid
        .grid
        .execute_function(
            BulkPut::ID,
            "missing",
            Arguments::new(vec![Value::Null, Value::Float(1.0)]),
        )
        .unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn custom_function_via_builder() {
    init_tracing();
    let grid = Grid::builder()
        .region(DEFAULT_REGION)
        .with_function(Arc::new(CountKeys))
        .open()
        .unwrap();

    grid.execute_function(
        BulkPut::ID,
        DEFAULT_REGION,
        Arguments::new(vec![Value::Null, Value::Float(7.0)]),
    )
    .unwrap();

    let count = grid
        .execute_function("count_keys", DEFAULT_REGION, Arguments::default())
        .unwrap();
    assert_eq!(count, Value::Int(7));
}

#[test]
fn register_function_after_open() {
    let test_grid = TestGrid::new();
    test_grid.grid.register_function(Arc::new(CountKeys)).unwrap();

    let err = test_grid
        .grid
        .register_function(Arc::new(CountKeys))
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));
}

#[test]
fn closed_grid_rejects_executions_and_writes() {
    let test_grid = TestGrid::new();
    test_grid.grid.put(DEFAULT_REGION, "kept", "v").unwrap();
    test_grid.grid.close();

    let err = test_grid
        .bulk_put(vec![Value::from("x"), Value::Float(1.0)])
        .unwrap_err();
    assert!(matches!(err, Error::Closed));

    let err = test_grid.grid.put(DEFAULT_REGION, "k", "v").unwrap_err();
    assert!(err.is_store_write());

    assert_eq!(
        test_grid.grid.get(DEFAULT_REGION, "kept").unwrap(),
        Some(Value::from("v"))
    );
}

#[test]
fn closed_grid_rejects_clear() {
    let test_grid = TestGrid::new();
    test_grid
        .bulk_put(vec![Value::from("x"), Value::Float(3.0)])
        .unwrap();
    test_grid.grid.close();

    let err = test_grid.grid.clear(DEFAULT_REGION).unwrap_err();

    assert!(matches!(
        err,
        Error::StoreWrite(StoreWriteError::RegionClosed { .. })
    ));
    assert_eq!(test_grid.region().len(), 3);
}

#[test]
fn concurrent_invocations_converge() {
    let test_grid = Arc::new(TestGrid::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let test_grid = Arc::clone(&test_grid);
            std::thread::spawn(move || {
                test_grid
                    .bulk_put(vec![Value::from("same"), Value::Float(100.0)])
                    .unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Value::Bool(true));
    }

    let region = test_grid.region();
    assert_eq!(region.len(), 100);
    assert_eq!(region.get("foo99"), Some(Value::from("same")));
}
