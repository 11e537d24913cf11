use serde_json::{json, Value};

use crate::error::InvalidInputError;
use crate::handler::handle;
use crate::test_utils::test_logging;

#[test]
fn test_hello_returns_world() {
    test_logging::init_test_logging();
    assert_eq!(handle(&json!({ "input": "Hello" })), Ok("World"));
}

#[test]
fn test_hi_returns_world() {
    assert_eq!(handle(&json!({ "input": "Hi" })), Ok("World"));
}

#[test]
fn test_missing_input_fails() {
    let err = handle(&json!({})).unwrap_err();
    assert_eq!(err, InvalidInputError::MissingField);
    assert_eq!(err.to_string(), "Missing 'input' in event");
}

#[test]
fn test_unrecognized_values_fail() {
    let cases: Vec<Value> = vec![
        json!("Bonjour"),
        json!(123),
        json!(""),
        json!(null),
        json!(0),
        json!("hello"),
    ];

    for input in cases {
        let err = handle(&json!({ "input": input })).unwrap_err();
        assert_eq!(err, InvalidInputError::InvalidValue, "input {}", input);
        assert_eq!(err.to_string(), "Invalid input");
    }
}

#[test]
fn test_extra_fields_are_ignored() {
    let event = json!({ "input": "Hi", "user": { "id": 42 }, "tags": ["a", "b"] });
    assert_eq!(handle(&event), Ok("World"));
}

#[test]
fn test_handle_is_repeatable_and_does_not_mutate() {
    let event = json!({ "input": "Hello", "other": 1 });
    let before = event.clone();

    let first = handle(&event);
    let second = handle(&event);

    assert_eq!(first, second);
    assert_eq!(event, before);

    let bad = json!({ "input": "Bonjour" });
    assert_eq!(handle(&bad), handle(&bad));
}
