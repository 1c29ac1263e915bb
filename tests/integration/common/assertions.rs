//! JSON assertions shared by the API tests

use pretty_assertions::assert_eq;
use serde_json::Value;

/// Assert the `{"message": ...}` error body
pub fn assert_message(body: &Value, expected: &str) {
    assert_eq!(body["message"].as_str(), Some(expected), "body: {body}");
}

/// Assert that no key anywhere in `body` looks like a password field
pub fn assert_no_password(body: &Value) {
    match body {
        Value::Object(map) => {
            for (key, value) in map {
                assert!(
                    !key.to_lowercase().contains("password"),
                    "response leaks `{key}`: {body}"
                );
                assert_no_password(value);
            }
        }
        Value::Array(items) => items.iter().for_each(assert_no_password),
        _ => {}
    }
}
