//! Lenient helpers for reading options out of a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. A missing key or
//! a value of the wrong type yields the default; these never fail.

use serde_json::Value;

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only non-negative integers are accepted.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_usize_extracts_step_count() {
        assert_eq!(param_usize(&json!({"steps": 12}), "steps", 10), 12);
    }

    #[test]
    fn param_usize_returns_default_when_key_missing() {
        assert_eq!(param_usize(&json!({}), "steps", 10), 10);
    }

    #[test]
    fn param_usize_rejects_floats_and_negatives() {
        assert_eq!(param_usize(&json!({"steps": 2.5}), "steps", 10), 10);
        assert_eq!(param_usize(&json!({"steps": -1}), "steps", 10), 10);
    }

    #[test]
    fn param_usize_returns_default_for_non_object() {
        assert_eq!(param_usize(&json!("steps"), "steps", 3), 3);
    }

    #[test]
    fn param_bool_extracts_flag() {
        assert!(param_bool(&json!({"seamless": true}), "seamless", false));
        assert!(!param_bool(&json!({"seamless": false}), "seamless", true));
    }

    #[test]
    fn param_bool_returns_default_for_wrong_type() {
        assert!(!param_bool(&json!({"seamless": 1}), "seamless", false));
    }

    #[test]
    fn param_string_extracts_mode_name() {
        assert_eq!(
            param_string(&json!({"mode": "seamless"}), "mode", "separated"),
            "seamless"
        );
    }

    #[test]
    fn param_string_returns_default_for_wrong_type() {
        assert_eq!(
            param_string(&json!({"mode": 42}), "mode", "separated"),
            "separated"
        );
    }

    #[test]
    fn param_string_keeps_empty_string_value() {
        assert_eq!(param_string(&json!({"first": ""}), "first", "x"), "");
    }
}
