//! Helpers for raw input values.

use serde_json::Value;

/// Coerces a raw input value into an ordered sequence of values.
///
/// Arrays pass through unchanged; any other value (including `null`) becomes a
/// single-element sequence. This lets single- and multi-valued input share one
/// intake path.
///
/// # Example
///
/// ```rust
/// use fieldset::value::into_sequence;
/// use serde_json::json;
///
/// assert_eq!(into_sequence(json!("a")), vec![json!("a")]);
/// assert_eq!(into_sequence(json!([1, 2])), vec![json!(1), json!(2)]);
/// ```
pub fn into_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Returns the JSON type name for a value.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns true for `null` and for strings that are empty after trimming.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_becomes_single_element() {
        assert_eq!(into_sequence(json!(42)), vec![json!(42)]);
        assert_eq!(into_sequence(Value::Null), vec![Value::Null]);
        assert_eq!(into_sequence(json!({"k": 1})), vec![json!({"k": 1})]);
    }

    #[test]
    fn test_array_passes_through() {
        assert_eq!(
            into_sequence(json!(["a", "b", "c"])),
            vec![json!("a"), json!("b"), json!("c")]
        );
        assert!(into_sequence(json!([])).is_empty());
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(true)), "boolean");
        assert_eq!(value_type_name(&json!(1.5)), "number");
        assert_eq!(value_type_name(&json!("s")), "string");
        assert_eq!(value_type_name(&json!([])), "array");
        assert_eq!(value_type_name(&json!({})), "object");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("   ")));
        assert!(!is_blank(&json!("x")));
        assert!(!is_blank(&json!(0)));
    }
}
