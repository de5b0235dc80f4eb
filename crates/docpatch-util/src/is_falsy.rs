use serde_json::Value;

/// Check if a value counts as "absent" when it appears as an operation
/// payload.
///
/// `null`, `false`, zero, the empty string, the empty array and the empty
/// object are falsy. Everything else is truthy.
///
/// # Examples
///
/// ```
/// use docpatch_util::is_falsy::is_falsy;
/// use serde_json::json;
///
/// assert!(is_falsy(&json!({})));
/// assert!(is_falsy(&json!(null)));
/// assert!(!is_falsy(&json!({"path": "/a"})));
/// ```
pub fn is_falsy(val: &Value) -> bool {
    match val {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Negation of [`is_falsy`].
pub fn is_truthy(val: &Value) -> bool {
    !is_falsy(val)
}
