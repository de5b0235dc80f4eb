use serde_json::{Number, Value};

/// Performs a deep equality check between two JSON values.
///
/// This function compares values recursively, checking equality for:
/// - Primitives (null, bool, number, string)
/// - Arrays (element-by-element comparison)
/// - Objects (key-by-key comparison, insertion order is ignored)
///
/// Values of different JSON types never compare equal, so the string `"3"`
/// is not equal to the number `3`. Numbers compare by numeric value, which
/// makes `3` and `3.0` equal.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use docpatch_util::json_equal::deep_equal;
///
/// let a = json!({"foo": [1, 2, 3]});
/// let b = json!({"foo": [1, 2, 3]});
/// let c = json!({"foo": [1, 2, "3"]});
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        // Arrays
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a
                .iter()
                .zip(arr_b.iter())
                .all(|(val_a, val_b)| deep_equal(val_a, val_b))
        }

        // Objects
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different types are never equal
        _ => false,
    }
}

/// Compares two JSON numbers by value.
///
/// Integers are compared exactly; as soon as either side is a float both
/// sides are compared as `f64`.
pub fn number_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        return a.as_f64() == b.as_f64();
    }
    match (a.as_i64(), b.as_i64()) {
        (Some(a), Some(b)) => a == b,
        (None, None) => a.as_u64() == b.as_u64(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_primitives() {
        assert!(deep_equal(&json!(null), &json!(null)));
        assert!(deep_equal(&json!(true), &json!(true)));
        assert!(deep_equal(&json!("a"), &json!("a")));
        assert!(deep_equal(&json!(42), &json!(42)));
    }

    #[test]
    fn test_not_equal_primitives() {
        assert!(!deep_equal(&json!(true), &json!(false)));
        assert!(!deep_equal(&json!("a"), &json!("b")));
        assert!(!deep_equal(&json!(1), &json!(2)));
        assert!(!deep_equal(&json!(null), &json!(false)));
    }

    #[test]
    fn test_string_and_number_not_equal() {
        assert!(!deep_equal(&json!("3"), &json!(3)));
        assert!(!deep_equal(&json!(3), &json!("3")));
    }

    #[test]
    fn test_integer_and_float_equal_by_value() {
        assert!(deep_equal(&json!(3), &json!(3.0)));
        assert!(deep_equal(&json!(-7), &json!(-7.0)));
        assert!(!deep_equal(&json!(3), &json!(3.5)));
    }

    #[test]
    fn test_large_unsigned_and_negative() {
        assert!(deep_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!deep_equal(&json!(u64::MAX), &json!(-1)));
    }

    #[test]
    fn test_bool_and_number_not_equal() {
        assert!(!deep_equal(&json!(true), &json!(1)));
        assert!(!deep_equal(&json!(false), &json!(0)));
    }

    #[test]
    fn test_not_equal_arrays_different_length() {
        assert!(!deep_equal(&json!([1, 2, 3]), &json!([1, 2])));
    }

    #[test]
    fn test_arrays_are_positional() {
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
    }

    #[test]
    fn test_not_equal_arrays_of_objects() {
        assert!(!deep_equal(
            &json!([{"a": "a"}, {"b": "b"}]),
            &json!([{"a": "a"}, {"b": "c"}])
        ));
    }

    #[test]
    fn test_objects_ignore_key_order() {
        let a = json!({
            "_source": {"defaultIndex": "filebeat-*", "title": "x"},
            "version": "2"
        });
        let b = json!({
            "version": "2",
            "_source": {"title": "x", "defaultIndex": "filebeat-*"}
        });
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn test_objects_with_different_keys() {
        assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }
}
