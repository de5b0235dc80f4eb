//! Slash-delimited document paths.
//!
//! This crate parses paths such as `/_source/defaultIndex` into ordered
//! steps and resolves them against a `serde_json::Value` tree to read,
//! overwrite, create or remove the addressed value.
//!
//! A step is read as an object key when the current node is an object and
//! as an array index when the current node is an array. The shape of the
//! step itself never decides: `"0"` is a key inside `{"0": true}`.
//!
//! # Example
//!
//! ```
//! use docpatch_path::{parse_path, format_path, get, set, delete};
//! use serde_json::json;
//!
//! // Parse a path string into steps
//! let path = parse_path("/foo/bar").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format steps back to a path string
//! assert_eq!(format_path(&path), "/foo/bar");
//!
//! // Read, write and remove values
//! let mut doc = json!({"foo": {"bar": 42}});
//! assert_eq!(get(&doc, &path).unwrap(), &json!(42));
//! set(&mut doc, &path, json!(43)).unwrap();
//! assert_eq!(delete(&mut doc, &path).unwrap(), json!(43));
//! assert_eq!(doc, json!({"foo": {}}));
//! ```

use serde_json::Value;
use thiserror::Error;

// Re-export types
pub mod types;
pub use types::{Path, PathStep};

// Re-export validation
pub mod validate;
pub use validate::{validate_path, validate_path_str, MAX_PATH_DEPTH, MAX_PATH_STR_LENGTH};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("INVALID_PATH: {0:?}")]
    InvalidPath(String),
    #[error("NOT_FOUND")]
    NotFound,
}

/// Parse a path string into steps.
///
/// - A single leading `/` is stripped; a path without one is resolved from
///   the root all the same.
/// - The remainder is split on `/`; steps are taken verbatim (no escaping).
///
/// # Errors
///
/// [`PathError::InvalidPath`] if the string is empty or any step is empty
/// (`/a//b`, `/a/`, `/`).
///
/// # Example
///
/// ```
/// use docpatch_path::parse_path;
///
/// assert_eq!(parse_path("/foo/bar").unwrap(), vec!["foo", "bar"]);
/// assert_eq!(parse_path("foo/0").unwrap(), vec!["foo", "0"]);
/// assert!(parse_path("").is_err());
/// assert!(parse_path("/foo//bar").is_err());
/// ```
pub fn parse_path(path: &str) -> Result<Path, PathError> {
    validate_path_str(path)?;
    let body = path.strip_prefix('/').unwrap_or(path);
    let steps: Path = body.split('/').map(str::to_string).collect();
    if steps.iter().any(String::is_empty) {
        return Err(PathError::InvalidPath(path.to_string()));
    }
    validate_path(&steps)?;
    Ok(steps)
}

/// Format path steps into a path string.
///
/// Returns an empty string for the root path (no steps).
///
/// # Example
///
/// ```
/// use docpatch_path::format_path;
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&["foo".to_string()]), "/foo");
/// assert_eq!(format_path(&["foo".to_string(), "0".to_string()]), "/foo/0");
/// ```
pub fn format_path(path: &[String]) -> String {
    let mut out = String::with_capacity(path.iter().map(|s| s.len() + 1).sum());
    for step in path {
        out.push('/');
        out.push_str(step);
    }
    out
}

/// Check if a string represents a valid non-negative integer array index.
///
/// Only the canonical form is accepted: no sign, no leading zeros.
///
/// # Example
///
/// ```
/// use docpatch_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

fn parse_index(step: &str) -> Result<usize, PathError> {
    if !is_valid_index(step) {
        return Err(PathError::NotFound);
    }
    step.parse().map_err(|_| PathError::NotFound)
}

/// Get a value from a document by path.
///
/// # Errors
///
/// [`PathError::NotFound`] if a key is missing, an index is out of range or
/// not an index, or a step tries to descend into a scalar.
///
/// # Example
///
/// ```
/// use docpatch_path::{get, parse_path, PathError};
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": [10, 20]}});
/// assert_eq!(get(&doc, &parse_path("/foo/bar/1").unwrap()), Ok(&json!(20)));
/// assert_eq!(get(&doc, &parse_path("/foo/baz").unwrap()), Err(PathError::NotFound));
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Result<&'a Value, PathError> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Object(map) => map.get(step).ok_or(PathError::NotFound)?,
            Value::Array(arr) => arr.get(parse_index(step)?).ok_or(PathError::NotFound)?,
            _ => return Err(PathError::NotFound),
        };
    }
    Ok(current)
}

/// Get a mutable reference to a value in a document by path.
///
/// Resolution rules are those of [`get`].
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Result<&'a mut Value, PathError> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Object(map) => map.get_mut(step).ok_or(PathError::NotFound)?,
            Value::Array(arr) => {
                let idx = parse_index(step)?;
                arr.get_mut(idx).ok_or(PathError::NotFound)?
            }
            _ => return Err(PathError::NotFound),
        };
    }
    Ok(current)
}

/// Returns `true` if `path` resolves against `val`.
pub fn exists(val: &Value, path: &[String]) -> bool {
    get(val, path).is_ok()
}

/// Splits `path` into the container holding the target and the final step.
fn parent_mut<'a, 'p>(
    val: &'a mut Value,
    path: &'p [String],
) -> Result<(&'a mut Value, &'p str), PathError> {
    let (key, parent_path) = path
        .split_last()
        .ok_or_else(|| PathError::InvalidPath(String::new()))?;
    Ok((get_mut(val, parent_path)?, key.as_str()))
}

/// Assign `value` at `path`, returning whatever was there before.
///
/// The parent of the final step must already exist. On an object the key is
/// inserted or overwritten (an overwritten key keeps its position, a new key
/// goes last). On an array the index must be an existing position, or
/// exactly the array length to append.
///
/// # Errors
///
/// - [`PathError::InvalidPath`] for the root path (no steps)
/// - [`PathError::NotFound`] if the parent does not resolve, is a scalar, or
///   the index is neither in range nor the append position
///
/// # Example
///
/// ```
/// use docpatch_path::{parse_path, set};
/// use serde_json::json;
///
/// let mut doc = json!({"list": [1, 2]});
/// set(&mut doc, &parse_path("/list/2").unwrap(), json!(3)).unwrap();
/// let old = set(&mut doc, &parse_path("/list/0").unwrap(), json!(0)).unwrap();
/// assert_eq!(old, Some(json!(1)));
/// assert_eq!(doc, json!({"list": [0, 2, 3]}));
/// ```
pub fn set(val: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, PathError> {
    let (parent, key) = parent_mut(val, path)?;
    match parent {
        Value::Object(map) => Ok(map.insert(key.to_string(), value)),
        Value::Array(arr) => {
            let idx = parse_index(key)?;
            if idx < arr.len() {
                Ok(Some(std::mem::replace(&mut arr[idx], value)))
            } else if idx == arr.len() {
                arr.push(value);
                Ok(None)
            } else {
                Err(PathError::NotFound)
            }
        }
        _ => Err(PathError::NotFound),
    }
}

/// Create a value at `path`.
///
/// Traversal and effect are those of [`set`]: an existing value is
/// overwritten. Callers that need create-only semantics check [`exists`]
/// first.
pub fn create(val: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, PathError> {
    set(val, path, value)
}

/// Remove the value at `path` and return it.
///
/// Object keys are removed without disturbing the order of the remaining
/// keys; array elements after the index shift down by one.
///
/// # Errors
///
/// - [`PathError::InvalidPath`] for the root path (no steps)
/// - [`PathError::NotFound`] if the path does not resolve
///
/// # Example
///
/// ```
/// use docpatch_path::{delete, parse_path};
/// use serde_json::json;
///
/// let mut doc = json!({"a": 1, "b": [1, 2, 3], "c": 3});
/// delete(&mut doc, &parse_path("/b/0").unwrap()).unwrap();
/// delete(&mut doc, &parse_path("/a").unwrap()).unwrap();
/// assert_eq!(doc.to_string(), r#"{"b":[2,3],"c":3}"#);
/// ```
pub fn delete(val: &mut Value, path: &[String]) -> Result<Value, PathError> {
    let (parent, key) = parent_mut(val, path)?;
    match parent {
        Value::Object(map) => map.shift_remove(key).ok_or(PathError::NotFound),
        Value::Array(arr) => {
            let idx = parse_index(key)?;
            if idx >= arr.len() {
                return Err(PathError::NotFound);
            }
            Ok(arr.remove(idx))
        }
        _ => Err(PathError::NotFound),
    }
}
