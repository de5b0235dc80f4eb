//! Validation functions for path strings.

use crate::PathError;

/// Maximum allowed path string length.
pub const MAX_PATH_STR_LENGTH: usize = 1024;

/// Maximum allowed path depth.
pub const MAX_PATH_DEPTH: usize = 256;

/// Validate a path string before splitting it.
///
/// # Errors
///
/// Returns [`PathError::InvalidPath`] if:
/// - The string is empty or is a lone `/`
/// - The string exceeds the maximum length (1024 characters)
///
/// # Example
///
/// ```
/// use docpatch_path::validate_path_str;
///
/// validate_path_str("/_source/defaultIndex").unwrap();
/// validate_path_str("version").unwrap();
/// validate_path_str("").unwrap_err();
/// validate_path_str("/").unwrap_err();
/// ```
pub fn validate_path_str(path: &str) -> Result<(), PathError> {
    if path.is_empty() || path == "/" {
        return Err(PathError::InvalidPath(path.to_string()));
    }
    if path.chars().count() > MAX_PATH_STR_LENGTH {
        return Err(PathError::InvalidPath(format!(
            "path longer than {MAX_PATH_STR_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a parsed path.
///
/// # Errors
///
/// Returns [`PathError::InvalidPath`] if the path has no steps, has more
/// than 256 steps, or contains an empty step.
///
/// # Example
///
/// ```
/// use docpatch_path::validate_path;
///
/// validate_path(&["foo".to_string(), "bar".to_string()]).unwrap();
/// validate_path(&["foo".to_string(), String::new()]).unwrap_err();
/// validate_path(&(0..300).map(|i| i.to_string()).collect::<Vec<_>>()).unwrap_err();
/// ```
pub fn validate_path(path: &[String]) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::InvalidPath(String::new()));
    }
    if path.len() > MAX_PATH_DEPTH {
        return Err(PathError::InvalidPath(format!(
            "path deeper than {MAX_PATH_DEPTH} steps"
        )));
    }
    if path.iter().any(|step| step.is_empty()) {
        return Err(PathError::InvalidPath(crate::format_path(path)));
    }
    Ok(())
}
