//! Core types for the patch module.

use std::fmt;

use docpatch_path::PathError;
use serde_json::Value;
use thiserror::Error;

pub use docpatch_path::Path;

// ── Op kind ───────────────────────────────────────────────────────────────

/// The four operation kinds, in the order a multi-kind record expands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Replace,
    Delete,
    Insert,
    InsertOrReplace,
}

impl OpKind {
    /// All kinds in record expansion order.
    pub const ALL: [OpKind; 4] = [
        OpKind::Replace,
        OpKind::Delete,
        OpKind::Insert,
        OpKind::InsertOrReplace,
    ];

    /// The record key naming this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Replace => "replace",
            OpKind::Delete => "delete",
            OpKind::Insert => "insert",
            OpKind::InsertOrReplace => "insertOrReplace",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        OpKind::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Whether records of this kind carry a `value`.
    pub fn takes_value(&self) -> bool {
        !matches!(self, OpKind::Delete)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error("INVALID_PATH: {op} {path:?}")]
    InvalidPath { op: OpKind, path: String },
    #[error("NOT_FOUND: {op} {path}")]
    PathNotFound { op: OpKind, path: String },
    #[error("PATH_EXISTS: {op} {path}")]
    PathExists { op: OpKind, path: String },
    #[error("INVALID_OPERATION_LIST: {0}")]
    InvalidOperationList(String),
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

impl PatchError {
    /// Attach the failing operation to a resolver error.
    pub fn at(op: &Op, err: PathError) -> Self {
        let path = op.path().to_string();
        match err {
            PathError::InvalidPath(_) => PatchError::InvalidPath { op: op.kind(), path },
            PathError::NotFound => PatchError::PathNotFound { op: op.kind(), path },
        }
    }

    /// The kind of the failing operation, when the error names one.
    pub fn op(&self) -> Option<OpKind> {
        match self {
            PatchError::InvalidPath { op, .. }
            | PatchError::PathNotFound { op, .. }
            | PatchError::PathExists { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// The path string of the failing operation, when the error names one.
    pub fn path(&self) -> Option<&str> {
        match self {
            PatchError::InvalidPath { path, .. }
            | PatchError::PathNotFound { path, .. }
            | PatchError::PathExists { path, .. } => Some(path),
            _ => None,
        }
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A patch operation.
///
/// The path is kept as written and parsed each time the operation is
/// applied, so a malformed path surfaces as [`PatchError::InvalidPath`]
/// naming the operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Replace { path: String, value: Value },
    Delete { path: String },
    Insert { path: String, value: Value },
    InsertOrReplace { path: String, value: Value },
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Replace { .. } => OpKind::Replace,
            Op::Delete { .. } => OpKind::Delete,
            Op::Insert { .. } => OpKind::Insert,
            Op::InsertOrReplace { .. } => OpKind::InsertOrReplace,
        }
    }

    /// Returns the operation name string.
    pub fn op_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Returns the path of the operation as written.
    pub fn path(&self) -> &str {
        match self {
            Op::Replace { path, .. }
            | Op::Delete { path }
            | Op::Insert { path, .. }
            | Op::InsertOrReplace { path, .. } => path,
        }
    }

    /// Returns the value carried by the operation, if its kind takes one.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Op::Replace { value, .. }
            | Op::Insert { value, .. }
            | Op::InsertOrReplace { value, .. } => Some(value),
            Op::Delete { .. } => None,
        }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Op::Replace { path: path.into(), value }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Op::Delete { path: path.into() }
    }

    pub fn insert(path: impl Into<String>, value: Value) -> Self {
        Op::Insert { path: path.into(), value }
    }

    pub fn insert_or_replace(path: impl Into<String>, value: Value) -> Self {
        Op::InsertOrReplace { path: path.into(), value }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OpResult {
    pub op: OpKind,
    pub path: String,
    /// Whether this operation mutated the document.
    pub changed: bool,
    /// The value displaced or removed by the operation, if any.
    pub old: Option<Value>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone)]
pub struct PatchResult {
    pub doc: Value,
    /// True if any operation mutated the document.
    pub changed: bool,
    pub res: Vec<OpResult>,
}

/// Options for `apply_patch` and `apply_with`.
#[derive(Debug, Clone, Default)]
pub struct ApplyPatchOptions {
    /// If true, `insert` fails with [`PatchError::PathExists`] when its
    /// target already resolves instead of overwriting it.
    pub strict_insert: bool,
    /// If true, operations run against a clone and the document is only
    /// replaced once every operation succeeded.
    pub atomic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_names_roundtrip() {
        for kind in OpKind::ALL {
            assert_eq!(OpKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(OpKind::from_str("add"), None);
        assert_eq!(OpKind::from_str("insertorreplace"), None);
    }

    #[test]
    fn error_carries_kind_and_path() {
        let op = Op::replace("/version", json!("3"));
        let err = PatchError::at(&op, PathError::NotFound);
        assert_eq!(err.op(), Some(OpKind::Replace));
        assert_eq!(err.path(), Some("/version"));
        assert_eq!(err.to_string(), "NOT_FOUND: replace /version");
    }

    #[test]
    fn delete_has_no_value() {
        assert_eq!(Op::delete("/found").value(), None);
        assert_eq!(Op::insert("/a", json!(1)).value(), Some(&json!(1)));
        assert!(!OpKind::Delete.takes_value());
    }
}
