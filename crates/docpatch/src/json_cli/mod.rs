//! `json-cli`: host-side helpers for the `docpatch` binary.
//!
//! Provides the core logic used by the binary entry points:
//! - document decoding (BOM-tolerant) and indented encoding
//! - the document filter: patch a decoded or textual document
//! - path lookup against a textual document
//! - operation list files (JSON or TOML)
//! - file jobs, see [`job`]

pub mod job;

use std::fs;
use std::path::{Path, PathBuf};

use docpatch_path::{get, parse_path, PathError};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use thiserror::Error;

use crate::json_patch::{apply_ops, from_json_ops, ApplyPatchOptions, OpResult, PatchError};

pub use job::{run_job, JobOutcome, PatchJob};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Patch(#[from] PatchError),
    #[error("{source}: {path}")]
    Lookup { path: String, source: PathError },
    #[error("input must be a list or an object, got {0}")]
    DocumentNotContainer(&'static str),
}

impl CliError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// ── Documents ─────────────────────────────────────────────────────────────

/// Decode document text, tolerating a leading UTF-8 byte order mark.
pub fn decode_document(text: &str) -> Result<Value, CliError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(serde_json::from_str(text)?)
}

/// Encode a document with `indent` spaces per level, keeping key order.
pub fn encode_document(doc: &Value, indent: usize) -> Result<String, CliError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    doc.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn type_name(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn log_results(results: &[OpResult]) {
    for r in results {
        tracing::debug!(op = %r.op, path = %r.path, changed = r.changed, "applied operation");
    }
}

// ── Filter ────────────────────────────────────────────────────────────────

/// Patch a document with a list of operation records.
///
/// `content` may be the decoded document or its JSON text; either way the
/// root must be an object or an array.
///
/// # Example
///
/// ```
/// use docpatch::json_cli::patch_document;
/// use serde_json::json;
///
/// let doc = patch_document(
///     json!(r#"{"found": true, "version": "2"}"#),
///     &json!([{"delete": {"path": "/found"}}, {"replace": {"path": "/version", "value": "3"}}]),
///     &Default::default(),
/// )
/// .unwrap();
/// assert_eq!(doc, json!({"version": "3"}));
/// ```
pub fn patch_document(
    content: Value,
    ops: &Value,
    options: &ApplyPatchOptions,
) -> Result<Value, CliError> {
    let mut doc = match content {
        Value::String(text) => decode_document(&text)?,
        other => other,
    };
    if !(doc.is_object() || doc.is_array()) {
        return Err(CliError::DocumentNotContainer(type_name(&doc)));
    }
    let ops = from_json_ops(ops)?;
    let results = apply_ops(&mut doc, &ops, options)?;
    log_results(&results);
    Ok(doc)
}

/// Patch document text with operation-record text and return the encoded
/// result, compact when `indent` is `None`.
pub fn patch_json_str(
    doc: &str,
    ops: &str,
    indent: Option<usize>,
    options: &ApplyPatchOptions,
) -> Result<String, CliError> {
    let content = decode_document(doc)?;
    let ops = decode_document(ops)?;
    let patched = patch_document(content, &ops, options)?;
    match indent {
        Some(indent) => encode_document(&patched, indent),
        None => Ok(serde_json::to_string(&patched)?),
    }
}

/// Look up `path` in document text and return the value as JSON text.
pub fn lookup_path(doc: &str, path: &str) -> Result<String, CliError> {
    let doc = decode_document(doc)?;
    let at = |source| CliError::Lookup {
        path: path.to_string(),
        source,
    };
    let steps = parse_path(path).map_err(at)?;
    let val = get(&doc, &steps).map_err(at)?;
    Ok(serde_json::to_string(val)?)
}

// ── Operation files ───────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct OpsFile {
    #[serde(default)]
    ops: Vec<Value>,
}

/// Read a list of operation records.
///
/// Files ending in `.toml` hold an `[[ops]]` array of tables; anything else
/// is read as a JSON array.
pub fn load_ops_file(path: &Path) -> Result<Value, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    if path.extension().is_some_and(|ext| ext == "toml") {
        let file: OpsFile = toml::from_str(&text)?;
        return Ok(Value::Array(file.ops));
    }
    decode_document(&text)
}

// ── Tests ─────────────────────────────────────────────────────────────────
