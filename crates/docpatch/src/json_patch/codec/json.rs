//! JSON codec for patch operation records.
//!
//! A record is an object keyed by operation kind:
//!
//! ```json
//! {"replace": {"path": "/_source/defaultIndex", "value": "artifactory-*"}}
//! ```
//!
//! A record may name several kinds at once; they expand in the order
//! `replace`, `delete`, `insert`, `insertOrReplace`. A kind whose payload is
//! falsy (`null`, `{}`, `""`, ...) is skipped, and unknown keys are ignored.

use docpatch_util::{is_falsy, is_truthy};
use serde_json::{json, Map, Value};

use crate::json_patch::types::{Op, OpKind, PatchError};

// ── Decoding ──────────────────────────────────────────────────────────────

fn decode_payload(kind: OpKind, payload: &Value) -> Result<Op, PatchError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp(format!("{kind}: payload must be an object")))?;
    let path = obj
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp(format!("{kind}: path must be a string")))?
        .to_string();
    if !kind.takes_value() {
        return Ok(Op::Delete { path });
    }
    let value = obj
        .get("value")
        .cloned()
        .ok_or_else(|| PatchError::InvalidOp(format!("{kind}: missing value")))?;
    Ok(match kind {
        OpKind::Replace => Op::Replace { path, value },
        OpKind::Insert => Op::Insert { path, value },
        OpKind::InsertOrReplace => Op::InsertOrReplace { path, value },
        OpKind::Delete => Op::Delete { path },
    })
}

/// Decode one operation record into the operations it names, in expansion
/// order.
///
/// A falsy record decodes to no operations.
pub fn from_json_record(record: &Value) -> Result<Vec<Op>, PatchError> {
    if is_falsy(record) {
        return Ok(Vec::new());
    }
    let map = record
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation record must be an object".into()))?;
    decode_record_map(map)
}

fn decode_record_map(map: &Map<String, Value>) -> Result<Vec<Op>, PatchError> {
    let mut ops = Vec::new();
    for kind in OpKind::ALL {
        if let Some(payload) = map.get(kind.as_str()).filter(|p| is_truthy(p)) {
            ops.push(decode_payload(kind, payload)?);
        }
    }
    Ok(ops)
}

/// Decode a list of operation records.
///
/// # Errors
///
/// - [`PatchError::InvalidOperationList`] if `ops` is not an array, is
///   empty, is `[""]`, or names no operation at all
/// - [`PatchError::InvalidOp`] if a record or payload is malformed
///
/// # Example
///
/// ```
/// use docpatch::json_patch::{from_json_ops, Op};
/// use serde_json::json;
///
/// let ops = from_json_ops(&json!([
///     {"delete": {"path": "/found"}},
///     {"insertOrReplace": {"path": "/author", "value": "TEST"}},
/// ]))
/// .unwrap();
/// assert_eq!(ops, vec![Op::delete("/found"), Op::insert_or_replace("/author", json!("TEST"))]);
/// ```
pub fn from_json_ops(ops: &Value) -> Result<Vec<Op>, PatchError> {
    let records = ops
        .as_array()
        .ok_or_else(|| PatchError::InvalidOperationList("operations must be a list".into()))?;
    if records.is_empty() || (records.len() == 1 && records[0] == "") {
        return Err(PatchError::InvalidOperationList(
            "one operation is required at least".into(),
        ));
    }
    let mut out = Vec::new();
    for record in records {
        out.extend(from_json_record(record)?);
    }
    if out.is_empty() {
        return Err(PatchError::InvalidOperationList(
            "no recognized operation in list".into(),
        ));
    }
    Ok(out)
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to its single-kind record form.
pub fn to_json(op: &Op) -> Value {
    let payload = match op.value() {
        Some(value) => json!({"path": op.path(), "value": value}),
        None => json!({"path": op.path()}),
    };
    let mut record = Map::new();
    record.insert(op.op_name().to_string(), payload);
    Value::Object(record)
}

/// Serialize operations to a list of records.
pub fn to_json_ops(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────
