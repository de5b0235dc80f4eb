//! Patch apply logic.
//!
//! Each operation parses its path, resolves it against the live document
//! and reports whether it mutated anything. The verdict of a whole patch is
//! the OR of the per-operation verdicts.

use docpatch_path::{self as path, Path, PathError};
use docpatch_util::deep_equal;
use serde_json::Value;

use super::types::{ApplyPatchOptions, Op, OpResult, PatchError, PatchResult};

fn parse(op: &Op) -> Result<Path, PatchError> {
    path::parse_path(op.path()).map_err(|err| PatchError::at(op, err))
}

fn result(op: &Op, changed: bool, old: Option<Value>) -> OpResult {
    OpResult {
        op: op.kind(),
        path: op.path().to_string(),
        changed,
        old,
    }
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_replace(doc: &mut Value, op: &Op, value: &Value) -> Result<OpResult, PatchError> {
    let steps = parse(op)?;
    let current = path::get(doc, &steps).map_err(|err| PatchError::at(op, err))?;
    if deep_equal(current, value) {
        return Ok(result(op, false, None));
    }
    let old = path::set(doc, &steps, value.clone()).map_err(|err| PatchError::at(op, err))?;
    Ok(result(op, true, old))
}

fn apply_delete(doc: &mut Value, op: &Op) -> Result<OpResult, PatchError> {
    let steps = parse(op)?;
    let old = path::delete(doc, &steps).map_err(|err| PatchError::at(op, err))?;
    Ok(result(op, true, Some(old)))
}

fn apply_insert(
    doc: &mut Value,
    op: &Op,
    value: &Value,
    strict: bool,
) -> Result<OpResult, PatchError> {
    let steps = parse(op)?;
    if strict && path::exists(doc, &steps) {
        return Err(PatchError::PathExists {
            op: op.kind(),
            path: op.path().to_string(),
        });
    }
    let old = path::create(doc, &steps, value.clone()).map_err(|err| PatchError::at(op, err))?;
    Ok(result(op, true, old))
}

fn apply_insert_or_replace(
    doc: &mut Value,
    op: &Op,
    value: &Value,
) -> Result<OpResult, PatchError> {
    let steps = parse(op)?;
    match path::get(doc, &steps) {
        Err(PathError::NotFound) => {
            let old =
                path::create(doc, &steps, value.clone()).map_err(|err| PatchError::at(op, err))?;
            Ok(result(op, true, old))
        }
        Err(err) => Err(PatchError::at(op, err)),
        Ok(current) if deep_equal(current, value) => Ok(result(op, false, None)),
        Ok(_) => {
            let old =
                path::set(doc, &steps, value.clone()).map_err(|err| PatchError::at(op, err))?;
            Ok(result(op, true, old))
        }
    }
}

// ── Main apply function ───────────────────────────────────────────────────

/// Apply a single operation to the document (in-place mutation).
pub fn apply_op(
    doc: &mut Value,
    op: &Op,
    options: &ApplyPatchOptions,
) -> Result<OpResult, PatchError> {
    match op {
        Op::Replace { value, .. } => apply_replace(doc, op, value),
        Op::Delete { .. } => apply_delete(doc, op),
        Op::Insert { value, .. } => apply_insert(doc, op, value, options.strict_insert),
        Op::InsertOrReplace { value, .. } => apply_insert_or_replace(doc, op, value),
    }
}

/// Apply operations in order, mutating `doc` in place.
///
/// Returns the per-operation results. The first failure aborts the rest of
/// the list; operations already applied stay applied unless
/// `options.atomic` is set.
///
/// # Errors
///
/// [`PatchError::InvalidOperationList`] for an empty list (before any
/// mutation), otherwise the error of the failing operation.
pub fn apply_ops(
    doc: &mut Value,
    ops: &[Op],
    options: &ApplyPatchOptions,
) -> Result<Vec<OpResult>, PatchError> {
    if ops.is_empty() {
        return Err(PatchError::InvalidOperationList(
            "one operation is required at least".into(),
        ));
    }
    if options.atomic {
        let mut working = doc.clone();
        let results = run(&mut working, ops, options)?;
        *doc = working;
        return Ok(results);
    }
    run(doc, ops, options)
}

fn run(doc: &mut Value, ops: &[Op], options: &ApplyPatchOptions) -> Result<Vec<OpResult>, PatchError> {
    let mut results = Vec::with_capacity(ops.len());
    for op in ops {
        results.push(apply_op(doc, op, options)?);
    }
    Ok(results)
}

/// Apply operations in order with default options and return the change
/// verdict.
///
/// # Example
///
/// ```
/// use docpatch::json_patch::{apply, Op};
/// use serde_json::json;
///
/// let mut doc = json!({"version": "2"});
/// let ops = [Op::insert_or_replace("/version", json!("3"))];
/// assert!(apply(&mut doc, &ops).unwrap());
/// assert!(!apply(&mut doc, &ops).unwrap());
/// assert_eq!(doc, json!({"version": "3"}));
/// ```
pub fn apply(doc: &mut Value, ops: &[Op]) -> Result<bool, PatchError> {
    apply_with(doc, ops, &ApplyPatchOptions::default())
}

/// Apply operations in order with the given options and return the change
/// verdict.
pub fn apply_with(doc: &mut Value, ops: &[Op], options: &ApplyPatchOptions) -> Result<bool, PatchError> {
    let results = apply_ops(doc, ops, options)?;
    Ok(results.iter().any(|r| r.changed))
}

/// Apply operations to an owned document, returning it together with the
/// verdict and per-operation results.
pub fn apply_patch(
    mut doc: Value,
    ops: &[Op],
    options: &ApplyPatchOptions,
) -> Result<PatchResult, PatchError> {
    let res = apply_ops(&mut doc, ops, options)?;
    let changed = res.iter().any(|r| r.changed);
    Ok(PatchResult { doc, changed, res })
}

// ── Tests ─────────────────────────────────────────────────────────────────
