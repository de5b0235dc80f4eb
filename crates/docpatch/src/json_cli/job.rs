//! File jobs: read a JSON file, patch it, and write the result only when
//! something changed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{decode_document, encode_document, log_results, CliError};
use crate::json_patch::{apply_ops, from_json_ops, ApplyPatchOptions, OpKind};

fn default_indent() -> usize {
    2
}

/// A patch job, as loaded from a TOML file or assembled from CLI flags.
///
/// ```toml
/// path = "config.json"
/// target = "out/config.json"
/// indent = 4
///
/// [replace]
/// path = "/_source/defaultIndex"
/// value = "artifactory-*"
///
/// [[ops]]
/// [ops.insertOrReplace]
/// path = "/author"
/// value = "TEST"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PatchJob {
    /// Source document.
    pub path: PathBuf,
    /// Output file; the source is rewritten when absent.
    #[serde(default)]
    pub target: Option<PathBuf>,
    #[serde(default)]
    pub replace: Option<Value>,
    #[serde(default)]
    pub delete: Option<Value>,
    #[serde(default)]
    pub insert: Option<Value>,
    #[serde(default, rename = "insertOrReplace")]
    pub insert_or_replace: Option<Value>,
    #[serde(default)]
    pub ops: Vec<Value>,
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Count the job as changed and write even if no operation mutated.
    #[serde(default)]
    pub force: bool,
    /// Compute the verdict without writing.
    #[serde(default)]
    pub check: bool,
    #[serde(default)]
    pub strict_insert: bool,
    #[serde(default)]
    pub atomic: bool,
}

/// Outcome of [`run_job`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobOutcome {
    pub changed: bool,
    pub written: bool,
    pub output: PathBuf,
}

impl PatchJob {
    /// A job patching `path` in place with default settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PatchJob {
            path: path.into(),
            target: None,
            replace: None,
            delete: None,
            insert: None,
            insert_or_replace: None,
            ops: Vec::new(),
            indent: default_indent(),
            force: false,
            check: false,
            strict_insert: false,
            atomic: false,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a job file. A relative `path` or `target` inside the file is
    /// resolved against the job file's directory.
    pub fn load(file: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(file).map_err(|e| CliError::io(file, e))?;
        let mut job = Self::from_toml_str(&text)?;
        if let Some(dir) = file.parent() {
            job.path = dir.join(&job.path);
            job.target = job.target.take().map(|t| dir.join(t));
        }
        Ok(job)
    }

    pub fn output_path(&self) -> &Path {
        self.target.as_deref().unwrap_or(&self.path)
    }

    pub fn apply_options(&self) -> ApplyPatchOptions {
        ApplyPatchOptions {
            strict_insert: self.strict_insert,
            atomic: self.atomic,
        }
    }

    /// The operation records of this job: the top-level record (if it names
    /// any kind) followed by `ops`.
    pub fn operation_records(&self) -> Value {
        let mut top = Map::new();
        let fields = [
            (OpKind::Replace, &self.replace),
            (OpKind::Delete, &self.delete),
            (OpKind::Insert, &self.insert),
            (OpKind::InsertOrReplace, &self.insert_or_replace),
        ];
        for (kind, payload) in fields {
            if let Some(payload) = payload {
                top.insert(kind.as_str().to_string(), payload.clone());
            }
        }
        let mut records = Vec::with_capacity(self.ops.len() + 1);
        if !top.is_empty() {
            records.push(Value::Object(top));
        }
        records.extend(self.ops.iter().cloned());
        Value::Array(records)
    }
}

/// Run a job: read, patch, and write the output when the job counts as
/// changed and is not in check mode.
///
/// The job counts as changed if any operation mutated the document, if the
/// target file does not exist yet, or if `force` is set.
pub fn run_job(job: &PatchJob) -> Result<JobOutcome, CliError> {
    let text = fs::read_to_string(&job.path).map_err(|e| CliError::io(&job.path, e))?;
    let mut doc = decode_document(&text)?;
    let ops = from_json_ops(&job.operation_records())?;

    let results = apply_ops(&mut doc, &ops, &job.apply_options())?;
    log_results(&results);

    let output = job.output_path();
    let mut changed = results.iter().any(|r| r.changed);
    if job.target.is_some() && !output.exists() {
        tracing::debug!(output = %output.display(), "target does not exist yet");
        changed = true;
    }
    if job.force && !changed {
        tracing::warn!(output = %output.display(), "no change, forcing write");
        changed = true;
    }

    let written = changed && !job.check;
    if written {
        let encoded = encode_document(&doc, job.indent)?;
        fs::write(output, encoded).map_err(|e| CliError::io(output, e))?;
        tracing::info!(output = %output.display(), "wrote patched document");
    } else if changed {
        tracing::info!(output = %output.display(), "check mode, not writing");
    }

    Ok(JobOutcome {
        changed,
        written,
        output: output.to_path_buf(),
    })
}
