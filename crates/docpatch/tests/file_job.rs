mod common;

use std::fs;

use common::{config_expected, fixture_path, key_order, read_fixture};
use docpatch::json_cli::{decode_document, load_ops_file, run_job, CliError, PatchJob};
use docpatch::json_patch::{OpKind, PatchError};
use serde_json::{json, Value};
use tempfile::TempDir;

fn job_with_fixture_ops(dir: &TempDir, target: Option<&str>) -> PatchJob {
    let source = dir.path().join("config.json");
    fs::write(&source, read_fixture("config.json")).unwrap();
    let mut job = PatchJob::new(source);
    job.target = target.map(|t| dir.path().join(t));
    job.ops = match load_ops_file(&fixture_path("ops.json")).unwrap() {
        Value::Array(records) => records,
        other => panic!("ops fixture is not a list: {other}"),
    };
    job
}

#[test]
fn toml_and_json_ops_files_agree() {
    let from_json = load_ops_file(&fixture_path("ops.json")).unwrap();
    let from_toml = load_ops_file(&fixture_path("ops.toml")).unwrap();
    assert_eq!(from_json, from_toml);
}

#[test]
fn job_writes_target_with_indent() {
    let dir = TempDir::new().unwrap();
    let mut job = job_with_fixture_ops(&dir, Some("out/config_update.json"));
    fs::create_dir_all(dir.path().join("out")).unwrap();
    job.indent = 4;

    let outcome = run_job(&job).unwrap();
    assert!(outcome.changed);
    assert!(outcome.written);

    let written = fs::read_to_string(&outcome.output).unwrap();
    assert!(written.starts_with("{\n    \"_source\""));
    let doc = decode_document(&written).unwrap();
    assert_eq!(doc, config_expected());
    assert_eq!(key_order(&doc)[3], "/version");

    // The source is left alone when a target is given.
    assert!(fs::read_to_string(&job.path).unwrap().contains("\"found\""));
}

#[test]
fn unchanged_in_place_job_does_not_write() {
    let dir = TempDir::new().unwrap();
    let mut job = job_with_fixture_ops(&dir, None);
    job.ops = vec![json!({"replace": {"path": "/_source/defaultIndex", "value": "filebeat-*"}})];
    let before = fs::read_to_string(&job.path).unwrap();

    let outcome = run_job(&job).unwrap();
    assert!(!outcome.changed);
    assert!(!outcome.written);
    assert_eq!(fs::read_to_string(&job.path).unwrap(), before);
}

#[test]
fn missing_target_counts_as_changed() {
    let dir = TempDir::new().unwrap();
    let mut job = job_with_fixture_ops(&dir, Some("config_nochange.json"));
    job.ops = vec![json!({"replace": {"path": "/_source/defaultIndex", "value": "filebeat-*"}})];

    let outcome = run_job(&job).unwrap();
    assert!(outcome.changed && outcome.written);

    // Second run: the target now exists and nothing changes.
    let outcome = run_job(&job).unwrap();
    assert!(!outcome.changed && !outcome.written);
}

#[test]
fn force_writes_unchanged_document() {
    let dir = TempDir::new().unwrap();
    let mut job = job_with_fixture_ops(&dir, None);
    job.ops = vec![json!({"replace": {"path": "/version", "value": "2"}})];
    job.force = true;

    let outcome = run_job(&job).unwrap();
    assert!(outcome.changed && outcome.written);
    // Rewritten without the byte order mark and with two-space indent.
    let written = fs::read_to_string(&job.path).unwrap();
    assert!(written.starts_with("{\n  \"found\": true"));
}

#[test]
fn check_mode_never_writes() {
    let dir = TempDir::new().unwrap();
    let mut job = job_with_fixture_ops(&dir, Some("out.json"));
    job.check = true;

    let outcome = run_job(&job).unwrap();
    assert!(outcome.changed);
    assert!(!outcome.written);
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn failing_operation_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut job = job_with_fixture_ops(&dir, Some("out.json"));
    job.ops.push(json!({"delete": {"path": "/missing"}}));

    let err = run_job(&job).unwrap_err();
    assert!(matches!(
        err,
        CliError::Patch(PatchError::PathNotFound { op: OpKind::Delete, ref path }) if path == "/missing"
    ));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn job_without_operations_rejected() {
    let dir = TempDir::new().unwrap();
    let mut job = job_with_fixture_ops(&dir, None);
    job.ops.clear();

    let err = run_job(&job).unwrap_err();
    assert!(matches!(
        err,
        CliError::Patch(PatchError::InvalidOperationList(_))
    ));
}

#[test]
fn toml_job_file_resolves_relative_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), read_fixture("config.json")).unwrap();
    let job_file = dir.path().join("job.toml");
    fs::write(
        &job_file,
        r#"
path = "config.json"
target = "config_update.json"

[replace]
path = "/_source/defaultIndex"
value = "artifactory-*"

[delete]
path = "/found"

[insert]
path = "/_source/__NEW__"
value = "__TEXT__"
"#,
    )
    .unwrap();

    let job = PatchJob::load(&job_file).unwrap();
    let outcome = run_job(&job).unwrap();
    assert!(outcome.written);
    assert_eq!(outcome.output, dir.path().join("config_update.json"));

    let doc = decode_document(&fs::read_to_string(&outcome.output).unwrap()).unwrap();
    assert_eq!(
        doc,
        json!({"_source": {"defaultIndex": "artifactory-*", "__NEW__": "__TEXT__"}, "version": "2"})
    );
}

#[test]
fn unreadable_source_reports_path() {
    let dir = TempDir::new().unwrap();
    let mut job = PatchJob::new(dir.path().join("absent.json"));
    job.ops = vec![json!({"delete": {"path": "/a"}})];
    let err = run_job(&job).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
