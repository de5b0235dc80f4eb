#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use docpatch::json_patch::Op;
use serde_json::{json, Value};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// The index-pattern document the fixtures are built around.
pub fn config_doc() -> Value {
    json!({"found": true, "_source": {"defaultIndex": "filebeat-*"}, "version": "2"})
}

pub fn config_ops() -> Vec<Op> {
    vec![
        Op::delete("/found"),
        Op::replace("/_source/defaultIndex", json!("artifactory-*")),
        Op::insert("/_source/__NEW__", json!("TEST")),
        Op::insert_or_replace("/author", json!("TEST")),
        Op::replace("/version", json!("3")),
    ]
}

pub fn config_expected() -> Value {
    json!({
        "_source": {"defaultIndex": "artifactory-*", "__NEW__": "TEST"},
        "version": "3",
        "author": "TEST"
    })
}

/// Object keys in document order, depth first.
pub fn key_order(val: &Value) -> Vec<String> {
    let mut out = Vec::new();
    collect_keys(val, "", &mut out);
    out
}

fn collect_keys(val: &Value, prefix: &str, out: &mut Vec<String>) {
    match val {
        Value::Object(map) => {
            for (k, v) in map {
                let path = format!("{prefix}/{k}");
                out.push(path.clone());
                collect_keys(v, &path, out);
            }
        }
        Value::Array(arr) => {
            for (i, v) in arr.iter().enumerate() {
                collect_keys(v, &format!("{prefix}/{i}"), out);
            }
        }
        _ => {}
    }
}
