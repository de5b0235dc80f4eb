//! docpatch: path-addressed JSON document patching.
//!
//! Applies ordered `replace`, `delete`, `insert` and `insertOrReplace`
//! operations to a `serde_json::Value` in place and reports whether any of
//! them changed the document.
//!
//! - [`json_patch`]: operations, the applicator and the record codec.
//! - [`json_cli`]: document text handling, operation files and file jobs
//!   used by the `docpatch` binary.
//!
//! Path parsing and resolution live in the `docpatch-path` crate.

pub mod json_patch;
pub mod json_cli;
