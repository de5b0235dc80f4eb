//! Path-addressed document patching.
//!
//! # Operations
//!
//! - `replace`: overwrite an existing value; fails if the path is absent.
//! - `delete`: remove a value; fails if the path is absent.
//! - `insert`: create a value under an existing parent, overwriting
//!   whatever is there unless strict insert is enabled.
//! - `insertOrReplace`: create if absent, overwrite if different.
//!
//! Every call reports a change verdict: `true` if any operation mutated the
//! document. `replace` and `insertOrReplace` with a value deeply equal to the
//! current one contribute nothing.

pub mod types;
pub mod apply;
pub mod codec;

pub use types::{ApplyPatchOptions, Op, OpKind, OpResult, PatchError, PatchResult};
pub use apply::{apply, apply_op, apply_ops, apply_patch, apply_with};
pub use codec::json::{from_json_ops, from_json_record, to_json, to_json_ops};
