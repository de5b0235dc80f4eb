//! docpatch-util - Value helpers shared by the docpatch crates
//!
//! Structural equality used for change detection, and the truthiness test
//! used to decide whether an operation record payload is present.

pub mod is_falsy;
pub mod json_equal;

// Re-exports for convenience
pub use is_falsy::{is_falsy, is_truthy};
pub use json_equal::{deep_equal, number_equal};
