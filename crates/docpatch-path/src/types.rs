//! Type definitions for document paths.

/// A step in a document path.
///
/// Read as a mapping key when the current node is an object and as a
/// sequence index when the current node is an array.
pub type PathStep = String;

/// A document path: the ordered steps from the root to a value.
pub type Path = Vec<PathStep>;
