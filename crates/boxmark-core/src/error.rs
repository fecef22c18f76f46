//! Editor errors.

use crate::shapes::ShapeId;
use thiserror::Error;

/// Errors reported by store mutations.
///
/// Everything else that can go wrong with out-of-order input is a silent
/// no-op, reported through [`crate::editor::IgnoreReason`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Duplicate shape id: {0}")]
    DuplicateId(ShapeId),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
