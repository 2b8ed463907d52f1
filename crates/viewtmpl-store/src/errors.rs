//! Error handling for viewtmpl-store
//!
//! Wraps viewtmpl-core ExError with store-specific helpers

use thiserror::Error;
use viewtmpl_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Structural problems found while validating a parsed snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotIssue {
    #[error("Duplicate category id {id}")]
    DuplicateCategoryId { id: i64 },

    #[error("Duplicate element id {id}")]
    DuplicateElementId { id: i64 },

    #[error("Template '{template}' lists category {category_id} more than once")]
    RepeatedCategoryEntry { template: String, category_id: i64 },
}

impl From<SnapshotIssue> for ExError {
    fn from(issue: SnapshotIssue) -> Self {
        snapshot_validation(&issue.to_string())
    }
}

/// Create a snapshot validation error
pub fn snapshot_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidSnapshot)
        .with_op("snapshot_parse")
        .with_message(reason.to_string())
}

/// Create an unsupported schema version error
pub fn unsupported_schema(found: u32, expected: u32) -> ExError {
    ExError::new(ExErrorKind::UnsupportedSchema)
        .with_op("snapshot_parse")
        .with_message(format!(
            "Unsupported schema_version: {}. Expected {}",
            found, expected
        ))
}

/// Create a labels file error
pub fn labels_error(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("labels_parse")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, path: &std::path::Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}
