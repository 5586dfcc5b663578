//! Contract error types for reports service
//!
//! A missing actor is not an error: those operations return `None`/`false`/`0`.

use polymorph::MorphError;

/// Reports service domain errors
#[derive(Debug, thiserror::Error)]
pub enum ReportsError {
    /// Report or report item not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Invalid input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Owner reference with an unregistered kind
    #[error("Unknown owner kind: {kind}")]
    UnknownOwnerKind { kind: String },

    /// Persistence failure, including unknown report item ids
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ReportsError {
    pub fn report_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "report".to_string(),
            id: id.to_string(),
        }
    }

    pub fn report_item_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "report item".to_string(),
            id: id.to_string(),
        }
    }
}

impl From<MorphError> for ReportsError {
    fn from(err: MorphError) -> Self {
        match err {
            MorphError::UnknownKind { kind } => Self::UnknownOwnerKind { kind },
            MorphError::KindMismatch { expected, found } => Self::Validation {
                message: format!("owner kind mismatch: expected {}, found {}", expected, found),
            },
            other => Self::Storage(other.into()),
        }
    }
}
