//! Contract error types for alerts service
//!
//! A missing actor is not an error: those operations return `None`/`false`/`0`.

use polymorph::MorphError;

/// Alerts service domain errors
#[derive(Debug, thiserror::Error)]
pub enum AlertsError {
    /// Alert not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Invalid input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Owner reference with an unregistered kind
    #[error("Unknown owner kind: {kind}")]
    UnknownOwnerKind { kind: String },

    /// Persistence failure, passed through as is
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl AlertsError {
    pub fn alert_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "alert".to_string(),
            id: id.to_string(),
        }
    }
}

impl From<MorphError> for AlertsError {
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
