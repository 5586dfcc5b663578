//! Errors raised by the shared polymorphic helpers

use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    /// Owner kind is not present in the registry
    #[error("unknown owner kind: {kind}")]
    UnknownKind { kind: String },

    /// Owner reference points at a different kind than the one requested
    #[error("owner kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: String, found: String },

    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}
