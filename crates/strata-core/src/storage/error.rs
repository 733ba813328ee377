//! Storage error types

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A record with this id already exists
    #[error("string record already exists: {0}")]
    AlreadyExists(String),

    /// Record not found
    #[error("string record not found: {0}")]
    NotFound(String),

    /// Invalid record data
    #[error("invalid record data: {0}")]
    InvalidData(String),

    /// Storage backend error (database, filesystem, etc.)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
