//! Error types for SQLite storage backend

use strata_core::storage::StoreError;
use thiserror::Error;

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, SqliteError>;

/// Errors that can occur during SQLite storage operations
#[derive(Debug, Error)]
pub enum SqliteError {
    /// Database connection or query error
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record with given id already exists
    #[error("String record {0} already exists")]
    AlreadyExists(String),

    /// Stored row could not be turned back into a record
    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),
}

/// Convert SqliteError to StoreError for the storage trait
impl From<SqliteError> for StoreError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::AlreadyExists(id) => StoreError::AlreadyExists(id),
            SqliteError::Json(e) => StoreError::Serialization(e.to_string()),
            SqliteError::InvalidData(msg) => StoreError::InvalidData(msg),
            SqliteError::Database(e) => StoreError::Backend(format!("SQLite: {}", e)),
            SqliteError::Migration(msg) => StoreError::Backend(format!("Migration: {}", msg)),
        }
    }
}
