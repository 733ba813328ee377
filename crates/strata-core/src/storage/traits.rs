//! Storage trait definitions

use crate::filter::StringFilter;
use crate::record::StringRecord;
use crate::storage::error::StoreResult;

/// Core storage operations for string records.
///
/// Records are keyed by their content-addressed id (see [`crate::analysis::record_id`]).
pub trait StringStore {
    /// Store a record.
    ///
    /// If a record with the same id already exists, returns `StoreError::AlreadyExists`.
    fn put(&mut self, record: StringRecord) -> StoreResult<()>;

    /// Retrieve a record by id.
    ///
    /// Returns `None` if not found.
    fn get(&self, id: &str) -> StoreResult<Option<StringRecord>>;

    /// Check if a record exists.
    fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Delete a record by id.
    ///
    /// Returns `true` if the record was deleted, `false` if it didn't exist.
    fn delete(&mut self, id: &str) -> StoreResult<bool>;

    /// Get all record ids.
    fn ids(&self) -> StoreResult<Vec<String>>;

    /// Get the total count of records.
    fn count(&self) -> StoreResult<usize> {
        Ok(self.ids()?.len())
    }

    /// Clear all records.
    fn clear(&mut self) -> StoreResult<()>;
}

/// Filtered retrieval on top of basic CRUD.
pub trait QueryStore: StringStore {
    /// Return every record matching `filter`, oldest first (ties broken by id).
    fn query(&self, filter: &StringFilter) -> StoreResult<Vec<StringRecord>>;

    /// Get storage statistics.
    fn stats(&self) -> StoreResult<StorageStats>;
}

/// Storage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageStats {
    pub total_records: usize,
    pub palindromes: usize,
}
