//! In-memory storage backend
//!
//! A simple HashMap-based implementation for testing and development.
//! Not suitable for production use due to lack of persistence.

use std::collections::HashMap;

use crate::filter::StringFilter;
use crate::record::StringRecord;
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::traits::{QueryStore, StorageStats, StringStore};

/// In-memory string store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, StringRecord>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Create a memory store with initial records. Duplicates are dropped.
    pub fn with_records(records: Vec<StringRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            let _ = store.put(record);
        }
        store
    }
}

impl StringStore for MemoryStore {
    fn put(&mut self, record: StringRecord) -> StoreResult<()> {
        if self.records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id));
        }
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<Option<StringRecord>> {
        Ok(self.records.get(id).cloned())
    }

    fn delete(&mut self, id: &str) -> StoreResult<bool> {
        Ok(self.records.remove(id).is_some())
    }

    fn ids(&self) -> StoreResult<Vec<String>> {
        Ok(self.records.keys().cloned().collect())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.records.len())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.records.clear();
        Ok(())
    }
}

impl QueryStore for MemoryStore {
    fn query(&self, filter: &StringFilter) -> StoreResult<Vec<StringRecord>> {
        let mut matching: Vec<StringRecord> = self
            .records
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();

        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(matching)
    }

    fn stats(&self) -> StoreResult<StorageStats> {
        Ok(StorageStats {
            total_records: self.records.len(),
            palindromes: self
                .records
                .values()
                .filter(|r| r.properties.is_palindrome)
                .count(),
        })
    }
}
