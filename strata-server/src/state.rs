//! Application state shared across handlers

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use strata_core::{MemoryStore, QueryStore};

/// Boxed storage backend
pub type DynStore = Box<dyn QueryStore + Send>;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<DynStore>>,
}

impl AppState {
    /// Create state around a storage backend
    pub fn new(store: impl QueryStore + Send + 'static) -> Self {
        Self {
            store: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    /// State backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Lock the store. Do not hold the guard across an await point.
    pub fn store(&self) -> MutexGuard<'_, DynStore> {
        self.store.lock()
    }
}
