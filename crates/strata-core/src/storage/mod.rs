//! Storage abstraction for string records
//!
//! The `StringStore` trait abstracts over storage backends:
//!
//! - **Memory**: in-memory storage for tests and ephemeral servers (`MemoryStore`)
//! - **SQLite**: native SQLite via rusqlite (`strata-sqlite` crate)
//!
//! # Example
//!
//! ```rust
//! use strata_core::storage::{MemoryStore, QueryStore, StringStore};
//! use strata_core::{StringFilter, StringRecord};
//!
//! let mut store = MemoryStore::new();
//!
//! let record = StringRecord::new("racecar");
//! let id = record.id.clone();
//! store.put(record).unwrap();
//!
//! assert!(store.get(&id).unwrap().is_some());
//!
//! let filter = StringFilter { is_palindrome: Some(true), ..Default::default() };
//! assert_eq!(store.query(&filter).unwrap().len(), 1);
//! ```

mod error;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{QueryStore, StorageStats, StringStore};
