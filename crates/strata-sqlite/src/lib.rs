//! SQLite storage backend for Strata string records
//!
//! This crate provides a persistent SQLite implementation of the strata-core storage
//! traits, so analyzed strings survive a server restart.
//!
//! # Features
//!
//! - Implements `StringStore` and `QueryStore` traits
//! - Filters are evaluated in SQL against indexed property columns
//! - Embedded, versioned schema migrations
//! - Supports in-memory databases for testing
//!
//! # Example
//!
//! ```rust,no_run
//! use strata_core::{storage::{QueryStore, StringStore}, StringFilter, StringRecord};
//! use strata_sqlite::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::open("strata.db")?;
//!
//! let record = StringRecord::new("racecar");
//! let id = record.id.clone();
//! store.put(record)?;
//! assert!(store.get(&id)?.is_some());
//!
//! let filter = StringFilter {
//!     is_palindrome: Some(true),
//!     ..Default::default()
//! };
//! let palindromes = store.query(&filter)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod json;
pub mod migrate;
pub mod store;

// Re-export main types
pub use error::{Result, SqliteError};
pub use store::SqliteStore;
