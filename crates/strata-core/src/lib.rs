//! Strata Core Engine
//!
//! Stores analyzed strings and retrieves them by structured filters or by a
//! plain-English description of those filters.
//!
//! # Modules
//!
//! - [`nlq`] - natural-language to filter compiler
//! - [`analysis`] - derived properties of stored strings
//! - [`filter`] - storage-facing record predicate
//! - [`storage`] - storage traits and the in-memory backend
//!
//! # Example
//!
//! ```rust
//! use strata_core::nlq;
//! use strata_core::storage::{MemoryStore, QueryStore, StringStore};
//! use strata_core::{StringFilter, StringRecord};
//!
//! let mut store = MemoryStore::new();
//! store.put(StringRecord::new("racecar")).unwrap();
//! store.put(StringRecord::new("hello world")).unwrap();
//!
//! let query = nlq::parse("palindromic strings longer than 5").unwrap();
//! let filter = StringFilter::from(&query.parsed_filters);
//! let found = store.query(&filter).unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].value, "racecar");
//! ```

pub mod analysis;
pub mod filter;
pub mod nlq;
pub mod record;
pub mod storage;

// Re-export main types at crate root
pub use analysis::{analyze, record_id, StringProperties};
pub use filter::{FilterError, StringFilter};
pub use nlq::{NaturalQuery, ParseError, ParseErrorKind, ParsedFilters};
pub use record::{is_valid_value, StringRecord};
pub use storage::{MemoryStore, QueryStore, StoreError, StringStore};
