//! Strata HTTP service
//!
//! Exposes the `/strings` API: store analyzed strings, fetch and delete them
//! by value, and list them by query-string filters or by a natural-language
//! description compiled with [`strata_core::nlq`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod state;

pub use config::Args;
pub use routes::app;
pub use state::AppState;
