//! Natural-language filter compiler
//!
//! Compiles an English description of string filters into [`ParsedFilters`].
//! The recognizer is a closed set of phrase patterns, not a general language
//! model: identical input always yields identical output.
//!
//! # Pipeline
//!
//! ```text
//! raw text -> normalize -> palindrome -> word_count -> length -> ordinal_character
//!          -> contains_character -> negative_contains -> validate -> NaturalQuery
//! ```
//!
//! # Example
//!
//! ```rust
//! use strata_core::nlq::{self, ParseErrorKind};
//!
//! let query = nlq::parse("strings longer than ten that aren't palindromes").unwrap();
//! assert_eq!(query.parsed_filters.min_length, Some(11));
//! assert_eq!(query.parsed_filters.is_palindrome, Some(false));
//!
//! let err = nlq::parse("between 10 and 3").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::Conflicting);
//! ```

mod error;
mod filters;
pub mod lexicon;
mod normalize;
mod stages;

pub use error::{ParseError, ParseErrorKind};
pub use filters::{NaturalQuery, ParsedFilters};
pub use lexicon::resolve_number;
pub use normalize::normalize;
pub use stages::{Stage, STAGES};

use tracing::debug;

/// Compile a natural-language query into structured filters.
pub fn parse(query: &str) -> Result<NaturalQuery, ParseError> {
    let text = normalize(query)?;

    let mut filters = ParsedFilters::new();
    for (name, stage) in STAGES {
        filters = stage(&text, filters).inspect_err(|err| {
            debug!(stage = name, kind = %err.kind(), "query rejected: {}", err.reason());
        })?;
    }

    validate(&filters)?;

    debug!(query = %text, ?filters, "query compiled");
    Ok(NaturalQuery {
        original: query.to_string(),
        parsed_filters: filters,
    })
}

/// Final consistency checks over the accumulated filters.
fn validate(filters: &ParsedFilters) -> Result<(), ParseError> {
    if filters.is_empty() {
        return Err(ParseError::unparseable("no recognizable filter"));
    }

    if let (Some(min), Some(max)) = (filters.min_length, filters.max_length) {
        if min > max {
            return Err(ParseError::conflicting(format!(
                "min_length {min} exceeds max_length {max}"
            )));
        }
    }

    Ok(())
}
