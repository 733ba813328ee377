//! Compiler output types

use serde::{Deserialize, Serialize};

/// Structured filters recognized in a natural-language query.
///
/// A value returned from a successful parse always has at least one field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,

    /// Inclusive lower bound on string length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// Inclusive upper bound on string length. Omitted when unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Single lowercase ASCII letter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl ParsedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no filter was recognized.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.word_count.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.contains_character.is_none()
    }
}

/// A successfully compiled query: the filters plus the caller's original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalQuery {
    /// Query text exactly as received, before normalization
    pub original: String,
    pub parsed_filters: ParsedFilters,
}
