//! Structured record filters
//!
//! [`StringFilter`] is the storage-facing predicate. It is built either from
//! query-string parameters or from the output of the natural-language
//! compiler, and every storage backend evaluates it the same way.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nlq::ParsedFilters;
use crate::record::StringRecord;

/// Names accepted by [`StringFilter::from_params`].
pub const FILTER_PARAMS: [&str; 5] = [
    "is_palindrome",
    "min_length",
    "max_length",
    "word_count",
    "contains_character",
];

/// Errors from validating filter parameters
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown query parameters: {}", .0.join(", "))]
    UnknownParameters(Vec<String>),

    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        reason: &'static str,
    },
}

/// Predicate over stored records. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// Inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,

    /// Matched case-insensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw query-string parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FilterError> {
        let mut unknown: Vec<String> = params
            .keys()
            .filter(|name| !FILTER_PARAMS.contains(&name.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(FilterError::UnknownParameters(unknown));
        }

        let mut filter = Self::new();

        if let Some(raw) = params.get("is_palindrome") {
            filter.is_palindrome = Some(match raw.as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(FilterError::InvalidValue {
                        name: "is_palindrome",
                        reason: "must be \"true\" or \"false\"",
                    })
                }
            });
        }

        filter.min_length = count_param(params, "min_length")?;
        filter.max_length = count_param(params, "max_length")?;
        filter.word_count = count_param(params, "word_count")?;

        if let Some(raw) = params.get("contains_character") {
            let mut chars = raw.chars();
            filter.contains_character = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
                _ => {
                    return Err(FilterError::InvalidValue {
                        name: "contains_character",
                        reason: "must be a single letter",
                    })
                }
            };
        }

        Ok(filter)
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check if a record satisfies every set field.
    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;

        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            if !record.value.chars().any(|v| v.eq_ignore_ascii_case(&c)) {
                return false;
            }
        }

        true
    }
}

impl From<&ParsedFilters> for StringFilter {
    fn from(parsed: &ParsedFilters) -> Self {
        Self {
            is_palindrome: parsed.is_palindrome,
            min_length: parsed.min_length,
            max_length: parsed.max_length,
            word_count: parsed.word_count,
            contains_character: parsed.contains_character,
        }
    }
}

fn count_param(
    params: &HashMap<String, String>,
    name: &'static str,
) -> Result<Option<u64>, FilterError> {
    params
        .get(name)
        .map(|raw| {
            raw.trim().parse::<u64>().map_err(|_| FilterError::InvalidValue {
                name,
                reason: "must be a non-negative integer",
            })
        })
        .transpose()
}
