//! Stored string records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, record_id, StringProperties};

/// An analyzed string - the unit of data in Strata.
///
/// The id is the SHA-256 of the value, so a value can be stored at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Analyze a value and stamp it with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_created_at(value, Utc::now())
    }

    /// Analyze a value with an explicit creation time.
    pub fn with_created_at(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        Self {
            id: record_id(&value),
            properties: analyze(&value),
            value,
            created_at,
        }
    }
}

/// Returns true if `value` may be stored: non-blank, ASCII letters and whitespace only.
pub fn is_valid_value(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}
