//! API request and response models

use serde::Serialize;
use strata_core::{NaturalQuery, StringFilter, StringRecord};

/// Response for `GET /strings`
#[derive(Debug, Serialize)]
pub struct StringListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: StringFilter,
}

/// Response for `GET /strings/filter-by-natural-language`
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: NaturalQuery,
}
