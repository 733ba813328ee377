//! String record API handlers

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use strata_core::{is_valid_value, nlq, record_id, StringFilter, StringRecord};
use tracing::{debug, info, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::{NaturalLanguageResponse, StringListResponse},
    state::AppState,
};

/// Analyze and store a new string
pub async fn create_string(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StringRecord>)> {
    let Json(body) = payload
        .map_err(|e| ApiError::BadRequest(format!("invalid request body: {}", e.body_text())))?;

    let value = match body.get("value") {
        None | Some(Value::Null) => {
            return Err(ApiError::BadRequest(
                "missing \"value\" field".to_string(),
            ))
        }
        Some(Value::String(value)) => value.clone(),
        Some(_) => {
            return Err(ApiError::Unprocessable(
                "\"value\" must be a string".to_string(),
            ))
        }
    };

    if value.trim().is_empty() {
        return Err(ApiError::BadRequest("\"value\" must not be empty".to_string()));
    }
    if !is_valid_value(&value) {
        return Err(ApiError::Unprocessable(
            "\"value\" may only contain letters and whitespace".to_string(),
        ));
    }

    let record = StringRecord::new(value);
    state.store().put(record.clone())?;

    info!(id = %record.id, length = record.properties.length, "stored string");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Fetch a stored string by its value
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> ApiResult<Json<StringRecord>> {
    state
        .store()
        .get(&record_id(&value))?
        .map(Json)
        .ok_or_else(|| not_found(&value))
}

/// Delete a stored string by its value
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    if !state.store().delete(&record_id(&value))? {
        return Err(not_found(&value));
    }

    info!(value = %value, "deleted string");
    Ok(StatusCode::NO_CONTENT)
}

/// List stored strings matching query-string filters
pub async fn list_strings(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<StringListResponse>> {
    let filter = StringFilter::from_params(&params).inspect_err(|err| {
        warn!("rejected filter parameters: {}", err);
    })?;

    let data = state.store().query(&filter)?;
    debug!(count = data.len(), "listed strings");

    Ok(Json(StringListResponse {
        count: data.len(),
        data,
        filters_applied: filter,
    }))
}

/// List stored strings matching a plain-English description
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<NaturalLanguageResponse>> {
    let query = params
        .get("query")
        .ok_or_else(|| ApiError::BadRequest("missing \"query\" parameter".to_string()))?;

    let interpreted = nlq::parse(query).inspect_err(|err| {
        warn!(query = %query, kind = %err.kind(), "rejected natural language query: {}", err.reason());
    })?;

    let filter = StringFilter::from(&interpreted.parsed_filters);
    let data = state.store().query(&filter)?;
    debug!(query = %query, count = data.len(), "natural language query");

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: interpreted,
    }))
}

fn not_found(value: &str) -> ApiError {
    ApiError::NotFound(format!("string '{}' does not exist in the system", value))
}
