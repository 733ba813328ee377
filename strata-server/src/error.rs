//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use strata_core::{FilterError, ParseError, ParseErrorKind, StoreError};
use thiserror::Error;
use tracing::error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Query(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Filter(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Query(err) => match err.kind() {
                ParseErrorKind::Unparseable => StatusCode::BAD_REQUEST,
                ParseErrorKind::Conflicting => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ApiError::Store(StoreError::AlreadyExists(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            ApiError::Filter(FilterError::UnknownParameters(names)) => json!({
                "error": "invalid query parameters",
                "invalid_parameters": names,
            }),
            ApiError::Store(StoreError::AlreadyExists(_)) => json!({
                "error": "string already exists in the system",
            }),
            ApiError::Store(err) if status.is_server_error() => {
                error!("storage failure: {}", err);
                json!({ "error": "internal storage error" })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
