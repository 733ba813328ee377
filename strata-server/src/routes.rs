//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::strings, state::AppState};

/// String API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/strings",
            post(strings::create_string).get(strings::list_strings),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(strings::filter_by_natural_language),
        )
        .route(
            "/strings/:value",
            get(strings::get_string).delete(strings::delete_string),
        )
}

/// The complete application with middleware and state attached
pub fn app(state: AppState) -> Router {
    api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
