//! Route definitions

use axum::{Router, http::Uri, routing::get};
use infrastructure::SecurityConfig;
use tower_http::trace::TraceLayer;

use crate::{
    error::ApiError,
    handlers,
    middleware::{ApiKeyAuthLayer, RequestIdLayer},
    openapi,
    state::AppState,
};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Station readings
        .route("/api/stations", get(handlers::stations::list_stations))
        .route(
            "/api/stations/{station_id}",
            get(handlers::stations::get_station),
        )
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Swagger UI and OpenAPI document
        .merge(openapi::create_openapi_routes())
        .fallback(not_found)
        // Attach state
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Create the router wrapped in authentication, tracing and request IDs
///
/// Layer order, outermost first: request ID, trace, API key check.
pub fn create_app(state: AppState, security: &SecurityConfig) -> Router {
    let auth_layer = ApiKeyAuthLayer::new(security.api_keys.clone())
        .with_excluded_paths(security.excluded_paths.clone());

    create_router(state)
        .layer(auth_layer)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
}
