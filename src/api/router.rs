use axum::{Router, http::Uri, middleware, routing::get};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::courses;
use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::openapi;
use super::state::AppState;
use super::types::ApiError;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Course registry
        .merge(courses::create_courses_router())
        // API description
        .route("/openapi.json", get(openapi::openapi_json))
        .fallback(route_not_found)
        .with_state(state)
        // Outermost last: the request id is set before tracing and logging see the request
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Unmatched paths answer with the regular error envelope
async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route not found: {}", uri.path()))
}
