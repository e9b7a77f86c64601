//! HTTP route handlers.
//!
//! Every route is a GET returning a JSON object. Unknown paths and wrong
//! methods are answered by fallbacks that render `ApiError` as JSON.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod info;
pub mod openapi;
pub mod root;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::error::ApiError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and fallbacks.
pub fn create_router(state: AppState) -> Router {
    // Health check - never cached, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    let api_routes = Router::new()
        .route("/", get(root::root))
        .route("/api/v1/info", get(info::info))
        .route("/openapi.json", get(openapi::openapi));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .fallback(not_found)
        // Must come after every route so each method router picks it up
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
