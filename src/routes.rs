//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check (public)
//! - `/api/*`        - REST API, see [`crate::api::routes::api_routes`]
//! - anything else   - 404 `unknown endpoint`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api` (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, unknown_endpoint_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and middleware without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - when `true`, `/api` is rate limited per peer IP; the
///   resulting service must then be served with connect info
pub fn router(state: AppState, rate_limit: bool) -> Router {
    let mut api_router = api::routes::api_routes();
    if rate_limit {
        api_router = api_router.layer(rate_limit::layer());
    }

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .fallback(unknown_endpoint_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/blogs/` and
/// `/api/blogs` reach the same handler.
pub fn app_router(state: AppState, rate_limit: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, rate_limit))
}
