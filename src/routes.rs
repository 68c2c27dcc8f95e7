//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`       - Shorten a URL
//! - `GET  /{code}`        - Short link redirect
//! - `GET  /stats/{code}`  - Click statistics
//! - `GET  /health`        - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<axum::Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
