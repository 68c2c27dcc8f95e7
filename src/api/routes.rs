//! Route table for the public endpoints.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes, without middleware.
///
/// # Endpoints
///
/// - `POST /shorten`       - Get or create the short code for a URL
/// - `GET  /stats/{code}`  - Click statistics for a short code
/// - `GET  /health`        - Database and pool status
/// - `GET  /{code}`        - Redirect to the original URL
///
/// Static segments take precedence over `/{code}`; derived codes are always
/// eight characters, so they never shadow `shorten` or `health`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
