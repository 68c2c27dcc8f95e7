//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::json;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for a short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "Lc4KTFBE",
///   "original_url": "https://example.com/a",
///   "created_at": "2025-01-02T03:04:05Z",
///   "total_clicks": 1,
///   "recent_clicks": [
///     { "timestamp": "2025-01-03T00:00:00Z", "referrer": null, "user_agent": "curl/8.0" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 400 if the code is not valid UTF-8 or is longer than 10 characters
/// - 404 if the code is unknown
/// - 503 if the database is unavailable
pub async fn stats_handler(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Path(code) = code.map_err(|rejection| {
        AppError::bad_request(
            "Invalid short code",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let stats = state.stats_service.stats(&code).await?;

    Ok(Json(stats.into()))
}
