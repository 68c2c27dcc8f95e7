//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short code for a URL, creating it on first use.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_code": "Lc4KTFBE" }
/// ```
///
/// Repeating the request returns the same code.
///
/// # Errors
///
/// - 400 if the body is not JSON or the URL is missing or invalid
/// - 500 on a short code collision or internal error
/// - 503 if the database is unavailable
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let Some(url) = payload.url else {
        return Err(AppError::bad_request("URL is required", json!({})));
    };

    let shortened = state.shortening_service.shorten(&url).await?;

    Ok(Json(ShortenResponse {
        short_code: shortened.url.short_code,
    }))
}
