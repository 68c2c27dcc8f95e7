//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State, rejection::PathRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::net::SocketAddr;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// The click (hashed client address, `Referer`, `User-Agent`) is recorded
/// before responding. A failed write is logged and the redirect proceeds.
///
/// # Errors
///
/// - 400 if the code is not valid UTF-8 or is longer than 10 characters
/// - 404 if the code is unknown
/// - 503 if the database is unavailable
pub async fn redirect_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let Path(code) = code.map_err(|rejection| {
        AppError::bad_request(
            "Invalid short code",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let click_event = ClickEvent::new(
        Some(client_ip(&headers, addr, state.behind_proxy)),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
        headers.get(header::USER_AGENT).and_then(|v| v.to_str().ok()),
    );

    let url = state.redirect_service.resolve(&code, click_event).await?;

    let location = HeaderValue::from_bytes(url.original_url.as_bytes()).map_err(|_| {
        AppError::internal(format!(
            "Stored URL for {} is not a valid Location header",
            url.short_code
        ))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
