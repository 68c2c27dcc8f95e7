//! Validation of URLs submitted for shortening.
//!
//! URLs are stored verbatim. Only the scheme prefix, the length and the absence
//! of control characters are checked, so `https://Example.com` and `https://example.com` are distinct links.

use crate::error::AppError;
use serde_json::json;

/// Schemes a URL must start with.
pub const ALLOWED_SCHEMES: &[&str] = &["http://", "https://"];

/// URLs must be strictly shorter than this many characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Checks that `url` is non-empty, uses an allowed scheme, is short enough and
/// contains no ASCII control characters.
///
/// A URL passing this check is always a valid `Location` header value.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with `"URL is required"` for an empty
/// string and `"Invalid URL format"` otherwise.
pub fn validate_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::bad_request("URL is required", json!({})));
    }

    if !ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "reason": "URL must start with http:// or https://" }),
        ));
    }

    if let Some(position) = url.chars().position(|c| c.is_ascii_control()) {
        return Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "reason": "URL contains a control character", "position": position }),
        ));
    }

    let length = url.chars().count();
    if length >= MAX_URL_LENGTH {
        return Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "reason": "URL is too long", "max_length": MAX_URL_LENGTH - 1, "provided_length": length }),
        ));
    }

    Ok(())
}

/// `validator` adapter for [`validate_url`].
pub fn validate_url_field(url: &str) -> Result<(), validator::ValidationError> {
    validate_url(url).map_err(|e| {
        validator::ValidationError::new("url").with_message(e.to_string().into())
    })
}
