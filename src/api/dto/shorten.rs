//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::url_validator::validate_url_field;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL (`http://` or `https://`, under 2048 characters).
    #[validate(
        required(message = "URL is required"),
        custom(function = "validate_url_field")
    )]
    pub url: Option<String>,
}

/// Response carrying the short code.
///
/// Identical whether the code was just created or already existed.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
}
