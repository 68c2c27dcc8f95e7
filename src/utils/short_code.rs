//! Short code derivation and validation.
//!
//! Codes are derived, not generated: the same URL always maps to the same code.
//! The first [`DIGEST_PREFIX_BYTES`] bytes of the URL's SHA-256 digest are
//! encoded as URL-safe base64 without padding, producing [`SHORT_CODE_LENGTH`]
//! characters. Truncating to 48 bits keeps codes short at the cost of a real
//! collision probability, which [`crate::application::services::ShorteningService`]
//! reports instead of retrying.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;
use sha2::{Digest, Sha256};

/// Number of digest bytes kept before encoding.
pub const DIGEST_PREFIX_BYTES: usize = 6;

/// Length of every derived short code.
pub const SHORT_CODE_LENGTH: usize = 8;

/// Longest code accepted on lookup routes.
pub const MAX_LOOKUP_CODE_LENGTH: usize = 10;

/// Derives the short code for `url`.
///
/// # Examples
///
/// ```
/// use snaplink::utils::short_code::derive_short_code;
///
/// let code = derive_short_code("https://example.com/a");
/// assert_eq!(code.len(), 8);
/// assert_eq!(code, derive_short_code("https://example.com/a"));
/// ```
pub fn derive_short_code(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..DIGEST_PREFIX_BYTES])
}

/// Rejects lookup codes longer than [`MAX_LOOKUP_CODE_LENGTH`] characters.
///
/// Only the length is checked; an unknown but short code is a normal
/// not-found outcome, not a validation error.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the code is too long.
pub fn validate_lookup_code(code: &str) -> Result<(), AppError> {
    let length = code.chars().count();

    if length > MAX_LOOKUP_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Invalid short code",
            json!({ "max_length": MAX_LOOKUP_CODE_LENGTH, "provided_length": length }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_url_safe(code: &str) -> bool {
        code.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    #[test]
    fn test_derive_known_values() {
        assert_eq!(derive_short_code("https://example.com/a"), "Lc4KTFBE");
        assert_eq!(derive_short_code("https://example.com"), "EAaArVRs");
        assert_eq!(
            derive_short_code("http://localhost:8080/path?q=1"),
            "043S7JK2"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let url = "https://rust-lang.org/learn";
        assert_eq!(derive_short_code(url), derive_short_code(url));
    }

    #[test]
    fn test_derive_length_and_alphabet() {
        let inputs = [
            "https://example.com",
            "https://example.com/?q=тест",
            "http://a.b/c#frag",
            "https://example.com/very/long/path/with/many/segments/and?query=string&more=values",
            "x",
        ];

        for input in inputs {
            let code = derive_short_code(input);
            assert_eq!(code.len(), SHORT_CODE_LENGTH, "input: {input}");
            assert!(is_url_safe(&code), "input: {input}, code: {code}");
            assert!(!code.contains('='));
        }
    }

    #[test]
    fn test_derive_distinguishes_similar_urls() {
        assert_ne!(
            derive_short_code("https://example.com/a"),
            derive_short_code("https://example.com/b")
        );
        assert_ne!(
            derive_short_code("https://example.com"),
            derive_short_code("https://example.com/")
        );
    }

    #[test]
    fn test_validate_lookup_code_accepts_max_length() {
        assert!(validate_lookup_code("abcdefghij").is_ok());
        assert!(validate_lookup_code("Lc4KTFBE").is_ok());
        assert!(validate_lookup_code("").is_ok());
    }

    #[test]
    fn test_validate_lookup_code_rejects_too_long() {
        let result = validate_lookup_code("abcdefghijk");
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_validate_lookup_code_counts_characters() {
        // Ten two-byte characters: 20 bytes but only 10 characters.
        assert!(validate_lookup_code("éééééééééé").is_ok());
        assert!(validate_lookup_code("ééééééééééé").is_err());
    }
}
