//! Url entity representing a shortened link.

use chrono::{DateTime, Utc};

/// A shortened URL mapping.
///
/// Created once per distinct `original_url` and never updated afterwards.
/// `short_code` is derived from `original_url`, see
/// [`crate::utils::short_code::derive_short_code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl Url {
    /// Creates a new Url instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a new url.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrl {
    pub original_url: String,
    pub short_code: String,
}

impl NewUrl {
    /// Builds an insert for `original_url` with its derived short code.
    pub fn derived(original_url: impl Into<String>) -> Self {
        let original_url = original_url.into();
        let short_code = crate::utils::short_code::derive_short_code(&original_url);

        Self {
            original_url,
            short_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_creation() {
        let now = Utc::now();
        let url = Url::new(
            1,
            "https://example.com/a".to_string(),
            "Lc4KTFBE".to_string(),
            now,
        );

        assert_eq!(url.id, 1);
        assert_eq!(url.original_url, "https://example.com/a");
        assert_eq!(url.short_code, "Lc4KTFBE");
        assert_eq!(url.created_at, now);
    }

    #[test]
    fn test_new_url_derived() {
        let new_url = NewUrl::derived("https://example.com/a");

        assert_eq!(new_url.original_url, "https://example.com/a");
        assert_eq!(new_url.short_code, "Lc4KTFBE");
    }
}
