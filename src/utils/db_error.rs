//! Classification of `sqlx` errors.

use crate::error::ConflictTarget;

/// Unique index on `md5(urls.original_url)`.
pub const URLS_ORIGINAL_URL_KEY: &str = "urls_original_url_key";

/// Unique constraint on `urls.short_code`.
pub const URLS_SHORT_CODE_KEY: &str = "urls_short_code_key";

/// Returns the violated column if `e` is a unique violation.
pub fn unique_violation_target(e: &sqlx::Error) -> Option<ConflictTarget> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    let target = match db_err.constraint() {
        Some(URLS_SHORT_CODE_KEY) => ConflictTarget::ShortCode,
        Some(URLS_ORIGINAL_URL_KEY) => ConflictTarget::OriginalUrl,
        other => ConflictTarget::Other(other.map(str::to_string)),
    };

    Some(target)
}

/// Returns true if `e` means no usable connection could be obtained.
pub fn is_store_unavailable(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_)
    )
}
