//! Repository trait for click tracking.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only click log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a click in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if `url_id` does not reference a url or on
    /// other database errors.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts clicks recorded for a url.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_url_id(&self, url_id: i64) -> Result<i64, AppError>;

    /// Returns up to `limit` clicks for a url, newest first.
    ///
    /// Clicks sharing a timestamp are ordered by insertion, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recent_by_url_id(&self, url_id: i64, limit: i64) -> Result<Vec<Click>, AppError>;

    /// Counts all clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;
}
