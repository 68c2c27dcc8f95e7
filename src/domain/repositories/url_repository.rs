//! Repository trait for url data access.

use crate::domain::entities::{NewUrl, Url};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened urls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new url in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `original_url` or `short_code` is
    /// already taken. The transaction is rolled back in that case.
    ///
    /// Returns [`AppError::StoreUnavailable`] if no connection could be acquired
    /// and [`AppError::Internal`] on other database errors.
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError>;

    /// Finds a url by the exact string it was created from.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Url>, AppError>;

    /// Finds a url by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Url>, AppError>;

    /// Counts all urls.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips a trivial query to check connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
