//! Get-or-create of short codes.

use std::sync::Arc;

use crate::domain::entities::{NewUrl, Url};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, ConflictTarget};
use crate::utils::url_validator::validate_url;
use tracing::{debug, info, warn};

/// Result of [`ShorteningService::shorten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub url: Url,
    /// `false` when the url already existed, including the case where a
    /// concurrent request inserted it first.
    pub created: bool,
}

impl Shortened {
    fn created(url: Url) -> Self {
        Self { url, created: true }
    }

    fn existing(url: Url) -> Self {
        Self {
            url,
            created: false,
        }
    }
}

/// Service for shortening URLs.
///
/// Shortening is idempotent: the same URL always yields the same code and at
/// most one row. Database uniqueness constraints are the only synchronization
/// between concurrent requests.
pub struct ShorteningService<U: UrlRepository> {
    url_repository: Arc<U>,
}

impl<U: UrlRepository> ShorteningService<U> {
    /// Creates a new shortening service.
    pub fn new(url_repository: Arc<U>) -> Self {
        Self { url_repository }
    }

    /// Returns the short code for `original_url`, creating it if needed.
    ///
    /// # Flow
    ///
    /// 1. Validate the URL (no store access on failure)
    /// 2. Return the existing row if the URL was shortened before
    /// 3. Otherwise insert the URL with its derived code
    /// 4. On a unique violation, re-query by URL: a row means another request
    ///    won the race; no row means a different URL owns the code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, has an unsupported
    /// scheme or is too long.
    ///
    /// Returns [`AppError::Collision`] if another URL already uses the derived
    /// code. Collisions are not retried.
    ///
    /// Returns [`AppError::Internal`] for any other constraint violation or
    /// database error, and [`AppError::StoreUnavailable`] if no connection
    /// could be acquired.
    pub async fn shorten(&self, original_url: &str) -> Result<Shortened, AppError> {
        validate_url(original_url)?;

        if let Some(existing) = self
            .url_repository
            .find_by_original_url(original_url)
            .await?
        {
            debug!(short_code = %existing.short_code, "URL already shortened");
            return Ok(Shortened::existing(existing));
        }

        let new_url = NewUrl::derived(original_url);
        let short_code = new_url.short_code.clone();

        match self.url_repository.create(new_url).await {
            Ok(url) => {
                metrics::counter!("snaplink_urls_created_total").increment(1);
                info!(short_code = %url.short_code, url_id = url.id, "Short link created");
                Ok(Shortened::created(url))
            }
            Err(AppError::Conflict { target }) => {
                self.resolve_conflict(original_url, short_code, target)
                    .await
            }
            Err(e) => Err(e),
        }
    }

    /// Decides between a benign race and a genuine collision.
    async fn resolve_conflict(
        &self,
        original_url: &str,
        short_code: String,
        target: ConflictTarget,
    ) -> Result<Shortened, AppError> {
        if let Some(existing) = self
            .url_repository
            .find_by_original_url(original_url)
            .await?
        {
            debug!(short_code = %existing.short_code, "Concurrent insert of the same URL");
            return Ok(Shortened::existing(existing));
        }

        match target {
            ConflictTarget::ShortCode => {
                metrics::counter!("snaplink_short_code_collisions_total").increment(1);
                warn!(short_code = %short_code, "Short code collision");
                Err(AppError::Collision { short_code })
            }
            other => Err(AppError::internal(format!(
                "Failed to persist short link: unique violation on {other}"
            ))),
        }
    }
}
