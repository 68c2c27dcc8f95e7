//! Short code resolution with best-effort click logging.

use std::sync::Arc;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::Url;
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::short_code::validate_lookup_code;
use serde_json::json;
use tracing::{debug, warn};

/// Service resolving short codes to their original URLs.
///
/// Every successful resolution records a click. Recording is a side channel:
/// its failures are logged and counted but never change the outcome of
/// [`RedirectService::resolve`].
pub struct RedirectService<U: UrlRepository, C: ClickRepository> {
    url_repository: Arc<U>,
    click_repository: Arc<C>,
}

impl<U: UrlRepository, C: ClickRepository> RedirectService<U, C> {
    /// Creates a new redirect service.
    pub fn new(url_repository: Arc<U>, click_repository: Arc<C>) -> Self {
        Self {
            url_repository,
            click_repository,
        }
    }

    /// Resolves `code` and records the click described by `event`.
    ///
    /// The returned URL is exactly what was submitted at creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is longer than 10 characters.
    /// Returns [`AppError::NotFound`] if no url has this code.
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Internal`] if the
    /// lookup itself fails.
    pub async fn resolve(&self, code: &str, event: ClickEvent) -> Result<Url, AppError> {
        validate_lookup_code(code)?;

        let url = self
            .url_repository
            .find_by_short_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        metrics::counter!("snaplink_url_lookups_total").increment(1);
        debug!(short_code = %url.short_code, url_id = url.id, "Short code resolved");

        self.record_click(&url, event).await;

        Ok(url)
    }

    async fn record_click(&self, url: &Url, event: ClickEvent) {
        match self
            .click_repository
            .record(event.into_new_click(url.id))
            .await
        {
            Ok(_) => {
                metrics::counter!("snaplink_clicks_recorded_total").increment(1);
            }
            Err(e) => {
                metrics::counter!("snaplink_click_failures_total").increment(1);
                warn!(
                    short_code = %url.short_code,
                    url_id = url.id,
                    error = %e,
                    "Failed to record click"
                );
            }
        }
    }
}
