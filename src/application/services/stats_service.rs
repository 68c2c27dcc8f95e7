//! Click analytics per short code.

use std::sync::Arc;

use crate::domain::entities::{Click, Url};
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::short_code::validate_lookup_code;
use serde_json::json;

/// Number of clicks listed in [`UrlStats::recent_clicks`].
pub const RECENT_CLICKS_LIMIT: i64 = 10;

/// Analytics for one url.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub url: Url,
    pub total_clicks: i64,
    /// Newest first, at most [`RECENT_CLICKS_LIMIT`] entries.
    pub recent_clicks: Vec<Click>,
}

/// Read-only service for click statistics.
pub struct StatsService<U: UrlRepository, C: ClickRepository> {
    url_repository: Arc<U>,
    click_repository: Arc<C>,
}

impl<U: UrlRepository, C: ClickRepository> StatsService<U, C> {
    /// Creates a new statistics service.
    pub fn new(url_repository: Arc<U>, click_repository: Arc<C>) -> Self {
        Self {
            url_repository,
            click_repository,
        }
    }

    /// Returns url metadata, total clicks and the latest clicks for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is longer than 10 characters.
    /// Returns [`AppError::NotFound`] if no url has this code.
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Internal`] on
    /// database errors.
    pub async fn stats(&self, code: &str) -> Result<UrlStats, AppError> {
        validate_lookup_code(code)?;

        let url = self
            .url_repository
            .find_by_short_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        let total_clicks = self.click_repository.count_by_url_id(url.id).await?;
        let recent_clicks = self
            .click_repository
            .recent_by_url_id(url.id, RECENT_CLICKS_LIMIT)
            .await?;

        Ok(UrlStats {
            url,
            total_clicks,
            recent_clicks,
        })
    }

    /// Returns the number of urls and clicks in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Internal`] on
    /// database errors.
    pub async fn totals(&self) -> Result<(i64, i64), AppError> {
        let urls = self.url_repository.count().await?;
        let clicks = self.click_repository.count_all().await?;

        Ok((urls, clicks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockClickRepository, MockUrlRepository};
    use chrono::{Duration, Utc};

    fn create_test_url(id: i64, short_code: &str) -> Url {
        Url::new(
            id,
            "https://example.com/a".to_string(),
            short_code.to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_stats_success() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_clicks = MockClickRepository::new();

        let url = create_test_url(4, "Lc4KTFBE");
        mock_urls
            .expect_find_by_short_code()
            .withf(|code| code == "Lc4KTFBE")
            .times(1)
            .returning(move |_| Ok(Some(url.clone())));

        mock_clicks
            .expect_count_by_url_id()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(12));

        let now = Utc::now();
        mock_clicks
            .expect_recent_by_url_id()
            .withf(|id, limit| *id == 4 && *limit == RECENT_CLICKS_LIMIT)
            .times(1)
            .returning(move |url_id, limit| {
                Ok((0..limit)
                    .map(|i| {
                        Click::new(
                            100 - i,
                            url_id,
                            None,
                            None,
                            Some("TestBot/1.0".to_string()),
                            now - Duration::seconds(i),
                        )
                    })
                    .collect())
            });

        let service = StatsService::new(Arc::new(mock_urls), Arc::new(mock_clicks));

        let stats = service.stats("Lc4KTFBE").await.unwrap();

        assert_eq!(stats.url.short_code, "Lc4KTFBE");
        assert_eq!(stats.total_clicks, 12);
        assert_eq!(stats.recent_clicks.len(), 10);
        assert!(
            stats
                .recent_clicks
                .windows(2)
                .all(|w| w[0].clicked_at >= w[1].clicked_at)
        );
    }

    #[tokio::test]
    async fn test_stats_without_clicks() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_clicks = MockClickRepository::new();

        let url = create_test_url(4, "Lc4KTFBE");
        mock_urls
            .expect_find_by_short_code()
            .times(1)
            .returning(move |_| Ok(Some(url.clone())));
        mock_clicks
            .expect_count_by_url_id()
            .times(1)
            .returning(|_| Ok(0));
        mock_clicks
            .expect_recent_by_url_id()
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = StatsService::new(Arc::new(mock_urls), Arc::new(mock_clicks));

        let stats = service.stats("Lc4KTFBE").await.unwrap();
        assert_eq!(stats.total_clicks, 0);
        assert!(stats.recent_clicks.is_empty());
    }

    #[tokio::test]
    async fn test_stats_not_found() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_clicks = MockClickRepository::new();

        mock_urls
            .expect_find_by_short_code()
            .times(1)
            .returning(|_| Ok(None));
        mock_clicks.expect_count_by_url_id().times(0);
        mock_clicks.expect_recent_by_url_id().times(0);

        let service = StatsService::new(Arc::new(mock_urls), Arc::new(mock_clicks));

        let result = service.stats("missing1").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_stats_rejects_long_code() {
        let mut mock_urls = MockUrlRepository::new();
        mock_urls.expect_find_by_short_code().times(0);

        let service = StatsService::new(Arc::new(mock_urls), Arc::new(MockClickRepository::new()));

        let result = service.stats("this-code-is-too-long").await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_totals() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_clicks = MockClickRepository::new();

        mock_urls.expect_count().times(1).returning(|| Ok(3));
        mock_clicks.expect_count_all().times(1).returning(|| Ok(42));

        let service = StatsService::new(Arc::new(mock_urls), Arc::new(mock_clicks));

        assert_eq!(service.totals().await.unwrap(), (3, 42));
    }
}
