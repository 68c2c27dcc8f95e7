//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::application::services::UrlStats;

/// Statistics for a short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,
    /// Newest first, at most 10 entries.
    pub recent_clicks: Vec<ClickInfo>,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            short_code: stats.url.short_code,
            original_url: stats.url.original_url,
            created_at: stats.url.created_at,
            total_clicks: stats.total_clicks,
            recent_clicks: stats
                .recent_clicks
                .into_iter()
                .map(ClickInfo::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Click, Url};
    use serde_json::json;

    #[test]
    fn test_stats_response_shape() {
        let created_at = "2025-01-02T03:04:05Z".parse::<DateTime<Utc>>().unwrap();
        let clicked_at = "2025-01-03T00:00:00Z".parse::<DateTime<Utc>>().unwrap();

        let stats = UrlStats {
            url: Url::new(
                1,
                "https://example.com/a".to_string(),
                "Lc4KTFBE".to_string(),
                created_at,
            ),
            total_clicks: 1,
            recent_clicks: vec![Click::new(
                1,
                1,
                Some("ab".repeat(32)),
                None,
                Some("curl/8.0".to_string()),
                clicked_at,
            )],
        };

        let value = serde_json::to_value(StatsResponse::from(stats)).unwrap();

        assert_eq!(
            value,
            json!({
                "short_code": "Lc4KTFBE",
                "original_url": "https://example.com/a",
                "created_at": "2025-01-02T03:04:05Z",
                "total_clicks": 1,
                "recent_clicks": [
                    {
                        "timestamp": "2025-01-03T00:00:00Z",
                        "referrer": null,
                        "user_agent": "curl/8.0"
                    }
                ]
            })
        );
    }
}
