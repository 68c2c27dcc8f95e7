//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// Summary of one click.
///
/// Absent headers are serialized as `null`. The address hash is not exposed.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.clicked_at,
            referrer: click.referrer,
            user_agent: click.user_agent,
        }
    }
}
