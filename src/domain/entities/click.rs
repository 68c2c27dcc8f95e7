//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a short code is resolved.
///
/// The client address is never stored, only its one-way hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub id: i64,
    pub url_id: i64,
    pub ip_hash: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        url_id: i64,
        ip_hash: Option<String>,
        referrer: Option<String>,
        user_agent: Option<String>,
        clicked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url_id,
            ip_hash,
            referrer,
            user_agent,
            clicked_at,
        }
    }
}

/// Input data for recording a click.
///
/// `url_id` must reference an existing url; `clicked_at` is set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub url_id: i64,
    pub ip_hash: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}
