//! Request metadata captured for a click.

use crate::domain::entities::NewClick;
use crate::utils::ip_hash::hash_ip;

/// Client information collected by the redirect handler.
///
/// All fields are untrusted and optional. The address is kept in clear only
/// until [`ClickEvent::into_new_click`] hashes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub ip: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    pub fn new(ip: Option<String>, referrer: Option<&str>, user_agent: Option<&str>) -> Self {
        Self {
            ip,
            referrer: referrer.map(str::to_string),
            user_agent: user_agent.map(str::to_string),
        }
    }

    /// Converts the event into a click row for `url_id`, hashing the address.
    pub fn into_new_click(self, url_id: i64) -> NewClick {
        NewClick {
            url_id,
            ip_hash: self.ip.as_deref().map(hash_ip),
            referrer: self.referrer,
            user_agent: self.user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_hashes_ip() {
        let event = ClickEvent::new(
            Some("127.0.0.1".to_string()),
            Some("https://google.com"),
            Some("Mozilla/5.0"),
        );

        let new_click = event.into_new_click(7);

        assert_eq!(new_click.url_id, 7);
        assert_eq!(
            new_click.ip_hash.as_deref(),
            Some("12ca17b49af2289436f303e0166030a21e525d266e209267433801a8fd4071a0")
        );
        assert_eq!(new_click.referrer.as_deref(), Some("https://google.com"));
        assert_eq!(new_click.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn test_click_event_without_metadata() {
        let new_click = ClickEvent::default().into_new_click(1);

        assert!(new_click.ip_hash.is_none());
        assert!(new_click.referrer.is_none());
        assert!(new_click.user_agent.is_none());
    }

    #[test]
    fn test_click_event_keeps_headers_verbatim() {
        let event = ClickEvent::new(None, Some("  not a url  "), Some("<script>"));
        let new_click = event.into_new_click(1);

        assert_eq!(new_click.referrer.as_deref(), Some("  not a url  "));
        assert_eq!(new_click.user_agent.as_deref(), Some("<script>"));
    }
}
