//! Business logic services for the application layer.

pub mod redirect_service;
pub mod shortening_service;
pub mod stats_service;

pub use redirect_service::RedirectService;
pub use shortening_service::{Shortened, ShorteningService};
pub use stats_service::{RECENT_CLICKS_LIMIT, StatsService, UrlStats};
