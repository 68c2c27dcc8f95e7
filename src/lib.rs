//! # snaplink
//!
//! A URL shortener with deterministic short codes and click analytics, built
//! with Axum and PostgreSQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Shortening, redirect and stats services
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL repositories and pool
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Short codes
//!
//! A code is the URL-safe base64 encoding of the first six bytes of the URL's
//! SHA-256 digest, always eight characters. Shortening the same URL twice
//! returns the same code; two URLs sharing a code are reported as a collision.
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_PASSWORD="secret"      # or DATABASE_URL="postgres://..."
//! cargo run
//!
//! curl -X POST localhost:3000/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com/a"}'
//! # {"short_code":"Lc4KTFBE"}
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        RedirectService, Shortened, ShorteningService, StatsService, UrlStats,
    };
    pub use crate::domain::click_event::ClickEvent;
    pub use crate::domain::entities::{Click, NewClick, NewUrl, Url};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::short_code::derive_short_code;
}
