//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and enforce input rules. They depend
//! only on repository traits, so unit tests run against `mockall` mocks.
//!
//! # Available Services
//!
//! - [`services::shortening_service::ShorteningService`] - Get-or-create of short codes
//! - [`services::redirect_service::RedirectService`] - Code resolution with click logging
//! - [`services::stats_service::StatsService`] - Click analytics per short code

pub mod services;
