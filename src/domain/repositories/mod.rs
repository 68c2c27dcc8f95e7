//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`. Mocks are generated with `mockall` for
//! unit tests.
//!
//! - [`UrlRepository`] - Url creation and lookup
//! - [`ClickRepository`] - Click recording and aggregation

pub mod click_repository;
pub mod url_repository;

pub use click_repository::ClickRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
