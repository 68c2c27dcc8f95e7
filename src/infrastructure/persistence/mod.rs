//! PostgreSQL repository implementations.
//!
//! Repositories share one [`sqlx::PgPool`] built by [`pool::connect`]. Every
//! statement acquires a connection for its own duration; connections and
//! uncommitted transactions are released on drop, so an early return or a
//! panic cannot leak them.
//!
//! - [`PgUrlRepository`] - Url storage and lookup
//! - [`PgClickRepository`] - Click log and aggregation

pub mod pg_click_repository;
pub mod pg_url_repository;
pub mod pool;

pub use pg_click_repository::PgClickRepository;
pub use pg_url_repository::PgUrlRepository;
