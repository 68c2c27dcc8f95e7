//! Connection pool construction.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::DatabaseConfig;

/// Opens a bounded pool.
///
/// At least `min_connections` connections are kept open; callers wait up to
/// `acquire_timeout` seconds for a free one before getting
/// [`sqlx::Error::PoolTimedOut`].
///
/// # Errors
///
/// Returns an error if the connection options are invalid or the initial
/// connections cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect_with(config.connect_options()?)
        .await
}
