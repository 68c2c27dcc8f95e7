//! PostgreSQL implementation of click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    url_id: i64,
    ip_hash: Option<String>,
    referrer: Option<String>,
    user_agent: Option<String>,
    clicked_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click::new(
            row.id,
            row.url_id,
            row.ip_hash,
            row.referrer,
            row.user_agent,
            row.clicked_at,
        )
    }
}

/// PostgreSQL repository for the `clicks` table.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (url_id, ip_hash, referrer, user_agent)
            VALUES ($1, $2, $3, $4)
            RETURNING id, url_id, ip_hash, referrer, user_agent, clicked_at
            "#,
        )
        .bind(new_click.url_id)
        .bind(new_click.ip_hash)
        .bind(new_click.referrer)
        .bind(new_click.user_agent)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn count_by_url_id(&self, url_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE url_id = $1")
            .bind(url_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn recent_by_url_id(&self, url_id: i64, limit: i64) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, url_id, ip_hash, referrer, user_agent, clicked_at
            FROM clicks
            WHERE url_id = $1
            ORDER BY clicked_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(url_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
