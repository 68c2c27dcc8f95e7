//! PostgreSQL implementation of url repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, Url};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for Url {
    fn from(row: UrlRow) -> Self {
        Url::new(row.id, row.original_url, row.short_code, row.created_at)
    }
}

/// PostgreSQL repository for the `urls` table.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_code)
            VALUES ($1, $2)
            RETURNING id, original_url, short_code, created_at
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.short_code)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(row) => {
                tx.commit().await?;
                Ok(row.into())
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Rollback after failed insert failed");
                }
                Err(e.into())
            }
        }
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Url>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE md5(original_url) = md5($1) AND original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Url::from))
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Url>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Url::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
