//! PostgreSQL storage backend using sqlx.

mod outlines;

use crate::error::StorageError;
use chrono::{DateTime, Utc};
use outliner_core::{
    Outline, OutlineContent, UserId, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Row, Transaction};

use super::pg_migrations::run_pg_migrations;

pub(crate) const OUTLINE_COLUMNS: &str = "id::text AS id, user_id, title, content, created_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    /// Begin a transaction whose row-level security context is `user_id`.
    async fn scoped_tx(&self, user_id: &UserId) -> Result<Transaction<'_, Postgres>, StorageError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT set_config('app.user_id', $1, true)")
            .bind(user_id.as_str())
            .execute(&mut *tx)
            .await?;
        Ok(tx)
    }
}

/// Deserialize `content`, tolerating rows whose JSON lacks either field.
pub(crate) fn parse_content(id: &str, val: serde_json::Value) -> OutlineContent {
    serde_json::from_value(val).unwrap_or_else(|e| {
        tracing::warn!(outline_id = %id, error = %e, "malformed outline content in DB, using empty");
        OutlineContent::default()
    })
}

pub(crate) fn row_to_outline(row: &sqlx::postgres::PgRow) -> Result<Outline, StorageError> {
    let id: String = row.try_get("id")?;
    let content: Option<serde_json::Value> = row.try_get("content")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Outline {
        content: content.map(|c| parse_content(&id, c)).unwrap_or_default(),
        user_id: UserId::new(row.try_get::<String, _>("user_id")?),
        title: row.try_get::<Option<String>, _>("title")?.unwrap_or_default(),
        created_at,
        id,
    })
}

/// Convert `usize` to `i64` for SQL LIMIT binds.
/// Saturates to `i64::MAX` on overflow (only possible on 128-bit targets).
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_tolerates_partial_json() {
        let content = parse_content("x", serde_json::json!({"points": ["a"]}));
        assert_eq!(content.thesis, "");
        assert_eq!(content.points, vec!["a".to_owned()]);
    }

    #[test]
    fn test_parse_content_wrong_shape_is_empty() {
        let content = parse_content("x", serde_json::json!("just a string"));
        assert_eq!(content, OutlineContent::default());
    }

    #[test]
    fn test_usize_to_i64() {
        assert_eq!(usize_to_i64(3), 3);
    }
}
