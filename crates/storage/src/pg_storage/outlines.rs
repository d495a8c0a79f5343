//! OutlineStore implementation for PgStorage.

use super::*;

use crate::traits::OutlineStore;
use async_trait::async_trait;
use outliner_core::{AuthSession, NewOutline, OutlinePage};

#[async_trait]
impl OutlineStore for PgStorage {
    async fn insert_outline(
        &self,
        session: &AuthSession,
        outline: NewOutline,
    ) -> Result<Outline, StorageError> {
        let mut tx = self.scoped_tx(&session.user_id).await?;
        let row = sqlx::query(&format!(
            "INSERT INTO outlines (user_id, title, content)
             VALUES ($1, $2, $3)
             RETURNING {OUTLINE_COLUMNS}"
        ))
        .bind(session.user_id.as_str())
        .bind(&outline.title)
        .bind(serde_json::to_value(&outline.content)?)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        row_to_outline(&row)
    }

    async fn list_outlines(
        &self,
        session: &AuthSession,
        page: OutlinePage,
    ) -> Result<Vec<Outline>, StorageError> {
        let mut tx = self.scoped_tx(&session.user_id).await?;
        // LIMIT NULL is LIMIT ALL in PostgreSQL.
        let rows = sqlx::query(&format!(
            "SELECT {OUTLINE_COLUMNS} FROM outlines
             WHERE user_id = $1 AND ($2::timestamptz IS NULL OR created_at < $2)
             ORDER BY created_at DESC
             LIMIT $3"
        ))
        .bind(session.user_id.as_str())
        .bind(page.before)
        .bind(page.capped_limit().map(usize_to_i64))
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        rows.iter().map(row_to_outline).collect()
    }

    async fn get_outline(
        &self,
        session: &AuthSession,
        id: &str,
    ) -> Result<Option<Outline>, StorageError> {
        let Ok(uuid) = uuid::Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut tx = self.scoped_tx(&session.user_id).await?;
        let row = sqlx::query(&format!(
            "SELECT {OUTLINE_COLUMNS} FROM outlines WHERE id = $1 AND user_id = $2"
        ))
        .bind(uuid)
        .bind(session.user_id.as_str())
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        row.map(|r| row_to_outline(&r)).transpose()
    }
}
