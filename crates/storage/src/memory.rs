//! Process-local outline store for development runs and tests.

use async_trait::async_trait;
use chrono::Utc;
use outliner_core::{AuthSession, NewOutline, Outline, OutlinePage};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::OutlineStore;

/// Rows kept in insertion order; listing walks them newest first.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    rows: Arc<RwLock<Vec<Outline>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rows across all users.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl OutlineStore for MemoryStorage {
    async fn insert_outline(
        &self,
        session: &AuthSession,
        outline: NewOutline,
    ) -> Result<Outline, StorageError> {
        let row = Outline {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: session.user_id.clone(),
            title: outline.title,
            content: outline.content,
            created_at: Utc::now(),
        };
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn list_outlines(
        &self,
        session: &AuthSession,
        page: OutlinePage,
    ) -> Result<Vec<Outline>, StorageError> {
        let rows = self.rows.read().await;
        let owned = rows
            .iter()
            .rev()
            .filter(|o| o.user_id == session.user_id)
            .filter(|o| page.before.is_none_or(|before| o.created_at < before))
            .cloned();
        Ok(match page.capped_limit() {
            Some(limit) => owned.take(limit).collect(),
            None => owned.collect(),
        })
    }

    async fn get_outline(
        &self,
        session: &AuthSession,
        id: &str,
    ) -> Result<Option<Outline>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|o| o.id == id && o.user_id == session.user_id).cloned())
    }
}
