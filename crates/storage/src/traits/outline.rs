use async_trait::async_trait;
use outliner_core::{AuthSession, NewOutline, Outline, OutlinePage};

use crate::error::StorageError;

/// Outline persistence, always scoped to the calling session's user.
///
/// No update or delete: outlines are immutable once inserted.
#[async_trait]
pub trait OutlineStore: Send + Sync {
    /// Insert one outline owned by `session.user_id`. The store assigns `id`
    /// and `created_at`; the stored row is returned.
    async fn insert_outline(
        &self,
        session: &AuthSession,
        outline: NewOutline,
    ) -> Result<Outline, StorageError>;

    /// The session user's outlines, newest first, restricted by `page`.
    async fn list_outlines(
        &self,
        session: &AuthSession,
        page: OutlinePage,
    ) -> Result<Vec<Outline>, StorageError>;

    /// One of the session user's outlines. Another user's id yields `None`.
    async fn get_outline(
        &self,
        session: &AuthSession,
        id: &str,
    ) -> Result<Option<Outline>, StorageError>;
}
