//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use outliner_core::{AuthSession, NewOutline, Outline, OutlinePage};

use crate::error::StorageError;
use crate::traits::OutlineStore;

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <crate::PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Hosted(s) => <crate::HostedStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <crate::MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(crate::PgStorage),
    Hosted(crate::HostedStorage),
    Memory(crate::MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }

    pub fn new_hosted(base_url: &str, api_key: String) -> Result<Self, StorageError> {
        Ok(Self::Hosted(crate::HostedStorage::new(base_url, api_key)?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::MemoryStorage::new())
    }

    /// Short backend name for startup logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Hosted(_) => "hosted",
            Self::Memory(_) => "memory",
        }
    }
}

// ── OutlineStore ─────────────────────────────────────────────────

#[async_trait]
impl OutlineStore for StorageBackend {
    async fn insert_outline(
        &self,
        session: &AuthSession,
        outline: NewOutline,
    ) -> Result<Outline, StorageError> {
        dispatch!(self, OutlineStore, insert_outline(session, outline))
    }

    async fn list_outlines(
        &self,
        session: &AuthSession,
        page: OutlinePage,
    ) -> Result<Vec<Outline>, StorageError> {
        dispatch!(self, OutlineStore, list_outlines(session, page))
    }

    async fn get_outline(
        &self,
        session: &AuthSession,
        id: &str,
    ) -> Result<Option<Outline>, StorageError> {
        dispatch!(self, OutlineStore, get_outline(session, id))
    }
}
