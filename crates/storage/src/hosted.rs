//! Hosted data-store backend speaking the PostgREST dialect.
//!
//! Every request carries the project's public key plus the caller's access
//! token, so the store's row-level policies evaluate against the signed-in
//! user. Filters on `user_id` are still sent explicitly.

use async_trait::async_trait;
use outliner_core::{AuthSession, NewOutline, Outline, OutlinePage};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::traits::OutlineStore;

const OUTLINES_TABLE: &str = "outlines";

#[derive(Clone)]
pub struct HostedStorage {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for HostedStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedStorage")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct InsertRow<'a> {
    user_id: &'a str,
    title: &'a str,
    content: &'a outliner_core::OutlineContent,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HostedStorage {
    pub fn new(base_url: &str, api_key: String) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder().build()?;
        let base_url = base_url.trim_end_matches('/').to_owned();
        tracing::info!(%base_url, "HostedStorage initialized");
        Ok(Self { client, base_url, api_key })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{OUTLINES_TABLE}", self.base_url)
    }

    fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
        session: &AuthSession,
    ) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", session.access_token))
    }

    async fn read_rows(response: reqwest::Response) -> Result<Vec<Outline>, StorageError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(body);
            return Err(StorageError::Rejected { status: status.as_u16(), message });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl OutlineStore for HostedStorage {
    async fn insert_outline(
        &self,
        session: &AuthSession,
        outline: NewOutline,
    ) -> Result<Outline, StorageError> {
        let row = InsertRow {
            user_id: session.user_id.as_str(),
            title: &outline.title,
            content: &outline.content,
        };
        let request = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&[row]);
        let response = self.authorized(request, session).send().await?;
        Self::read_rows(response).await?.into_iter().next().ok_or(StorageError::Rejected {
            status: 200,
            message: "insert returned no rows".to_owned(),
        })
    }

    async fn list_outlines(
        &self,
        session: &AuthSession,
        page: OutlinePage,
    ) -> Result<Vec<Outline>, StorageError> {
        let mut query: Vec<(&str, String)> = vec![
            ("select", "*".to_owned()),
            ("user_id", format!("eq.{}", session.user_id)),
            ("order", "created_at.desc".to_owned()),
        ];
        if let Some(before) = page.before {
            query.push(("created_at", format!("lt.{}", before.to_rfc3339())));
        }
        if let Some(limit) = page.capped_limit() {
            query.push(("limit", limit.to_string()));
        }
        let request = self.client.get(self.table_url()).query(&query);
        let response = self.authorized(request, session).send().await?;
        Self::read_rows(response).await
    }

    async fn get_outline(
        &self,
        session: &AuthSession,
        id: &str,
    ) -> Result<Option<Outline>, StorageError> {
        if uuid::Uuid::parse_str(id).is_err() {
            return Ok(None);
        }
        let query = [
            ("select", "*".to_owned()),
            ("id", format!("eq.{id}")),
            ("user_id", format!("eq.{}", session.user_id)),
            ("limit", "1".to_owned()),
        ];
        let request = self.client.get(self.table_url()).query(&query);
        let response = self.authorized(request, session).send().await?;
        Ok(Self::read_rows(response).await?.into_iter().next())
    }
}
