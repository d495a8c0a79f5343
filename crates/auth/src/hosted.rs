//! Client for the hosted auth service (GoTrue-style REST API).

use async_trait::async_trait;
use outliner_core::{AuthSession, UserId};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::provider::{AuthProvider, SignedIn};

#[derive(Clone)]
pub struct HostedAuthClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for HostedAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedAuthClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct UserResponse {
    id: String,
    email: Option<String>,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
    user: UserResponse,
}

const fn default_expires_in() -> u64 {
    3600
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "msg", alias = "error_description")]
    message: Option<String>,
}

impl HostedAuthClient {
    pub fn new(base_url: &str, api_key: String) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder().build()?;
        let base_url = base_url.trim_end_matches('/').to_owned();
        tracing::info!(%base_url, "HostedAuthClient initialized");
        Ok(Self { client, base_url, api_key })
    }

    async fn rejection(response: reqwest::Response) -> AuthError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or(body);
        tracing::warn!(status, %message, "auth service rejected request");
        AuthError::Rejected { status, message }
    }
}

#[async_trait]
impl AuthProvider for HostedAuthClient {
    async fn resolve(&self, access_token: &str) -> Result<Option<AuthSession>, AuthError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await?;

        match response.status().as_u16() {
            200..=299 => {
                let user: UserResponse = serde_json::from_str(&response.text().await?)?;
                Ok(Some(AuthSession::new(UserId::new(user.id), user.email, access_token)))
            },
            401 | 403 => {
                tracing::debug!("access token rejected as expired or revoked");
                Ok(None)
            },
            _ => Err(Self::rejection(response).await),
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignedIn, AuthError> {
        let response = self
            .client
            .post(format!("{}/auth/v1/token", self.base_url))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        match response.status().as_u16() {
            200..=299 => {
                let token: TokenResponse = serde_json::from_str(&response.text().await?)?;
                let session = AuthSession::new(
                    UserId::new(token.user.id),
                    token.user.email,
                    token.access_token,
                );
                Ok(SignedIn { session, expires_in: token.expires_in })
            },
            400 | 401 => Err(AuthError::InvalidCredentials),
            _ => Err(Self::rejection(response).await),
        }
    }
}
