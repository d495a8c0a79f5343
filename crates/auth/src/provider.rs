use async_trait::async_trait;
use outliner_core::AuthSession;
use std::collections::HashMap;

use crate::error::AuthError;

/// A fresh session from a credential exchange.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub session: AuthSession,
    /// Token lifetime reported by the auth service, in seconds.
    pub expires_in: u64,
}

/// The external auth service, as seen by the gateway and the sign-in page.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Look up the session behind an access token. An unknown, expired, or
    /// revoked token is `Ok(None)`; `Err` means the service could not answer.
    async fn resolve(&self, access_token: &str) -> Result<Option<AuthSession>, AuthError>;

    /// Exchange email and password for a new session.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignedIn, AuthError>;
}

/// Fixed token and credential tables, for local runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSessions {
    sessions: HashMap<String, AuthSession>,
    credentials: HashMap<(String, String), String>,
}

impl StaticSessions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session reachable through its access token.
    #[must_use]
    pub fn with_session(mut self, session: AuthSession) -> Self {
        self.sessions.insert(session.access_token.clone(), session);
        self
    }

    /// Let `email`/`password` sign in as the session registered under `token`.
    #[must_use]
    pub fn with_credentials(mut self, email: &str, password: &str, token: &str) -> Self {
        self.credentials.insert((email.to_owned(), password.to_owned()), token.to_owned());
        self
    }
}

const STATIC_SESSION_TTL_SECS: u64 = 3600;

#[async_trait]
impl AuthProvider for StaticSessions {
    async fn resolve(&self, access_token: &str) -> Result<Option<AuthSession>, AuthError> {
        Ok(self.sessions.get(access_token).cloned())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignedIn, AuthError> {
        self.credentials
            .get(&(email.to_owned(), password.to_owned()))
            .and_then(|token| self.sessions.get(token))
            .map(|session| SignedIn { session: session.clone(), expires_in: STATIC_SESSION_TTL_SECS })
            .ok_or(AuthError::InvalidCredentials)
    }
}
