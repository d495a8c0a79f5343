use serde::{Deserialize, Serialize};

/// Identifier of an authenticated principal, as issued by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A resolved session, passed explicitly from the gateway into handlers.
///
/// The access token is forwarded to the hosted data store so its row-level
/// policies see the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: UserId,
    pub email: Option<String>,
    pub access_token: String,
}

impl AuthSession {
    #[must_use]
    pub fn new(user_id: UserId, email: Option<String>, access_token: impl Into<String>) -> Self {
        Self { user_id, email, access_token: access_token.into() }
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("access_token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let session = AuthSession::new(UserId::new("u1"), None, "secret-token");
        let rendered = format!("{session:?}");
        assert!(rendered.contains("u1"));
        assert!(!rendered.contains("secret-token"));
    }

    #[test]
    fn test_user_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&UserId::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
