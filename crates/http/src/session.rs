//! Session lookup from the request's cookie.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;
use outliner_core::AuthSession;

use crate::AppState;
use crate::api_error::ApiError;

/// Resolve the session behind the session cookie, if any.
///
/// An auth service failure counts as no session.
pub async fn resolve_session(state: &AppState, headers: &HeaderMap) -> Option<AuthSession> {
    let jar = CookieJar::from_headers(headers);
    let token = state.cookie.token(jar.get(&state.cookie.name)?)?;
    match state.auth.resolve(token).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "session lookup failed; treating request as signed out");
            None
        },
    }
}

/// Extractor for API handlers: the caller's session or a 401.
///
/// Reuses the session the gateway already attached when there is one.
#[derive(Debug, Clone)]
pub struct Session(pub AuthSession);

impl FromRequestParts<Arc<AppState>> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<AuthSession>() {
            return Ok(Self(session.clone()));
        }
        match resolve_session(state, &parts.headers).await {
            Some(session) => Ok(Self(session)),
            None => {
                tracing::warn!(path = %parts.uri.path(), "unauthenticated API request");
                Err(ApiError::Unauthorized)
            },
        }
    }
}
