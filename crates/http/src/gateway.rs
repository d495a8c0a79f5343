//! Session gate in front of every page.
//!
//! Pages need a signed-in user except for the auth pages themselves. API
//! routes, static assets, and the health probe bypass the gate; the API
//! enforces sessions per endpoint through [`crate::session::Session`].

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use outliner_core::SIGN_IN_PATH;

use crate::AppState;
use crate::session::resolve_session;

const PUBLIC_PREFIXES: [&str; 4] = [SIGN_IN_PATH, "/sign-up", "/forgot-password", "/auth/callback"];
const EXCLUDED_PREFIXES: [&str; 2] = ["/api/", "/static/"];
const EXCLUDED_PATHS: [&str; 3] = ["/api", "/health", "/favicon.ico"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without a session.
    Public,
    /// Requires a session; redirected to sign-in otherwise.
    Protected,
    /// Never inspected by the gate.
    Excluded,
}

#[must_use]
pub fn classify(path: &str) -> RouteClass {
    if EXCLUDED_PATHS.contains(&path) || EXCLUDED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        RouteClass::Excluded
    } else if PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p)) {
        RouteClass::Public
    } else {
        RouteClass::Protected
    }
}

pub async fn session_gate(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    if classify(request.uri().path()) != RouteClass::Protected {
        return next.run(request).await;
    }
    match resolve_session(&state, request.headers()).await {
        Some(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        },
        None => {
            tracing::debug!(path = %request.uri().path(), "no session, redirecting to sign-in");
            Redirect::to(SIGN_IN_PATH).into_response()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_pages_are_public() {
        assert_eq!(classify("/sign-in"), RouteClass::Public);
        assert_eq!(classify("/sign-up/verify"), RouteClass::Public);
        assert_eq!(classify("/forgot-password"), RouteClass::Public);
        assert_eq!(classify("/auth/callback?code=1"), RouteClass::Public);
    }

    #[test]
    fn test_pages_are_protected() {
        assert_eq!(classify("/"), RouteClass::Protected);
        assert_eq!(classify("/outlines"), RouteClass::Protected);
        assert_eq!(classify("/outlines/new"), RouteClass::Protected);
        assert_eq!(classify("/sign-out"), RouteClass::Protected);
    }

    #[test]
    fn test_api_assets_and_health_bypass_gate() {
        assert_eq!(classify("/api/generate-outline"), RouteClass::Excluded);
        assert_eq!(classify("/static/app.css"), RouteClass::Excluded);
        assert_eq!(classify("/favicon.ico"), RouteClass::Excluded);
        assert_eq!(classify("/health"), RouteClass::Excluded);
    }
}
