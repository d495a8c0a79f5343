//! HTTP server for outliner: JSON API, session gateway, and rendered pages.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
pub mod gateway;
mod handlers;
pub mod session;
mod views;


use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use outliner_auth::{AuthProvider, SessionCookie};
use outliner_service::OutlineService;

/// Shared application state for all HTTP handlers.
///
/// Holds only immutable clients; wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    /// Outline generation and persistence
    pub outlines: Arc<OutlineService>,
    /// Hosted auth service used to resolve session cookies
    pub auth: Arc<dyn AuthProvider>,
    /// Name and flags of the session cookie
    pub cookie: SessionCookie,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::pages::dashboard))
        .route("/health", get(health))
        .route("/outlines", get(handlers::pages::outlines))
        .route("/outlines/new", get(handlers::pages::new_outline))
        .route("/sign-in", get(handlers::auth::sign_in_page).post(handlers::auth::sign_in))
        .route("/sign-out", post(handlers::auth::sign_out))
        .route("/api/generate-outline", post(handlers::outlines::generate_outline))
        .route(
            "/api/outlines",
            get(handlers::outlines::list_outlines).post(handlers::outlines::submit_outline),
        )
        .route("/api/outlines/{id}", get(handlers::outlines::get_outline))
        .layer(middleware::from_fn_with_state(Arc::clone(&state), gateway::session_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
