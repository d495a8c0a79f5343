//! Rendered pages behind the session gate.
//!
//! The gateway attaches the session before these run; if it is missing anyway
//! the access-denied view is rendered instead.

use std::sync::Arc;

use axum::Extension;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;
use maud::Markup;
use outliner_core::{AuthSession, OutlinePage};
use serde::Deserialize;

use crate::AppState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct OutlinesPageQuery {
    pub q: Option<String>,
    pub selected: Option<String>,
}

fn render(markup: Markup) -> Response {
    Html(markup.into_string()).into_response()
}

fn denied() -> Response {
    (StatusCode::UNAUTHORIZED, Html(views::access_denied(None).into_string())).into_response()
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    session: Option<Extension<AuthSession>>,
) -> Response {
    let Some(Extension(session)) = session else {
        return denied();
    };
    match state.outlines.recent_outlines(&session).await {
        Ok(recent) => render(views::dashboard(&session, Ok(recent.as_slice()), Utc::now())),
        Err(e) => {
            tracing::error!(user_id = %session.user_id, error = %e, "failed to load recent outlines");
            render(views::dashboard(&session, Err(e.to_string().as_str()), Utc::now()))
        },
    }
}

pub async fn outlines(
    State(state): State<Arc<AppState>>,
    session: Option<Extension<AuthSession>>,
    Query(query): Query<OutlinesPageQuery>,
) -> Response {
    let Some(Extension(session)) = session else {
        return denied();
    };
    let q = query.q.as_deref();
    match state.outlines.list_outlines(&session, q, OutlinePage::all()).await {
        Ok(outlines) => render(views::outline_list(
            &session,
            &outlines,
            q,
            query.selected.as_deref(),
            Utc::now(),
        )),
        Err(e) => {
            tracing::error!(user_id = %session.user_id, error = %e, "failed to load outlines");
            let page = views::load_error(&session, &e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
        },
    }
}

pub async fn new_outline(session: Option<Extension<AuthSession>>) -> Response {
    match session {
        Some(Extension(session)) => render(views::new_outline_form(&session)),
        None => denied(),
    }
}
