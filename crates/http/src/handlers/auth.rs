//! Sign-in and sign-out.

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use outliner_auth::AuthError;
use outliner_core::SIGN_IN_PATH;

use crate::AppState;
use crate::api_types::SignInForm;
use crate::views;

pub async fn sign_in_page() -> Html<String> {
    Html(views::sign_in(None).into_string())
}

/// Exchange the submitted credentials for a session cookie.
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> Response {
    match state.auth.sign_in_with_password(&form.email, &form.password).await {
        Ok(signed_in) => {
            tracing::info!(user_id = %signed_in.session.user_id, "signed in");
            let cookie = state.cookie.issue(signed_in.session.access_token, signed_in.expires_in);
            (jar.add(cookie), Redirect::to("/")).into_response()
        },
        Err(AuthError::InvalidCredentials) => {
            let page = views::sign_in(Some("Invalid email or password"));
            (StatusCode::UNAUTHORIZED, Html(page.into_string())).into_response()
        },
        Err(e) => {
            tracing::error!(error = %e, "sign-in failed");
            let page = views::sign_in(Some("Sign-in is unavailable right now. Try again later."));
            (StatusCode::BAD_GATEWAY, Html(page.into_string())).into_response()
        },
    }
}

pub async fn sign_out(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    (jar.remove(state.cookie.removal()), Redirect::to(SIGN_IN_PATH)).into_response()
}
