//! Typed error enum for the auth crate.

use thiserror::Error;

/// Errors talking to the auth service.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("auth service returned {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("invalid login credentials")]
    InvalidCredentials,
    #[error("malformed auth response: {0}")]
    Malformed(#[from] serde_json::Error),
}
