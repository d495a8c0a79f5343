//! Typed API error for HTTP handlers.
//!
//! Converts service failures into `{"error": message}` bodies with a status
//! code. Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use outliner_service::ServiceError;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to generate outline from Gemini API";
pub const INVALID_GENERATION_MESSAGE: &str = "Invalid outline generated";
pub const SAVE_FAILURE_MESSAGE: &str = "Failed to save outline";
pub const GENERATION_FAILURE_MESSAGE: &str = "Failed to generate outline";

/// Failure modes visible to API callers.
///
/// Converts to a JSON response: `{"error": "message"}`.
#[derive(Debug)]
pub enum ApiError {
    /// 401: no resolvable session.
    Unauthorized,
    /// 400: caller input rejected before any external call.
    BadRequest(String),
    /// 404: no such outline for this user.
    NotFound(String),
    /// 500: the text-generation API produced nothing usable.
    UpstreamFailure,
    /// 500: the model answered but the reply had no thesis or no points.
    InvalidGeneration,
    /// 500: the data store refused or failed the write.
    PersistenceFailure(String),
    /// 500: anything else. The message is surfaced when there is one.
    Unknown(Option<String>),
}

impl ApiError {
    /// Mapping for the generation endpoint, where a failed insert reports a
    /// fixed message instead of the store's.
    #[must_use]
    pub fn from_generation(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(e) => {
                tracing::error!(error = %e, transient = e.is_transient(), "generated outline not saved");
                Self::PersistenceFailure(SAVE_FAILURE_MESSAGE.to_owned())
            },
            other => Self::from(other),
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UpstreamFailure
            | Self::InvalidGeneration
            | Self::PersistenceFailure(_)
            | Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized => UNAUTHORIZED_MESSAGE,
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::PersistenceFailure(msg) => msg,
            Self::UpstreamFailure => UPSTREAM_FAILURE_MESSAGE,
            Self::InvalidGeneration => INVALID_GENERATION_MESSAGE,
            Self::Unknown(msg) => msg.as_deref().unwrap_or(GENERATION_FAILURE_MESSAGE),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({"error": self.message()});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotFound(what) => Self::NotFound(format!("{what} not found")),
            ServiceError::InvalidGeneration => Self::InvalidGeneration,
            ServiceError::Llm(ref e) => {
                tracing::error!(error = %e, transient = err.is_transient(), "text generation failed");
                Self::UpstreamFailure
            },
            ServiceError::Storage(e) => {
                tracing::error!(error = %e, transient = e.is_transient(), "data store call failed");
                Self::PersistenceFailure(e.to_string())
            },
        }
    }
}
