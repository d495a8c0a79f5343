//! Typed error enum for the service layer.
//!
//! Unifies storage and LLM failures into a single error type so the HTTP
//! boundary can pick a status and message per failure mode.

use outliner_llm::LlmError;
use outliner_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and LLM failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Data-store read or write failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Text-generation API unreachable or returned nothing usable.
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// The model answered, but the reply split into no thesis or no points.
    #[error("invalid generation: thesis or points missing")]
    InvalidGeneration,

    /// Caller provided invalid input (empty question).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Requested outline does not exist for this user.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying by the user).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::Llm(LlmError::HttpRequest(e)) => e.is_timeout() || e.is_connect(),
            Self::Llm(LlmError::HttpStatus { code, .. }) => matches!(code, 429 | 500 | 502 | 503),
            _ => false,
        }
    }
}
