//! Typed error enum for the storage layer.
//!
//! Lets callers match on specific failure modes (rejected by the data store,
//! transient DB errors) instead of downcasting opaque boxes. Absent rows are
//! `Ok(None)` at the trait level, not an error.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Transport failure talking to the hosted data store.
    #[error("data store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The hosted data store answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Row data could not be deserialized into domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Database(e) => matches!(e, sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)),
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Rejected { status, .. } => matches!(status, 502 | 503 | 504),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_a_database_error() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::Database(sqlx::Error::RowNotFound)));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_rejected_shows_store_message_and_gateway_statuses_are_transient() {
        let err = StorageError::Rejected { status: 503, message: "upstream busy".to_owned() };
        assert_eq!(err.to_string(), "upstream busy");
        assert!(err.is_transient());
        assert!(!StorageError::Rejected { status: 403, message: String::new() }.is_transient());
    }
}
