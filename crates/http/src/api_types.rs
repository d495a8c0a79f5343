//! Request and response bodies for the JSON API.

use chrono::{DateTime, Utc};
use outliner_core::OutlinePage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub title: String,
    pub thesis: String,
    pub points: Vec<String>,
}

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub const fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
    pub limit: Option<usize>,
    pub before: Option<DateTime<Utc>>,
}

impl ListQuery {
    pub fn page(&self) -> OutlinePage {
        OutlinePage { limit: self.limit, before: self.before }
    }

    pub fn query(&self) -> Option<&str> {
        self.q.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}
