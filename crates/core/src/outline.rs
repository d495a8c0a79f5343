use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::UserId;

/// Thesis statement plus ordered supporting points.
///
/// Both fields default when absent so rows written by older clients (or by
/// hand in the data store) still deserialize; the view layer renders the
/// placeholders from [`crate::NO_THESIS_TEXT`] and [`crate::NO_POINTS_TEXT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub thesis: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: Vec<String>,
}

impl OutlineContent {
    #[must_use]
    pub fn new(thesis: impl Into<String>, points: Vec<String>) -> Self {
        Self { thesis: thesis.into(), points }
    }

    /// Whether both a thesis and at least one point are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.thesis.is_empty() && !self.points.is_empty()
    }
}

/// Treats an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A persisted outline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub id: String,
    pub user_id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: OutlineContent,
    pub created_at: DateTime<Utc>,
}

/// Values for an insert.
///
/// Carries no owner: stores stamp `user_id` from the caller's
/// [`crate::AuthSession`], and assign `id` and `created_at` themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOutline {
    pub title: String,
    pub content: OutlineContent,
}

impl NewOutline {
    #[must_use]
    pub fn new(title: impl Into<String>, content: OutlineContent) -> Self {
        Self { title: title.into(), content }
    }
}

/// Cursor for listing a user's outlines newest first.
///
/// `limit: None` fetches every row. `before` restricts the page to rows
/// created strictly earlier than the given instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlinePage {
    pub limit: Option<usize>,
    pub before: Option<DateTime<Utc>>,
}

impl OutlinePage {
    /// Every outline, newest first.
    #[must_use]
    pub const fn all() -> Self {
        Self { limit: None, before: None }
    }

    /// The newest `limit` outlines.
    #[must_use]
    pub fn latest(limit: usize) -> Self {
        Self { limit: Some(limit.min(crate::MAX_QUERY_LIMIT)), before: None }
    }

    /// Effective limit, capped at [`crate::MAX_QUERY_LIMIT`].
    #[must_use]
    pub fn capped_limit(&self) -> Option<usize> {
        self.limit.map(|l| l.min(crate::MAX_QUERY_LIMIT))
    }
}
