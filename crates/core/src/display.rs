//! Formatting helpers shared by the rendered views.

use chrono::{DateTime, Utc};

use crate::{Outline, UNTITLED_OUTLINE};

/// `Mar 1, 2025` style date.
#[must_use]
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Relative age used in list rows: "Just now", "1 hour ago", "N hours ago",
/// then the plain date from one day on. Timestamps in the future count as
/// "Just now".
#[must_use]
pub fn format_time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = now.signed_duration_since(at).num_hours();
    match hours {
        h if h < 1 => "Just now".to_owned(),
        1 => "1 hour ago".to_owned(),
        h if h < 24 => format!("{h} hours ago"),
        _ => format_date(at),
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", text.get(..end).unwrap_or(text)),
        None => text.to_owned(),
    }
}

/// "N points", or "No points" for an empty list.
#[must_use]
pub fn points_label(outline: &Outline) -> String {
    match outline.content.points.len() {
        0 => "No points".to_owned(),
        n => format!("{n} points"),
    }
}

/// The outline's title, or the untitled placeholder when blank.
#[must_use]
pub fn display_title(outline: &Outline) -> &str {
    if outline.title.is_empty() { UNTITLED_OUTLINE } else { &outline.title }
}
