//! Shared constants for outliner.
//!
//! Centralizes magic numbers and user-facing strings used by more than one crate.

/// Maximum number of rows a single list query may return when a limit is given.
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Number of outlines shown in the dashboard preview.
pub const RECENT_OUTLINES_PREVIEW: usize = 3;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Path every unauthenticated page request is sent to.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Default name of the cookie carrying the hosted auth access token.
pub const DEFAULT_SESSION_COOKIE: &str = "sb-access-token";

/// Rendered in place of a missing thesis.
pub const NO_THESIS_TEXT: &str = "No thesis provided";

/// Rendered in place of an empty point list.
pub const NO_POINTS_TEXT: &str = "No points added yet";

/// Rendered in place of an empty title.
pub const UNTITLED_OUTLINE: &str = "Untitled Outline";
