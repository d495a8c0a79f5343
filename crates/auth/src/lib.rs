//! Session handling for outliner.
//!
//! Resolves the access token carried in the session cookie into an
//! [`outliner_core::AuthSession`] through the hosted auth service, and
//! exchanges email/password credentials for a new token.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod cookie;
mod error;
mod hosted;
mod provider;


pub use cookie::SessionCookie;
pub use error::AuthError;
pub use hosted::HostedAuthClient;
pub use provider::{AuthProvider, SignedIn, StaticSessions};
