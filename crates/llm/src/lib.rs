//! Text-generation client for outline generation.
//!
//! Talks to an OpenAI-compatible chat completions endpoint and turns the
//! plain-text reply into an [`outliner_core::OutlineContent`].

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod ai_types;
mod client;
mod error;
mod outline;


pub use ai_types::{ChatRequest, Message};
pub use client::{LlmClient, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
pub use error::LlmError;
pub use outline::{build_outline_prompt, parse_outline};
