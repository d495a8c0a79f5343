//! Service layer for outliner
//!
//! Centralizes business logic between HTTP handlers and storage/llm.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]

mod error;
mod outline_service;

pub use error::ServiceError;
pub use outline_service::OutlineService;
