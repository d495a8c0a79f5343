//! Storage layer for outliner
//!
//! One `outlines` table, reachable through three backends: PostgreSQL via
//! sqlx, the hosted data store's REST interface, and an in-memory store for
//! local runs and tests.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod backend;
pub mod error;
mod hosted;
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

#[cfg(test)]
mod hosted_tests;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use hosted::HostedStorage;
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::OutlineStore;
