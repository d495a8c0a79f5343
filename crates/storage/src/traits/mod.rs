//! Storage backend trait abstraction
//!
//! Async domain traits implemented by every backend, so services can be
//! wired to PostgreSQL, the hosted data store, or memory interchangeably.

pub mod outline;

pub use outline::OutlineStore;
