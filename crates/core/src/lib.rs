//! Core types and helpers for outliner
//!
//! This crate contains domain types shared across all other crates.

mod constants;
mod display;
mod env_config;
mod outline;
mod session;
mod title_filter;

pub use constants::*;
pub use display::*;
pub use env_config::env_parse_with_default;
pub use outline::*;
pub use session::*;
pub use title_filter::filter_by_title;
