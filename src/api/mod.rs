//! Twitch discovery API module.
//!
//! This module provides:
//! - HTTP client for the collections discovery API
//! - Wire types with validation at the boundary

pub mod client;
pub mod types;

pub use client::{TwitchApi, PAGE_LIMIT};
pub use types::*;
