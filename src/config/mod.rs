//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (user agent, canonicalization tables, defaults)
//! - CLI option types and parsing
//! - The library-facing [`Config`]

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
