//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The HTTP client (headers, TLS policy, timeout)
//! - The logger

mod client;
mod logger;

// Re-export public API
pub use client::{build_default_headers, init_client};
pub use logger::init_logger_with;
