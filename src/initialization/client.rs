//! HTTP client initialization.
//!
//! This module provides the function that builds the single HTTP client shared
//! by every fetch and probe in a run.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Builds the default request headers from the configuration.
///
/// The cookie is optional; when present it is sent with every request and
/// marked sensitive so it never appears in debug output.
pub fn build_default_headers(config: &Config) -> Result<HeaderMap, InitializationError> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = config.cookie.as_deref() {
        let mut value =
            HeaderValue::from_str(cookie).map_err(|e| InitializationError::InvalidHeaderError {
                name: "Cookie",
                reason: e.to_string(),
            })?;
        value.set_sensitive(true);
        headers.insert(COOKIE, value);
    }
    Ok(headers)
}

/// Initializes the HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - The fixed browser User-Agent from the configuration
/// - The optional cookie as a default header
/// - TLS certificate validation disabled (targets often run self-signed certs)
/// - A per-request timeout only when `timeout_seconds > 0`
///
/// # Errors
///
/// Returns an `InitializationError` if the cookie is not a valid header value
/// or if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new()
        .user_agent(config.user_agent.clone())
        .default_headers(build_default_headers(config)?)
        .danger_accept_invalid_certs(true);

    if config.timeout_seconds > 0 {
        builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
    }

    Ok(builder.build()?)
}
