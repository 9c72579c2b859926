//! Error type definitions.
//!
//! This module defines the error and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured header value cannot be sent (e.g. a cookie with control characters).
    #[error("Invalid header value for {name}: {reason}")]
    InvalidHeaderError { name: &'static str, reason: String },
}

/// A single failed fetch.
///
/// Never leaves the fetch module: the fetcher records it and degrades to an
/// empty body.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(#[source] ReqwestError),

    /// The response arrived but its body could not be read.
    #[error("failed to read body: {0}")]
    Body(#[source] ReqwestError),
}

impl FetchError {
    /// The underlying transport error.
    pub fn reqwest_error(&self) -> &ReqwestError {
        match self {
            FetchError::Request(e) | FetchError::Body(e) => e,
        }
    }
}

/// Types of errors that can occur during a run.
///
/// None of these are fatal: each one means a single item produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Input errors
    InvalidSeedUrl,
    SeedFileUnreadable,
}

/// Types of informational metrics tracked during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    PageFetched,          // A seed page returned a body
    ScriptFetched,        // An external script returned a body
    AlreadyFetched,       // Fetch skipped because the ledger already held the URL
    EmptyPage,            // Seed produced no body (failure or already fetched)
    CandidateUrlMined,    // One URL-like literal matched in script text
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::InvalidSeedUrl => "Invalid seed URL",
            ErrorType::SeedFileUnreadable => "Seed file unreadable",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::PageFetched => "Pages fetched",
            InfoType::ScriptFetched => "External scripts fetched",
            InfoType::AlreadyFetched => "Fetches skipped (already fetched)",
            InfoType::EmptyPage => "Pages without content",
            InfoType::CandidateUrlMined => "Candidate URLs mined",
        }
    }
}
