//! Error categorization.
//!
//! Maps transport failures onto [`ErrorType`] so they can be counted.

use super::stats::ProcessingStats;
use super::types::{ErrorType, FetchError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status codes are never errors here: the fetcher reads bodies regardless of
/// status, so only transport-level failures reach this function.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Records a failed fetch in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, error: &FetchError) {
    let error_type = match error {
        FetchError::Body(e) if !e.is_timeout() => ErrorType::HttpRequestBodyError,
        other => categorize_reqwest_error(other.reqwest_error()),
    };
    stats.increment_error(error_type);
}
