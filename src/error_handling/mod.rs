//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Processing statistics tracking (errors and info metrics)
//!
//! Nothing in the extraction pipeline is fatal. Failures are categorized,
//! counted and logged, and the affected item yields no output.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ErrorType, FetchError, InfoType, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestConnectError);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestConnectError), 1);

        stats.increment_info(InfoType::AlreadyFetched);
        stats.add_info(InfoType::CandidateUrlMined, 3);
        assert_eq!(stats.get_info_count(InfoType::AlreadyFetched), 1);
        assert_eq!(stats.get_info_count(InfoType::CandidateUrlMined), 3);
    }

    #[test]
    fn test_total_errors() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::InvalidSeedUrl);
        stats.increment_error(ErrorType::InvalidSeedUrl);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        assert_eq!(stats.total_errors(), 3);
    }

    #[test]
    fn test_concurrent_increments() {
        let stats = std::sync::Arc::new(ProcessingStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = stats.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        stats.increment_info(InfoType::ScriptFetched);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert_eq!(stats.get_info_count(InfoType::ScriptFetched), 800);
    }

    #[test]
    fn test_error_type_display() {
        assert_eq!(ErrorType::InvalidSeedUrl.to_string(), "Invalid seed URL");
        assert_eq!(
            ErrorType::HttpRequestConnectError.to_string(),
            "HTTP request connect error"
        );
    }

    #[tokio::test]
    async fn test_connect_failure_is_categorized() {
        // Port 9 (discard) on localhost is not listening in test environments.
        let client = reqwest::Client::new();
        let err = client
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .expect_err("nothing listens on port 9");
        assert_eq!(
            categorize_reqwest_error(&err),
            ErrorType::HttpRequestConnectError
        );

        let stats = ProcessingStats::new();
        update_error_stats(&stats, &FetchError::Request(err));
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestConnectError), 1);
    }
}
