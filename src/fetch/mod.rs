//! Content fetching.
//!
//! [`ContentFetcher`] issues the GET requests for seed pages and external
//! scripts. Every URL goes to the network at most once per run: the fetcher
//! consults the [`DedupLedger`] before sending anything.

mod ledger;

use std::sync::Arc;

use log::debug;

use crate::error_handling::{update_error_stats, FetchError, InfoType, ProcessingStats};

pub use ledger::DedupLedger;

/// Fetches page and script bodies.
///
/// Cheap to clone; clones share the HTTP client, the ledger and the stats.
/// Request headers (User-Agent, Cookie) and the TLS policy live on the client
/// built by [`crate::initialization::init_client`].
#[derive(Clone)]
pub struct ContentFetcher {
    client: reqwest::Client,
    ledger: Arc<DedupLedger>,
    stats: Arc<ProcessingStats>,
}

impl ContentFetcher {
    pub fn new(
        client: reqwest::Client,
        ledger: Arc<DedupLedger>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            ledger,
            stats,
        }
    }

    pub fn ledger(&self) -> &DedupLedger {
        &self.ledger
    }

    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Fetches `url` and returns its body.
    ///
    /// Returns an empty string when:
    /// - the URL was already claimed in the ledger (nothing is sent)
    /// - the request fails (connection, DNS, TLS, invalid URL)
    /// - the body cannot be read
    ///
    /// Bodies are returned for every status code; a 404 page may still carry
    /// scripts worth mining.
    pub async fn fetch(&self, url: &str) -> String {
        if !self.ledger.claim(url) {
            debug!("Skipping {}: already fetched", url);
            self.stats.increment_info(InfoType::AlreadyFetched);
            return String::new();
        }

        match self.request(url).await {
            Ok(body) => body,
            Err(e) => {
                debug!("Failed to fetch {}: {}", url, e);
                update_error_stats(&self.stats, &e);
                String::new()
            }
        }
    }

    async fn request(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Request)?;
        debug!("GET {} -> {}", url, response.status());
        response.text().await.map_err(FetchError::Body)
    }
}
