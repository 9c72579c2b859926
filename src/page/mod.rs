//! Per-page orchestration.
//!
//! [`PageProcessor::process`] fetches one seed page, splits out its scripts and
//! mines them. External scripts are fetched concurrently; all work for a page
//! is joined before `process` returns, so nothing outlives the call.

use futures::future::join_all;
use log::{debug, info};

use crate::error_handling::InfoType;
use crate::fetch::ContentFetcher;
use crate::parse::{extract_scripts, mine_scripts, mine_urls};

/// Mines the scripts reachable from a seed page.
#[derive(Clone)]
pub struct PageProcessor {
    fetcher: ContentFetcher,
}

impl PageProcessor {
    pub fn new(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &ContentFetcher {
        &self.fetcher
    }

    /// Returns every candidate URL mined from `seed_url` and its scripts.
    ///
    /// The result holds the inline-script matches first, followed by the
    /// matches of each external script in document order. Within a script,
    /// matches keep their textual order. An empty or failed page yields an
    /// empty vector; a failed script only drops that script's matches.
    pub async fn process(&self, seed_url: &str) -> Vec<String> {
        let stats = self.fetcher.stats();

        let body = self.fetcher.fetch(seed_url).await;
        if body.is_empty() {
            debug!("No content for {}", seed_url);
            stats.increment_info(InfoType::EmptyPage);
            return Vec::new();
        }
        stats.increment_info(InfoType::PageFetched);

        let scripts = extract_scripts(&body, seed_url);
        drop(body);

        // External fetches are polled first so their requests are in flight
        // while the inline scripts are mined.
        let external_units = join_all(
            scripts
                .external
                .iter()
                .map(|script_url| self.process_external(script_url)),
        );
        let inline_unit = async { mine_scripts(scripts.inline.as_slice(), seed_url) };
        let (external, inline) = futures::join!(external_units, inline_unit);

        let mut collected = inline;
        for partial in external {
            collected.extend(partial);
        }

        stats.add_info(InfoType::CandidateUrlMined, collected.len());
        info!(
            "Mined {} candidate URLs from {} ({} inline, {} external scripts)",
            collected.len(),
            seed_url,
            scripts.inline.len(),
            scripts.external.len()
        );
        collected
    }

    /// Fetches one external script and mines it against its own URL.
    async fn process_external(&self, script_url: &str) -> Vec<String> {
        let body = self.fetcher.fetch(script_url).await;
        if body.is_empty() {
            return Vec::new();
        }
        self.fetcher.stats().increment_info(InfoType::ScriptFetched);
        let urls = mine_urls(&body, script_url);
        debug!("Mined {} candidate URLs from {}", urls.len(), script_url);
        urls
    }
}
