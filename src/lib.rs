//! jsfinder library: endpoint discovery from page JavaScript
//!
//! This library fetches seed pages, pulls the URL and path literals out of
//! their inline and external scripts, and reduces the results to a
//! deduplicated list of canonical URLs on the seeds' own domains.
//!
//! # Example
//!
//! ```no_run
//! use jsfinder::{run_extraction, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: Some("https://example.com".to_string()),
//!     depth: 3,
//!     ..Default::default()
//! };
//!
//! let report = run_extraction(&config).await?;
//! for url in &report.urls {
//!     println!("{url}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod canonical;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod filter;
pub mod initialization;
pub mod page;
pub mod parse;
pub mod resolve;
mod utils;

// Re-export public API
pub use app::{format_size, save_urls};
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use filter::filter_urls;
pub use resolve::resolve_url;
pub use run::{run_extraction, ExtractionReport};

// Internal run module (contains the top-level pipeline)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use futures::stream::{self, StreamExt};
    use log::{info, warn};

    use crate::app::collect_seeds;
    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::fetch::{ContentFetcher, DedupLedger};
    use crate::filter::filter_urls;
    use crate::initialization::init_client;
    use crate::page::PageProcessor;

    /// Results of an extraction run.
    #[derive(Debug, Clone)]
    pub struct ExtractionReport {
        /// Final URLs: in scope, canonical, unique, in discovery order
        pub urls: Vec<String>,
        /// Seed URLs that were processed
        pub seeds: Vec<String>,
        /// Hostnames that scoped the output
        pub base_domains: Vec<String>,
        /// Distinct URLs sent to the network (pages and scripts)
        pub fetched: usize,
        /// Non-fatal errors recorded during the run
        pub errors: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the extraction pipeline with the provided configuration.
    ///
    /// This is the main entry point for the library:
    /// 1. Collect seeds (and their base domains) from `config.url` / `config.file`
    /// 2. Process the seeds concurrently, up to `config.max_concurrency` at a time
    /// 3. Filter seeds plus mined URLs down to the base domains and canonicalize
    ///
    /// Seeds keep their submission order in the output regardless of which one
    /// finishes first, so identical network responses give identical output.
    ///
    /// Fetch and parse failures are logged and counted, never returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be initialized (for
    /// example, a cookie that is not a valid header value).
    pub async fn run_extraction(config: &Config) -> Result<ExtractionReport> {
        let start_time = Instant::now();

        let stats = Arc::new(ProcessingStats::new());
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let ledger = Arc::new(DedupLedger::new());
        let processor = PageProcessor::new(ContentFetcher::new(
            client,
            Arc::clone(&ledger),
            Arc::clone(&stats),
        ));

        let seeds = collect_seeds(config, &stats).await;
        if seeds.is_empty() {
            warn!("No valid seed URLs; nothing to do");
        }

        let mined: Vec<Vec<String>> = stream::iter(&seeds.urls)
            .map(|seed| processor.process(seed))
            .buffered(config.max_concurrency.max(1))
            .collect()
            .await;

        let candidates = seeds
            .urls
            .iter()
            .cloned()
            .chain(mined.into_iter().flatten());
        let urls = filter_urls(candidates, &seeds.base_domains, config.depth_limit());

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        stats.log_summary();
        info!(
            "Extracted {} URLs from {} seeds in {:.2}s ({} fetches)",
            urls.len(),
            seeds.urls.len(),
            elapsed_seconds,
            ledger.len()
        );

        Ok(ExtractionReport {
            urls,
            seeds: seeds.urls,
            base_domains: seeds.base_domains,
            fetched: ledger.len(),
            errors: stats.total_errors(),
            elapsed_seconds,
        })
    }
}
