//! Seed collection.
//!
//! Gathers the seed pages from the `--url` flag and the seed file, and derives
//! the base domains that scope the final output.

use std::path::Path;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::error_handling::{ErrorType, ProcessingStats};
use crate::filter::host_of;
use crate::utils::unique_preserving_order;

/// Seed pages and the domains they put in scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    /// Seed URLs, deduplicated, in the order given.
    pub urls: Vec<String>,
    /// Hostnames of the seeds, deduplicated.
    pub base_domains: Vec<String>,
}

impl SeedSet {
    fn push(&mut self, url: String, host: String) {
        self.urls.push(url);
        self.base_domains.push(host);
    }

    fn dedup(self) -> Self {
        Self {
            urls: unique_preserving_order(self.urls),
            base_domains: unique_preserving_order(self.base_domains),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Collects the seeds from the configuration.
///
/// The `--url` seed comes first, followed by the seed file lines in order.
/// Invalid entries are skipped with a warning; an unreadable seed file
/// contributes no seeds.
pub async fn collect_seeds(config: &Config, stats: &ProcessingStats) -> SeedSet {
    let mut seeds = SeedSet::default();

    if let Some(url) = config.url.as_deref() {
        let url = url.trim();
        match host_of(url) {
            Some(host) => seeds.push(url.to_string(), host),
            None => {
                warn!("Skipping seed without a host: {}", url);
                stats.increment_error(ErrorType::InvalidSeedUrl);
            }
        }
    }

    if let Some(path) = config.file.as_deref() {
        let from_file = read_seed_file(path, stats).await;
        seeds.urls.extend(from_file.urls);
        seeds.base_domains.extend(from_file.base_domains);
    }

    let seeds = seeds.dedup();
    info!(
        "Collected {} seed URLs across {} base domains",
        seeds.urls.len(),
        seeds.base_domains.len()
    );
    seeds
}

/// Reads one seed URL per line.
///
/// Lines are trimmed; blank lines and `#` comments are ignored. Lines that do
/// not parse as an absolute URL with a host are skipped.
pub async fn read_seed_file(path: &Path, stats: &ProcessingStats) -> SeedSet {
    let mut seeds = SeedSet::default();

    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            warn!("Failed to open seed file {}: {}", path.display(), e);
            stats.increment_error(ErrorType::SeedFileUnreadable);
            return seeds;
        }
    };

    let mut lines = BufReader::new(file).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Stopped reading seed file {}: {}", path.display(), e);
                stats.increment_error(ErrorType::SeedFileUnreadable);
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match host_of(trimmed) {
            Some(host) => seeds.push(trimmed.to_string(), host),
            None => {
                warn!("Skipping invalid seed line: {}", trimmed);
                stats.increment_error(ErrorType::InvalidSeedUrl);
            }
        }
    }

    seeds
}
