//! Run-scoped record of URLs already fetched.

use dashmap::DashSet;

/// Concurrent set of URLs that have been selected for fetching.
///
/// A URL is claimed before its request is sent, not after it succeeds, so two
/// tasks racing on the same URL cannot both go to the network. Membership only
/// grows for the lifetime of the ledger.
///
/// One ledger belongs to one run. Independent runs use independent ledgers.
#[derive(Debug, Default)]
pub struct DedupLedger {
    seen: DashSet<String>,
}

impl DedupLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically records `url`.
    ///
    /// Returns `true` if this call inserted it (the caller should fetch) and
    /// `false` if it was already present.
    pub fn claim(&self, url: &str) -> bool {
        self.seen.insert(url.to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
