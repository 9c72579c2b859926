//! Small shared helpers.
//!
//! This module provides:
//! - Order-preserving deduplication
//! - CSS selector parsing utilities
//! - Hostnames as written, for case-preserving scope checks

mod host;
mod selector;

use std::collections::HashSet;

pub use host::{raw_host, serialize_with_host, written_host};
pub use selector::parse_selector_with_fallback;

/// Removes duplicates, keeping the first occurrence of each item in place.
pub fn unique_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
