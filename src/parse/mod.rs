//! HTML and script parsing.
//!
//! This module turns fetched content into candidate URLs:
//! - [`extract_scripts`] finds inline script bodies and external script URLs
//! - [`mine_urls`] pulls URL and path literals out of script text
//!
//! HTML parsing is done with CSS selectors via the `scraper` crate, literal
//! matching with the `regex` crate.

mod miner;
mod scripts;

// Re-export public API
pub use miner::{mine_scripts, mine_urls};
pub use scripts::{extract_scripts, ExtractedScripts};
