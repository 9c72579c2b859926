//! Outer application layer.
//!
//! This module provides the pieces around the extraction pipeline: collecting
//! seeds from the CLI inputs, and probing, formatting and saving results.

pub mod report;
pub mod seeds;

// Re-export public API
pub use report::{format_size, probe_content_length, probe_sizes, save_urls};
pub use seeds::{collect_seeds, read_seed_file, SeedSet};
