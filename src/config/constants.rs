//! Configuration constants.
//!
//! This module defines the fixed values used throughout the pipeline: request
//! headers, output defaults and the path canonicalization tables.

/// User-Agent string sent with every outbound request.
///
/// A fixed desktop Chrome string. Some targets serve a stripped page to
/// unknown agents, which would hide the scripts we want to mine.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.108 Safari/537.36";

/// Output file used when persistence is requested without `--output`.
pub const DEFAULT_OUTPUT_FILE: &str = "url.txt";

/// Default number of seeds processed concurrently.
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Path depth value that disables truncation.
pub const DEPTH_UNLIMITED: i64 = -1;

// Path canonicalization
/// Route template token folded to a concrete id (`/user/:id` -> `/user/1`)
pub const ID_PLACEHOLDER: &str = ":id";
/// Replacement value for [`ID_PLACEHOLDER`]
pub const ID_REPLACEMENT: &str = "1";

/// Extensions of static assets. A final path segment carrying one of these is
/// dropped so the containing directory is reported instead.
pub const ASSET_EXTENSIONS: &[&str] = &["js", "css", "svg", "xml", "vue", "ts"];

/// Web resource extensions recognised as bare filenames by the miner.
pub const RESOURCE_EXTENSIONS: &[&str] = &[
    "php", "asp", "aspx", "jsp", "json", "action", "html", "js", "txt", "xml",
];

/// Units used when formatting probed content lengths.
pub const SIZE_UNITS: &str = "KMGTPE";
