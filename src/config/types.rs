//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use strum::VariantNames;
use strum_macros::{EnumString, VariantNames as VariantNamesMacro};
use structopt::StructOpt;

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT, DEPTH_UNLIMITED,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, EnumString, VariantNamesMacro)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, EnumString, VariantNamesMacro)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Mine a single page
/// jsfinder -u https://example.com
///
/// # Mine every page listed in a file, keep two path segments, save to disk
/// jsfinder -f targets.txt -t 2 -a -o endpoints.txt
///
/// # Authenticated pages
/// jsfinder -u https://example.com/app -c "session=abc123"
/// ```
#[derive(Debug, StructOpt)]
#[structopt(
    name = "jsfinder",
    about = "Extracts API endpoints and resource paths from the JavaScript of web pages."
)]
pub struct Opt {
    /// Target page URL
    #[structopt(short = "u", long = "url")]
    pub url: Option<String>,

    /// File with one target URL per line
    #[structopt(short = "f", long = "file", parse(from_os_str))]
    pub file: Option<PathBuf>,

    /// Cookie header sent with every request
    #[structopt(short = "c", long = "cookie")]
    pub cookie: Option<String>,

    /// Output file for saved results
    #[structopt(short = "o", long = "output", parse(from_os_str), default_value = "url.txt")]
    pub output: PathBuf,

    /// Save the extracted URLs to the output file
    #[structopt(short = "a", long = "all")]
    pub all: bool,

    /// Number of path segments to keep (values <= 0 keep the full path)
    #[structopt(short = "t", long = "depth", default_value = "-1", allow_hyphen_values = true)]
    pub depth: i64,

    /// Maximum number of target pages processed at once
    #[structopt(long, default_value = "4")]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds (0 waits indefinitely)
    #[structopt(long, default_value = "0")]
    pub timeout_seconds: u64,

    /// Skip the HEAD request used to display response sizes
    #[structopt(long)]
    pub no_probe: bool,

    /// Log level: error|warn|info|debug|trace
    #[structopt(long, default_value = "warn", possible_values = LogLevel::VARIANTS, case_insensitive = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[structopt(long, default_value = "plain", possible_values = LogFormat::VARIANTS, case_insensitive = true)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use jsfinder::Config;
///
/// let config = Config {
///     url: Some("https://example.com".to_string()),
///     depth: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Single seed page
    pub url: Option<String>,

    /// Newline-delimited seed file
    pub file: Option<PathBuf>,

    /// Cookie header value
    pub cookie: Option<String>,

    /// Where saved results go
    pub output: PathBuf,

    /// Persist results to `output`
    pub save_results: bool,

    /// Path depth limit; values <= 0 disable truncation
    pub depth: i64,

    /// Seeds processed concurrently
    pub max_concurrency: usize,

    /// Per-request timeout in seconds; 0 disables the timeout
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Probe each result with HEAD for display
    pub probe_sizes: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            file: None,
            cookie: None,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            save_results: false,
            depth: DEPTH_UNLIMITED,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: 0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            probe_sizes: true,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            url: opt.url.filter(|u| !u.trim().is_empty()),
            file: opt.file,
            cookie: opt.cookie.filter(|c| !c.is_empty()),
            output: opt.output,
            save_results: opt.all,
            depth: opt.depth,
            max_concurrency: opt.max_concurrency.max(1),
            timeout_seconds: opt.timeout_seconds,
            probe_sizes: !opt.no_probe,
            log_level: opt.log_level,
            log_format: opt.log_format,
            ..Default::default()
        }
    }
}

impl Config {
    /// Depth limit as an optional segment count.
    ///
    /// Returns `None` when truncation is disabled (`depth <= 0`).
    pub fn depth_limit(&self) -> Option<usize> {
        usize::try_from(self.depth).ok().filter(|d| *d > 0)
    }
}
