//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use colored::*;
use log::LevelFilter;
use serde::Serialize;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// One log line in JSON format.
#[derive(Serialize)]
struct JsonRecord<'a> {
    ts: i64,
    level: &'a str,
    target: &'a str,
    msg: String,
}

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats.
///
/// `RUST_LOG` is read first, then `level` replaces its default and its
/// `jsfinder` directive, and the noisy dependencies (`html5ever`, `selectors`,
/// `reqwest`, `hyper`) are pinned to fixed levels. `RUST_LOG` therefore only
/// tunes the remaining modules; use `--log-level` for this crate's output.
///
/// Logs go to stderr so that stdout carries only the extracted URLs.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Debug output from jsfinder, plus HTTP/2 frame logs from h2
/// RUST_LOG=h2=debug jsfinder -u https://example.com --log-level debug
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    apply_level_filters(&mut builder, level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let level = record.level().to_string();
                let line = JsonRecord {
                    ts: chrono::Utc::now().timestamp_millis(),
                    level: &level,
                    target: record.target(),
                    msg: record.args().to_string(),
                };
                writeln!(
                    buf,
                    "{}",
                    serde_json::to_string(&line).unwrap_or_else(|_| "{}".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init so a second initialization (tests) reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Layers the CLI level and the pinned dependency levels over whatever
/// directives `builder` already holds.
fn apply_level_filters(builder: &mut env_logger::Builder, level: LevelFilter) {
    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("jsfinder", level);
}
