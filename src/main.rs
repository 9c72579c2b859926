//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `jsfinder` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output (colored results with probed sizes)
//! - Optional persistence of the results
//!
//! All extraction functionality is implemented in the library crate.

use anyhow::{Context, Result};
use colored::*;
use std::process;
use structopt::StructOpt;

use jsfinder::app::probe_sizes;
use jsfinder::initialization::{init_client, init_logger_with};
use jsfinder::{format_size, run_extraction, save_urls, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::from_args());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if config.url.is_none() && config.file.is_none() {
        eprintln!("jsfinder: provide a target with -u <url> or -f <file>");
        process::exit(2);
    }

    let report = match run_extraction(&config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("jsfinder error: {:#}", e);
            process::exit(1);
        }
    };

    if config.save_results {
        match save_urls(&report.urls, &config.output).await {
            Ok(()) => eprintln!("Results saved to {}", config.output.display()),
            // Persistence failure does not discard the results printed below
            Err(e) => log::error!("{:#}", e),
        }
    }

    let sizes = if config.probe_sizes {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        probe_sizes(&client, &report.urls, config.max_concurrency).await
    } else {
        vec![0; report.urls.len()]
    };

    println!("Extracted URLs:");
    for (url, size) in report.urls.iter().zip(sizes) {
        println!("{}    [Size:{}]", url.green(), format_size(size));
    }

    eprintln!(
        "{} URL{} from {} seed{} in {:.1}s",
        report.urls.len(),
        if report.urls.len() == 1 { "" } else { "s" },
        report.seeds.len(),
        if report.seeds.len() == 1 { "" } else { "s" },
        report.elapsed_seconds
    );
    Ok(())
}
