//! Result reporting: size probing, formatting and persistence.

use std::path::Path;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use reqwest::header::CONTENT_LENGTH;
use tokio::io::AsyncWriteExt;

use crate::config::SIZE_UNITS;

/// Returns the `Content-Length` a HEAD request reports for `url`.
///
/// Any failure (transport error, missing or malformed header) yields 0, which
/// [`format_size`] renders as `Unknown`. The client carries the same
/// User-Agent, cookie and TLS policy as the fetcher.
pub async fn probe_content_length(client: &reqwest::Client, url: &str) -> u64 {
    match client.head(url).send().await {
        Ok(response) => response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0),
        Err(e) => {
            log::debug!("HEAD {} failed: {}", url, e);
            0
        }
    }
}

/// Probes every URL, at most `concurrency` at a time. Sizes keep URL order.
pub async fn probe_sizes(client: &reqwest::Client, urls: &[String], concurrency: usize) -> Vec<u64> {
    stream::iter(urls)
        .map(|url| probe_content_length(client, url))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Formats a byte count for display.
///
/// `0` means unknown. Sizes below 1024 are shown in bytes, larger ones with
/// one decimal and a binary unit prefix.
///
/// ```
/// use jsfinder::format_size;
///
/// assert_eq!(format_size(0), "Unknown");
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
pub fn format_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    if size == 0 {
        return "Unknown".to_string();
    }
    if size < UNIT {
        return format!("{} B", size);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let unit = SIZE_UNITS.chars().nth(exp).unwrap_or('E');
    format!("{:.1} {}B", size as f64 / div as f64, unit)
}

/// Writes `urls` to `path`, one per line, replacing any existing content.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub async fn save_urls(urls: &[String], path: &Path) -> Result<()> {
    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = tokio::io::BufWriter::new(file);
    for url in urls {
        writer
            .write_all(url.as_bytes())
            .await
            .with_context(|| format!("Failed to write URL to {}", path.display()))?;
        writer
            .write_all(b"\n")
            .await
            .with_context(|| format!("Failed to write URL to {}", path.display()))?;
    }
    writer
        .flush()
        .await
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "Unknown");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(10 * 1024 + 512), "10.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
        assert_eq!(format_size(u64::MAX), "16.0 EB");
    }

    #[tokio::test]
    async fn test_save_urls_overwrites() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("url.txt");
        std::fs::write(&path, "stale\nstale\nstale\n").expect("seed file");

        let urls = vec![
            "http://example.com".to_string(),
            "http://example.com/api".to_string(),
        ];
        save_urls(&urls, &path).await.expect("save");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "http://example.com\nhttp://example.com/api\n");
    }

    #[tokio::test]
    async fn test_save_urls_reports_unwritable_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("no_such_dir").join("url.txt");
        assert!(save_urls(&[], &path).await.is_err());
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_save_urls_reports_write_failure() {
        // Larger than the writer's buffer, so the write reaches the device
        let long_url = format!("http://example.com/{}", "a".repeat(16 * 1024));
        let err = save_urls(&[long_url], Path::new("/dev/full"))
            .await
            .expect_err("/dev/full rejects writes");
        assert!(err.to_string().starts_with("Failed to write URL to /dev/full"));
    }

    #[tokio::test]
    async fn test_probe_content_length() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("HEAD", "/big"))
                .respond_with(status_code(200).insert_header("Content-Length", "2048")),
        );
        let client = reqwest::Client::new();
        assert_eq!(
            probe_content_length(&client, &server.url("/big").to_string()).await,
            2048
        );
    }

    #[tokio::test]
    async fn test_probe_failure_is_unknown() {
        let client = reqwest::Client::new();
        assert_eq!(probe_content_length(&client, "http://127.0.0.1:9/").await, 0);
    }
}
