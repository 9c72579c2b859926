//! Domain scoping and URL canonicalization.
//!
//! The last stage of the pipeline: drops everything outside the base domains
//! and reduces the rest to one canonical, query-free URL per endpoint.

use log::{trace, warn};
use url::Url;

use crate::canonical::canonicalize_path;
use crate::utils::{serialize_with_host, unique_preserving_order, written_host};

/// Keeps the URLs whose host is one of `base_domains`, canonicalized.
///
/// For every kept URL the path is canonicalized (see
/// [`crate::canonical::canonicalize_path`]), query and fragment are removed
/// and one trailing slash is stripped. Output follows input order with later
/// duplicates removed.
///
/// Host comparison is exact and case-sensitive: `sub.example.com` and
/// `Example.com` are not in scope for `example.com`. An empty `base_domains` keeps nothing.
///
/// Filtering its own output returns the same list.
pub fn filter_urls<I>(urls: I, base_domains: &[String], depth: Option<usize>) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    if base_domains.is_empty() {
        warn!("No base domains in scope; every URL will be discarded");
        return Vec::new();
    }

    unique_preserving_order(
        urls.into_iter()
            .filter_map(|raw| canonicalize_url(&raw, base_domains, depth)),
    )
}

/// Canonicalizes a single URL, or returns `None` if it is out of scope.
///
/// The host is compared and reported as written in `raw`, so `Example.com`
/// and `example.com` are different scopes.
pub fn canonicalize_url(raw: &str, base_domains: &[String], depth: Option<usize>) -> Option<String> {
    let mut parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            trace!("Discarding unparseable URL '{}': {}", raw, e);
            return None;
        }
    };

    let host = written_host(raw, &parsed)?.to_string();
    if !base_domains.iter().any(|domain| *domain == host) {
        trace!("Discarding out-of-scope URL {}", raw);
        return None;
    }

    let path = canonicalize_path(parsed.path(), depth);
    parsed.set_path(&path);
    parsed.set_query(None);
    parsed.set_fragment(None);

    let serialized = serialize_with_host(&parsed, &host);
    Some(match serialized.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => serialized,
    })
}

/// Hostname of `url` as used for scope matching, if it has one.
///
/// The host keeps the case it was written with.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    written_host(url, &parsed).map(str::to_string)
}
