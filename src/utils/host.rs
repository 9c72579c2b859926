//! Hostnames as written in the input.
//!
//! `url::Url` lowercases the host of http(s) URLs. Scope matching and the
//! reported URLs keep the host exactly as the page or the operator wrote it.

use url::{Position, Url};

/// Host of `raw` as written, without userinfo or port.
///
/// Handles absolute (`scheme://host/...`) and protocol-relative (`//host/...`)
/// references. Returns `None` when `raw` has no authority or the host is empty.
pub fn raw_host(raw: &str) -> Option<&str> {
    let rest = match raw.split_once("://") {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => raw.strip_prefix("//")?,
    };

    let authority = match rest.find(['/', '\\', '?', '#']) {
        Some(end) => &rest[..end],
        None => rest,
    };
    let host_and_port = match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    };
    let host = if host_and_port.starts_with('[') {
        match host_and_port.find(']') {
            Some(end) => &host_and_port[..=end],
            None => host_and_port,
        }
    } else {
        match host_and_port.rfind(':') {
            Some(colon) => &host_and_port[..colon],
            None => host_and_port,
        }
    };

    (!host.is_empty()).then_some(host)
}

/// Host of `parsed`, spelled the way `raw` spells it.
///
/// The written host is used when it differs from the parsed one only in ASCII
/// case. Anything else the parser normalized (IDNA, IPv6 compression,
/// percent-decoding) keeps the parsed form.
pub fn written_host<'a>(raw: &'a str, parsed: &'a Url) -> Option<&'a str> {
    let parsed_host = parsed.host_str()?;
    match raw_host(raw) {
        Some(host) if host.eq_ignore_ascii_case(parsed_host) => Some(host),
        _ => Some(parsed_host),
    }
}

/// Serializes `url` with `host` in place of its parsed host.
pub fn serialize_with_host(url: &Url, host: &str) -> String {
    format!(
        "{}{}{}",
        &url[..Position::BeforeHost],
        host,
        &url[Position::AfterHost..]
    )
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
