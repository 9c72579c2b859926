//! Relative reference resolution.
//!
//! Turns the raw references found in HTML and script text into absolute URLs.
//! Resolution never fails: input that cannot be resolved is passed through
//! untouched and dropped later by the domain filter.

use url::{ParseError, Url};

use crate::utils::{raw_host, serialize_with_host, written_host};

/// Resolves `relative` against `base`.
///
/// - An absolute `relative` (it carries its own scheme) is returned verbatim.
/// - Otherwise it is resolved with RFC 3986 reference resolution against
///   `base`: dot segments are removed, and query/fragment come from `relative`.
///   Protocol-relative references (`//cdn.example.com/x.js`) take the scheme of
///   `base`. The host keeps the case it was written with.
/// - If either string fails to parse, `relative` is returned unchanged.
///
/// # Examples
///
/// ```
/// use jsfinder::resolve_url;
///
/// assert_eq!(resolve_url("https://a.com/x/y", "../z"), "https://a.com/z");
/// assert_eq!(
///     resolve_url("https://a.com", "//cdn.a.com/f.js"),
///     "https://cdn.a.com/f.js"
/// );
/// ```
pub fn resolve_url(base: &str, relative: &str) -> String {
    match Url::parse(relative) {
        Ok(_) => return relative.to_string(),
        Err(ParseError::RelativeUrlWithoutBase) => {}
        Err(e) => {
            log::trace!("Unresolvable reference '{}': {}", relative, e);
            return relative.to_string();
        }
    }

    let base_url = match Url::parse(base) {
        Ok(url) => url,
        Err(e) => {
            log::trace!("Unparseable base '{}': {}", base, e);
            return relative.to_string();
        }
    };

    match base_url.join(relative) {
        Ok(resolved) => {
            // The host keeps the spelling of whichever side supplied it
            let host_source = if raw_host(relative).is_some() { relative } else { base };
            match written_host(host_source, &resolved) {
                Some(host) => serialize_with_host(&resolved, host),
                None => resolved.to_string(),
            }
        }
        Err(e) => {
            log::trace!("Failed to join '{}' onto '{}': {}", relative, base, e);
            relative.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_url;

    #[test]
    fn test_parent_segment() {
        assert_eq!(resolve_url("https://a.com/x/y", "../z"), "https://a.com/z");
    }

    #[test]
    fn test_protocol_relative_takes_base_scheme() {
        assert_eq!(
            resolve_url("https://a.com", "//cdn.a.com/f.js"),
            "https://cdn.a.com/f.js"
        );
        assert_eq!(
            resolve_url("http://a.com/page", "//cdn.a.com/f.js"),
            "http://cdn.a.com/f.js"
        );
    }

    #[test]
    fn test_absolute_reference_is_verbatim() {
        assert_eq!(
            resolve_url("https://a.com/x", "HTTPS://Other.com/A?b=1#c"),
            "HTTPS://Other.com/A?b=1#c"
        );
    }

    #[test]
    fn test_root_relative() {
        assert_eq!(
            resolve_url("http://example.com/app/index.html", "/api/users.json"),
            "http://example.com/api/users.json"
        );
    }

    #[test]
    fn test_document_relative() {
        assert_eq!(
            resolve_url("http://example.com/app/index.html", "./data.json"),
            "http://example.com/app/data.json"
        );
        assert_eq!(
            resolve_url("http://example.com/app/index.html", "login.php?next=1"),
            "http://example.com/app/login.php?next=1"
        );
    }

    #[test]
    fn test_dot_segments_above_root_are_dropped() {
        assert_eq!(
            resolve_url("http://example.com/a", "../../../b"),
            "http://example.com/b"
        );
    }

    #[test]
    fn test_query_and_fragment_come_from_reference() {
        assert_eq!(
            resolve_url("http://example.com/a?x=1#top", "b?y=2#end"),
            "http://example.com/b?y=2#end"
        );
    }

    #[test]
    fn test_malformed_relative_is_unchanged() {
        assert_eq!(resolve_url("https://a.com", "http://[::1"), "http://[::1");
    }

    #[test]
    fn test_malformed_base_is_identity() {
        assert_eq!(resolve_url("not a url", "/api/x"), "/api/x");
        assert_eq!(resolve_url("", "app.js"), "app.js");
    }

    #[test]
    fn test_host_case_comes_from_base() {
        assert_eq!(
            resolve_url("http://Example.com/app/index.html", "/api/x"),
            "http://Example.com/api/x"
        );
        assert_eq!(
            resolve_url("http://Example.com:8080/app/", "../b?c=1"),
            "http://Example.com:8080/b?c=1"
        );
    }

    #[test]
    fn test_host_case_comes_from_protocol_relative_reference() {
        assert_eq!(
            resolve_url("https://example.com/", "//CDN.Example.com/f.js"),
            "https://CDN.Example.com/f.js"
        );
    }

    #[test]
    fn test_base_without_trailing_slash() {
        assert_eq!(
            resolve_url("http://example.com", "app.js"),
            "http://example.com/app.js"
        );
    }
}
