//! Heuristic URL mining from script text.
//!
//! This is pattern matching over quoted literals, not a JavaScript parser.
//! It accepts false positives and misses URLs built by concatenation, but it
//! never fails on arbitrary input.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::RESOURCE_EXTENSIONS;
use crate::resolve::resolve_url;

/// Builds the literal-matching pattern.
///
/// A match is a single- or double-quoted literal that is one of:
/// 1. an absolute (`scheme://host.tld...`) or protocol-relative (`//host.tld...`) URL
/// 2. a `/`, `./` or `../` path whose first character is plausible in a path
/// 3. a relative `dir/file.ext` reference, optionally followed by `?...` or `/...`
/// 4. a bare file name with a known web resource extension and optional query
fn url_pattern() -> String {
    format!(
        concat!(
            r#"(?:"|')("#,
            r#"(?:[a-zA-Z]{{1,10}}://|//)[^"'/]{{1,}}\.[a-zA-Z]{{2,}}[^"']*"#,
            r#"|(?:/|\./|\.\./)[^"'><,;| *()%$^/\\\[\]][^"'><,;|()]*"#,
            r#"|[a-zA-Z0-9_\-/]{{1,}}/[a-zA-Z0-9_\-/]{{1,}}\.(?:[a-zA-Z]{{1,4}}|action)(?:[\?|/][^"|']*)?"#,
            r#"|[a-zA-Z0-9_\-]{{1,}}\.(?:{exts})(?:\?[^"|']*)?"#,
            r#")(?:"|')"#,
        ),
        exts = RESOURCE_EXTENSIONS.join("|")
    )
}

static URL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(&url_pattern()) {
    Ok(regex) => Some(regex),
    Err(e) => {
        log::error!("Failed to compile URL mining pattern: {}", e);
        None
    }
});

/// Extracts URL-like literals from `text` and resolves them against `base_url`.
///
/// Matches are returned in the order they appear. Text without matches yields
/// an empty vector.
pub fn mine_urls(text: &str, base_url: &str) -> Vec<String> {
    let Some(regex) = URL_REGEX.as_ref() else {
        return Vec::new();
    };

    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| resolve_url(base_url, m.as_str()))
        .collect()
}

/// Mines several script bodies that share one base URL.
///
/// Each body is matched on its own, so a literal can never span two scripts.
pub fn mine_scripts<S: AsRef<str>>(scripts: &[S], base_url: &str) -> Vec<String> {
    scripts
        .iter()
        .flat_map(|script| mine_urls(script.as_ref(), base_url))
        .collect()
}
