//! Script extraction from HTML documents.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::resolve::resolve_url;
use crate::utils::parse_selector_with_fallback;

const SCRIPT_SELECTOR_STR: &str = "script";

static SCRIPT_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| parse_selector_with_fallback(SCRIPT_SELECTOR_STR, "script extraction"));

/// Scripts found in one HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedScripts {
    /// Text of every `<script>` without a `src` attribute, in document order.
    pub inline: Vec<String>,
    /// Absolute URL of every `<script src>`, in document order.
    pub external: Vec<String>,
}

impl ExtractedScripts {
    pub fn is_empty(&self) -> bool {
        self.inline.is_empty() && self.external.is_empty()
    }
}

/// Splits the scripts of `html` into inline bodies and external URLs.
///
/// `src` values are resolved against `document_url`. The HTML parser recovers
/// from broken markup, so any input yields a (possibly empty) result.
pub fn extract_scripts(html: &str, document_url: &str) -> ExtractedScripts {
    let Some(selector) = SCRIPT_SELECTOR.as_ref() else {
        return ExtractedScripts::default();
    };

    let document = Html::parse_document(html);
    let mut scripts = ExtractedScripts::default();

    for element in document.select(selector) {
        match element.value().attr("src") {
            Some(src) => scripts.external.push(resolve_url(document_url, src.trim())),
            None => scripts.inline.push(element.text().collect()),
        }
    }

    log::debug!(
        "Found {} inline and {} external scripts in {}",
        scripts.inline.len(),
        scripts.external.len(),
        document_url
    );
    scripts
}
