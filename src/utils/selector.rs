//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector, logging instead of panicking on failure.
///
/// Returns `None` if parsing fails; callers treat that as "nothing matches".
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "script extraction")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Option<Selector> {
    match Selector::parse(selector_str) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::error!(
                "Failed to parse CSS selector '{}' in {}: {}",
                selector_str,
                context,
                e
            );
            None
        }
    }
}
