//! Path canonicalization.
//!
//! Mined URLs for the same endpoint differ in template tokens, asset file
//! names and sub-resource depth. These functions fold such variants onto one
//! stable path so that deduplication works on endpoints rather than strings.
//!
//! All functions operate on absolute (rooted) URL paths as produced by
//! [`url::Url::path`] and always return a rooted path.

use crate::config::{ASSET_EXTENSIONS, ID_PLACEHOLDER, ID_REPLACEMENT};

/// Applies every canonicalization step, in order:
///
/// 1. [`fold_id_placeholders`]
/// 2. [`clean_path`]
/// 3. [`collapse_asset_segments`]
/// 4. [`truncate_depth`] when `depth` is `Some`
///
/// Truncation can expose an asset segment (`/a/b.js/c` at depth 2), so the
/// asset collapse runs once more after it.
///
/// The result is a fixed point: canonicalizing it again returns it unchanged.
pub fn canonicalize_path(path: &str, depth: Option<usize>) -> String {
    let folded = fold_id_placeholders(path);
    let cleaned = clean_path(&folded);
    let collapsed = collapse_asset_segments(&cleaned);
    match depth {
        Some(depth) => collapse_asset_segments(&truncate_depth(&collapsed, depth)),
        None => collapsed,
    }
}

/// Replaces every segment equal to `:id` with `1`.
///
/// Only whole segments are replaced; `/a:idx` is left alone.
pub fn fold_id_placeholders(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment == ID_PLACEHOLDER {
                ID_REPLACEMENT
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Lexically cleans a rooted path.
///
/// Empty and `.` segments are removed and `..` removes the preceding segment
/// (never climbing above the root). The trailing slash is dropped.
pub fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    join_rooted(&segments)
}

/// Drops trailing segments that name static assets.
///
/// A script or stylesheet URL is reported as its containing directory, which
/// is usually where the interesting routes live. The check repeats so that
/// `/a/b.js/c.css` collapses all the way to `/a`. Extension matching is
/// case-sensitive.
pub fn collapse_asset_segments(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    while let Some(last) = segments.last() {
        match extension(last) {
            Some(ext) if ASSET_EXTENSIONS.contains(&ext) => {
                segments.pop();
            }
            _ => break,
        }
    }
    join_rooted(&segments)
}

/// Keeps at most `depth` segments after the leading slash.
///
/// A depth of zero disables truncation; callers normally map non-positive
/// limits to `None` before getting here.
pub fn truncate_depth(path: &str, depth: usize) -> String {
    if depth == 0 {
        return path.to_string();
    }
    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .take(depth)
        .collect();
    join_rooted(&segments)
}

/// Extension of a single segment: the text after its last dot.
fn extension(segment: &str) -> Option<&str> {
    segment.rfind('.').map(|idx| &segment[idx + 1..])
}

fn join_rooted(segments: &[&str]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.len() + 1).sum::<usize>() + 1);
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
