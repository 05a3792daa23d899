//! Title normalization for cross-store deduplication.
//!
//! Store exports spell the same game differently:
//! ```text
//! Half-Life™: Source      (GOG)
//! Half Life: Source       (Steam)
//!   half   life  source   (hand-typed)
//! ```
//! All of these collapse to the same key, `half life source`. The key is only
//! ever used for grouping; it is never displayed.

/// Trademark-style glyphs dropped outright.
const TRADEMARK_GLYPHS: &[char] = &['\u{2122}', '\u{00AE}', '\u{00A9}'];

/// Punctuation that separates words, so `Half-Life` keys like `Half Life`.
const WORD_SEPARATORS: &[char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '_', '/', '\\',
];

/// Canonicalize a display title into its comparison key.
///
/// Trademark glyphs are removed, dash/slash separators become spaces, every
/// other non-alphanumeric character is removed, the result is lower-cased and
/// whitespace runs collapse to single spaces. Total and pure: an empty title
/// yields an empty key.
///
/// # Examples
///
/// ```
/// use gamelist_catalog::title::normalize_title;
///
/// assert_eq!(normalize_title("Portal 2™"), "portal 2");
/// assert_eq!(normalize_title("Half-Life™: Source"), "half life source");
/// assert_eq!(normalize_title("  half   life  source "), "half life source");
/// assert_eq!(normalize_title(""), "");
/// ```
pub fn normalize_title(title: &str) -> String {
    let mut cleaned = String::with_capacity(title.len());

    for ch in title.chars() {
        if TRADEMARK_GLYPHS.contains(&ch) {
            continue;
        }
        if WORD_SEPARATORS.contains(&ch) {
            cleaned.push(' ');
        } else if ch.is_alphanumeric() || ch.is_whitespace() {
            cleaned.push(ch);
        }
    }

    // Whole-string lowering so context-dependent mappings (final sigma) match.
    cleaned
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tidy a store title for display: trademark glyphs removed, outer and
/// repeated whitespace collapsed. Case and punctuation are kept.
///
/// ```
/// use gamelist_catalog::title::display_title;
///
/// assert_eq!(display_title("Portal 2\u{2122}"), "Portal 2");
/// assert_eq!(display_title("  Half-Life\u{00AE}:  Source "), "Half-Life: Source");
/// ```
pub fn display_title(title: &str) -> String {
    title
        .split(|c: char| TRADEMARK_GLYPHS.contains(&c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/title_tests.rs"]
mod tests;
