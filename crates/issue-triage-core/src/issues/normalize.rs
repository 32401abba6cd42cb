#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Title normalization
//!
//! Turns a free-form issue title into a readable token stream: punctuation
//! and non-ASCII symbols become separators, everything is lowercased, and
//! function words plus generic tracker vocabulary are dropped.

use std::{collections::HashSet, sync::LazyLock};

/// Shortest token kept by the normalizer.
pub const MIN_TOKEN_LEN: usize = 3;

/// Common English function words and generic issue-tracker vocabulary.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "in", "on", "for", "to", "of", "and", "or", "is", "are", "with", "when",
        "not", "does", "do", "using", "use", "after", "before", "from", "into", "how", "can",
        "cannot", "could", "should", "would", "will", "been", "being", "have", "has", "had",
        "this", "that", "these", "those", "i", "we", "you", "it", "my", "your", "our", "its",
        "their", "add", "request", "feature", "feat", "issue", "problem", "fix", "update", "make",
        "allow", "enable", "get", "set", "new", "works", "work", "way", "need", "want", "support",
        "create", "bug", "error",
    ]
    .into_iter()
    .collect()
});

/// Normalize a title into an ordered sequence of tokens.
///
/// Every character that is not an ASCII letter, ASCII digit or whitespace is
/// replaced by a space, the text is lowercased and split on whitespace, and
/// tokens that are stop words or shorter than [`MIN_TOKEN_LEN`] are dropped.
/// Duplicated tokens are kept in order.
///
/// # Example
///
/// ```
/// use issue_triage_core::normalize_title;
///
/// let tokens = normalize_title("[Bug] OAuth callback: redirect fails on Safari!");
/// assert_eq!(tokens, vec!["oauth", "callback", "redirect", "fails", "safari"]);
/// ```
#[must_use]
pub fn normalize_title(title: &str) -> Vec<String> {
    let cleaned: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}
