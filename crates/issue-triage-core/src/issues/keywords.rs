#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Keyword extraction and the inverted keyword index
//!
//! Keywords are the normalized tokens specific enough to signal that two
//! titles talk about the same thing. The index maps each keyword to the
//! issues whose titles contain it, so candidate pairs are only generated
//! inside a shared-keyword bucket.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    sync::LazyLock,
};

use super::normalize::normalize_title;

/// Shortest token kept as a keyword.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Domain-generic words that match too broadly to be discriminating.
pub static BROAD_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "error", "type", "types", "next", "auth", "user", "users", "data", "login", "client",
        "server", "plugin", "plugins", "page", "file", "files", "based", "better", "working",
        "doesn", "getting", "trying", "returns", "return", "field", "fields", "when", "custom",
        "option", "options", "session", "token", "tokens", "only", "still", "also", "just",
        "some", "same", "being", "used", "after", "there", "like", "email", "admin", "without",
        "default", "fails", "failed", "schema", "endpoint", "endpoints", "issue", "issues",
        "method", "current", "setting", "ability", "signed", "logged", "signing", "logging",
        "account", "accounts", "password", "verification", "multiple", "provider", "google",
        "social", "signin",
    ]
    .into_iter()
    .collect()
});

/// Ordered set of keywords for one title.
pub type KeywordSet = BTreeSet<String>;

/// Extract the discriminating keywords of a title.
///
/// Applies [`normalize_title`], then drops [`BROAD_WORDS`] and tokens shorter
/// than [`MIN_KEYWORD_LEN`]. Titles without discriminating terms yield an
/// empty set and never match anything.
///
/// # Example
///
/// ```
/// use issue_triage_core::extract_keywords;
///
/// let keywords = extract_keywords("Google login fails with custom callback URL");
/// assert_eq!(keywords.into_iter().collect::<Vec<_>>(), vec!["callback"]);
/// ```
#[must_use]
pub fn extract_keywords(title: &str) -> KeywordSet {
    normalize_title(title)
        .into_iter()
        .filter(|token| token.len() >= MIN_KEYWORD_LEN && !BROAD_WORDS.contains(token.as_str()))
        .collect()
}

/// Inverted index from keyword to the issue numbers sharing it.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    buckets: BTreeMap<String, BTreeSet<u64>>,
}

impl KeywordIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the keywords of one issue.
    pub fn insert(&mut self, number: u64, keywords: &KeywordSet) {
        keywords.iter().for_each(|keyword| {
            self.buckets
                .entry(keyword.clone())
                .or_default()
                .insert(number);
        });
    }

    /// Issue numbers whose titles contain `keyword`.
    #[must_use]
    pub fn issues_for(&self, keyword: &str) -> Option<&BTreeSet<u64>> {
        self.buckets.get(keyword)
    }

    /// Number of distinct keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets whose size lies within `sizes`, in keyword order.
    pub fn buckets_within(
        &self,
        sizes: std::ops::RangeInclusive<usize>,
    ) -> impl Iterator<Item = (&str, &BTreeSet<u64>)> + '_ {
        self.buckets
            .iter()
            .filter(move |(_, issues)| sizes.contains(&issues.len()))
            .map(|(keyword, issues)| (keyword.as_str(), issues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_broad_and_short_words() {
        let keywords = extract_keywords("Session token refresh breaks SSO");
        assert_eq!(
            keywords.into_iter().collect::<Vec<_>>(),
            vec!["breaks", "refresh"]
        );
    }

    #[test]
    fn test_deduplicates_keywords() {
        let keywords = extract_keywords("Redirect loop after redirect");
        assert_eq!(keywords.len(), 2);
        assert!(keywords.contains("redirect"));
        assert!(keywords.contains("loop"));
    }

    #[test]
    fn test_generic_title_has_no_keywords() {
        assert!(extract_keywords("Error when login fails").is_empty());
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_index_groups_issue_numbers_by_keyword() {
        let mut index = KeywordIndex::new();
        index.insert(1, &extract_keywords("Passkey registration broken"));
        index.insert(2, &extract_keywords("Passkey prompt missing"));
        index.insert(3, &extract_keywords("Stripe webhook retries"));

        let passkey: Vec<u64> = index
            .issues_for("passkey")
            .map(|issues| issues.iter().copied().collect())
            .unwrap_or_default();
        assert_eq!(passkey, vec![1, 2]);
        assert!(index.issues_for("missing").is_some());
        assert!(index.issues_for("unknown").is_none());
    }

    #[test]
    fn test_buckets_within_filters_by_size() {
        let mut index = KeywordIndex::new();
        index.insert(1, &extract_keywords("Passkey registration broken"));
        index.insert(2, &extract_keywords("Passkey prompt missing"));

        let keywords: Vec<&str> = index
            .buckets_within(2..=14)
            .map(|(keyword, _)| keyword)
            .collect();
        assert_eq!(keywords, vec!["passkey"]);
    }
}
