#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Similarity detection for identifying potential duplicate issues
//!
//! Two keyword sets match when their overlap is specific enough: longer
//! shared keywords weigh more, and short generic overlaps are rejected as
//! noise even though they intersect.

use std::collections::BTreeSet;

/// Minimum number of shared keywords for a multi-keyword match.
pub const MIN_SHARED_KEYWORDS: usize = 2;

/// Minimum combined keyword length for a multi-keyword match.
pub const MIN_SHARED_LENGTH: usize = 10;

/// A single shared keyword this long is a match on its own.
pub const SPECIFIC_KEYWORD_LEN: usize = 8;

/// Outcome of comparing two keyword sets.
///
/// `score == 0` with an empty `shared` set means "no match".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Similarity {
    pub score: usize,
    pub shared: BTreeSet<String>,
}

impl Similarity {
    /// The "no match" outcome.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            score: 0,
            shared: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Compare two keyword sets.
///
/// The score is the sum of the character lengths of the shared keywords.
/// The pair is accepted when it shares at least [`MIN_SHARED_KEYWORDS`]
/// keywords totalling at least [`MIN_SHARED_LENGTH`] characters, or when
/// any shared keyword is at least [`SPECIFIC_KEYWORD_LEN`] characters long.
/// Anything else, including a non-empty but weak overlap, is
/// [`Similarity::none`].
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use issue_triage_core::similarity;
///
/// let a: BTreeSet<String> = ["passkey", "safari"].map(String::from).into();
/// let b: BTreeSet<String> = ["passkey", "safari", "ios"].map(String::from).into();
/// let result = similarity(&a, &b);
/// assert_eq!(result.score, 13);
/// assert_eq!(result.shared.len(), 2);
/// ```
#[must_use]
pub fn similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Similarity {
    let shared: BTreeSet<String> = a.intersection(b).cloned().collect();
    if shared.is_empty() {
        return Similarity::none();
    }

    let score = shared.iter().map(|keyword| keyword.chars().count()).sum();
    let broad_overlap = shared.len() >= MIN_SHARED_KEYWORDS && score >= MIN_SHARED_LENGTH;
    let specific_term = shared
        .iter()
        .any(|keyword| keyword.chars().count() >= SPECIFIC_KEYWORD_LEN);

    if broad_overlap || specific_term {
        Similarity { score, shared }
    } else {
        Similarity::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_empty_inputs_never_match() {
        assert_eq!(similarity(&set(&[]), &set(&["redirect"])), Similarity::none());
        assert_eq!(similarity(&set(&["redirect"]), &set(&[])), Similarity::none());
    }

    #[test]
    fn test_disjoint_sets_do_not_match() {
        assert!(!similarity(&set(&["stripe", "webhook"]), &set(&["passkey"])).is_match());
    }

    #[test]
    fn test_single_specific_keyword_matches() {
        let result = similarity(&set(&["callback", "mobile"]), &set(&["callback", "cache"]));
        assert_eq!(result.score, 8);
        assert_eq!(result.shared, set(&["callback"]));
    }

    #[test]
    fn test_single_short_keyword_is_rejected() {
        let result = similarity(&set(&["safari", "cookie"]), &set(&["safari", "android"]));
        assert_eq!(result, Similarity::none());
    }

    #[test]
    fn test_two_short_keywords_below_threshold_are_rejected() {
        // 4 + 4 = 8 < 10
        let result = similarity(&set(&["sync", "slow", "ios"]), &set(&["sync", "slow"]));
        assert_eq!(result, Similarity::none());
    }

    #[test]
    fn test_two_keywords_at_threshold_match() {
        // 5 + 5 = 10
        let result = similarity(&set(&["magic", "links"]), &set(&["magic", "links", "expire"]));
        assert_eq!(result.score, 10);
        assert_eq!(result.shared, set(&["links", "magic"]));
    }

    #[test]
    fn test_symmetric() {
        let a = set(&["oauth", "callback", "mobile"]);
        let b = set(&["callback", "mobile", "safari"]);
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }
}
