//! Lenient parsing for command-line and environment values
//!
//! A malformed value never aborts a run; it is replaced by the built-in
//! default and a warning names where it came from. Config files stay strict
//! (see `load`).

use super::{defaults::DEFAULT_REPO, types::IssueState};

/// Repository name, or [`DEFAULT_REPO`] when blank.
pub fn repo_or_default(origin: &str, raw: &str) -> String {
    let repo = raw.trim();
    if repo.is_empty() {
        tracing::warn!(origin, "Empty repository, using '{DEFAULT_REPO}'");
        DEFAULT_REPO.to_string()
    } else {
        repo.to_string()
    }
}

/// Positive count, or `default` when unparsable or zero.
pub fn count_or_default(origin: &str, raw: &str, default: usize) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => count,
        _ => {
            tracing::warn!(origin, value = raw, "Invalid count, using {default}");
            default
        }
    }
}

impl IssueState {
    /// Parse a state, falling back to [`IssueState::Open`] for unknown values.
    ///
    /// ```
    /// use issue_triage_core::IssueState;
    ///
    /// assert_eq!(IssueState::parse_or_default("ALL"), IssueState::All);
    /// assert_eq!(IssueState::parse_or_default("draft"), IssueState::Open);
    /// ```
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value, "Unknown issue state, using '{}'", Self::default());
            Self::default()
        })
    }
}
