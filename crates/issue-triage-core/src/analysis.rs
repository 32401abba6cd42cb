//! The analysis pipeline
//!
//! score every issue → stable sort by descending score → group duplicates.
//! One evaluation instant is used for the whole run so every issue is scored
//! against the same clock.

use chrono::{DateTime, Utc};

use crate::issues::{find_duplicate_groups, DuplicateGroup, IssueRecord, ScoreBreakdown, ScoredIssue};

/// Result of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Issues sorted by descending score; ties keep input order.
    pub scored: Vec<ScoredIssue>,
    pub groups: Vec<DuplicateGroup>,
}

/// Analyze issues as of now.
#[must_use]
pub fn analyze(issues: Vec<IssueRecord>) -> Analysis {
    analyze_at(issues, Utc::now())
}

/// Analyze issues as of a fixed instant.
#[must_use]
pub fn analyze_at(issues: Vec<IssueRecord>, now: DateTime<Utc>) -> Analysis {
    let mut scored: Vec<ScoredIssue> = issues
        .into_iter()
        .map(|issue| {
            let breakdown = ScoreBreakdown::compute(&issue, now);
            tracing::debug!(
                number = issue.number,
                endorsements = breakdown.endorsements,
                other_reactions = breakdown.other_reactions,
                comments = breakdown.comments,
                recency = breakdown.recency,
                revival = breakdown.revival,
                multiplier = breakdown.multiplier,
                "Scored issue"
            );
            ScoredIssue::new(issue, breakdown.total())
        })
        .collect();

    // `sort_by` is stable, which keeps the primary tie-break deterministic.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let groups = find_duplicate_groups(&scored);
    tracing::info!(
        issues = scored.len(),
        groups = groups.len(),
        "Analysis complete"
    );

    Analysis { scored, groups }
}
