#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Priority scoring
//!
//! An issue's priority blends community signal (reactions and comments) with
//! activity over time: recently touched issues get a boost that decays to
//! zero over [`RECENCY_WINDOW_DAYS`], and old issues that were re-engaged
//! recently get a revival bonus. Bug and security reports are multiplied.

use chrono::{DateTime, Utc};

use super::types::{IssueRecord, ReactionGroup};

/// Weight of thumbs-up and heart reactions.
pub const ENDORSEMENT_WEIGHT: f64 = 3.0;

/// Weight of each comment.
pub const COMMENT_WEIGHT: f64 = 0.5;

/// Recency boost for an issue updated right now.
pub const RECENCY_BOOST: f64 = 15.0;

/// Days after which the recency boost reaches zero.
pub const RECENCY_WINDOW_DAYS: f64 = 105.0;

/// Bonus for an old issue that was recently re-engaged.
pub const REVIVAL_BONUS: f64 = 10.0;

/// An issue older than this (days since creation) may be revived.
pub const REVIVAL_MIN_AGE_DAYS: f64 = 180.0;

/// An issue updated within this many days counts as re-engaged.
pub const REVIVAL_MAX_IDLE_DAYS: f64 = 30.0;

/// Multiplier for issues labelled bug or security.
pub const SEVERITY_MULTIPLIER: f64 = 1.5;

/// Labels that trigger [`SEVERITY_MULTIPLIER`].
pub const SEVERITY_LABELS: [&str; 2] = ["bug", "security"];

/// The individual components of a priority score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub endorsements: f64,
    pub other_reactions: f64,
    pub comments: f64,
    pub recency: f64,
    pub revival: f64,
    pub multiplier: f64,
}

impl ScoreBreakdown {
    /// Compute every component of the score for `issue` as of `now`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(issue: &IssueRecord, now: DateTime<Utc>) -> Self {
        let endorsed = issue
            .reaction_groups
            .iter()
            .filter(|group| group.content.is_endorsement())
            .map(ReactionGroup::count)
            .fold(0_u64, u64::saturating_add);
        let other = issue.total_reactions().saturating_sub(endorsed);

        let days_updated = days_since(issue.updated_at.as_deref(), now);
        let days_created = days_since(issue.created_at.as_deref(), now);

        let revived =
            days_created > REVIVAL_MIN_AGE_DAYS && days_updated < REVIVAL_MAX_IDLE_DAYS;
        let severe = SEVERITY_LABELS.iter().any(|label| issue.has_label(label));

        Self {
            endorsements: ENDORSEMENT_WEIGHT * endorsed as f64,
            other_reactions: other as f64,
            comments: COMMENT_WEIGHT * issue.comment_count as f64,
            recency: recency_boost(days_updated),
            revival: if revived { REVIVAL_BONUS } else { 0.0 },
            multiplier: if severe { SEVERITY_MULTIPLIER } else { 1.0 },
        }
    }

    /// Score before the severity multiplier.
    #[must_use]
    pub fn base(&self) -> f64 {
        self.endorsements + self.other_reactions + self.comments + self.recency + self.revival
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.base() * self.multiplier
    }
}

/// Score an issue as of now.
#[must_use]
pub fn score(issue: &IssueRecord) -> f64 {
    score_at(issue, Utc::now())
}

/// Score an issue as of a fixed instant.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use issue_triage_core::{score_at, IssueRecord};
///
/// let now = Utc::now();
/// let issue = IssueRecord::new(1, "Passkey prompt missing")
///     .with_comments(4)
///     .with_timestamps(
///         (now - Duration::days(400)).to_rfc3339(),
///         (now - Duration::days(400)).to_rfc3339(),
///     );
/// assert!((score_at(&issue, now) - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn score_at(issue: &IssueRecord, now: DateTime<Utc>) -> f64 {
    ScoreBreakdown::compute(issue, now).total()
}

/// Recency boost for an issue last updated `days_since_update` days ago.
///
/// Decays linearly from [`RECENCY_BOOST`] to zero at [`RECENCY_WINDOW_DAYS`].
#[must_use]
pub fn recency_boost(days_since_update: f64) -> f64 {
    RECENCY_BOOST * (1.0 - days_since_update / RECENCY_WINDOW_DAYS).max(0.0)
}

/// Fractional days elapsed between `timestamp` and `now`.
///
/// Missing or unparsable timestamps count as zero days.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn days_since(timestamp: Option<&str>, now: DateTime<Utc>) -> f64 {
    timestamp
        .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
        .map(|at| {
            let elapsed = now.signed_duration_since(at.with_timezone(&Utc));
            elapsed.num_milliseconds() as f64 / 86_400_000.0
        })
        .unwrap_or(0.0)
}
