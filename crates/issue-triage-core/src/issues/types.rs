//! Issue domain types
//!
//! This module defines the records the analysis works on:
//! - `IssueRecord`: one issue as exported by `gh issue list --json`
//! - `ReactionGroup` / `ReactionKind`: reaction counts per emoji
//! - `ScoredIssue`: an issue paired with its priority score
//! - `DuplicateGroup` / `GroupMember`: one suspected duplicate cluster
//!
//! Deserialization is lenient: every field except `number` may be missing,
//! `null` or of the wrong type and then contributes nothing to the score.

use std::collections::BTreeSet;

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// Width of titles in duplicate group listings.
pub const GROUP_TITLE_WIDTH: usize = 65;

/// Width of titles in the scored issue listing.
pub const SCORED_TITLE_WIDTH: usize = 70;

/// Reaction emoji kinds reported by GitHub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionKind {
    ThumbsUp,
    ThumbsDown,
    Laugh,
    Hooray,
    Confused,
    Heart,
    Rocket,
    Eyes,
    #[default]
    #[serde(other)]
    Other,
}

impl ReactionKind {
    /// Positive reactions weigh three times as much as the others.
    #[must_use]
    pub const fn is_endorsement(self) -> bool {
        matches!(self, Self::ThumbsUp | Self::Heart)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionUsers {
    #[serde(default, deserialize_with = "lenient")]
    pub total_count: u64,
}

/// Count of one reaction kind on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionGroup {
    #[serde(default, deserialize_with = "lenient")]
    pub content: ReactionKind,
    #[serde(default, deserialize_with = "lenient")]
    pub users: ReactionUsers,
}

impl ReactionGroup {
    #[must_use]
    pub const fn new(content: ReactionKind, count: u64) -> Self {
        Self {
            content,
            users: ReactionUsers { total_count: count },
        }
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.users.total_count
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

impl Label {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single issue record from the tracker.
///
/// Timestamps are kept as the raw ISO-8601 text; they are parsed when the
/// issue is scored so an unparsable value degrades to "0 days" instead of
/// rejecting the whole export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    pub number: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub reaction_groups: Vec<ReactionGroup>,
    #[serde(rename = "comments", default, deserialize_with = "comment_count")]
    pub comment_count: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub labels: Vec<Label>,
}

impl IssueRecord {
    /// Create a bare issue with only a number and title.
    #[must_use]
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            reaction_groups: Vec::new(),
            comment_count: 0,
            updated_at: None,
            created_at: None,
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_reaction(mut self, content: ReactionKind, count: u64) -> Self {
        self.reaction_groups.push(ReactionGroup::new(content, count));
        self
    }

    #[must_use]
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.labels.push(Label::new(name));
        self
    }

    #[must_use]
    pub const fn with_comments(mut self, count: u64) -> Self {
        self.comment_count = count;
        self
    }

    #[must_use]
    pub fn with_timestamps(
        mut self,
        created_at: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        self.created_at = Some(created_at.into());
        self.updated_at = Some(updated_at.into());
        self
    }

    /// Sum of counts for one reaction kind.
    #[must_use]
    pub fn reactions_of(&self, kind: ReactionKind) -> u64 {
        self.reaction_groups
            .iter()
            .filter(|group| group.content == kind)
            .map(ReactionGroup::count)
            .fold(0, u64::saturating_add)
    }

    /// Sum of counts over all reaction kinds.
    #[must_use]
    pub fn total_reactions(&self) -> u64 {
        self.reaction_groups
            .iter()
            .map(ReactionGroup::count)
            .fold(0, u64::saturating_add)
    }

    /// Check if the issue carries a label, ignoring case.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels
            .iter()
            .any(|label| label.name.to_lowercase() == name.to_lowercase())
    }
}

/// An issue paired with its priority score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredIssue {
    pub issue: IssueRecord,
    pub score: f64,
}

impl ScoredIssue {
    #[must_use]
    pub const fn new(issue: IssueRecord, score: f64) -> Self {
        Self { issue, score }
    }

    #[must_use]
    pub const fn number(&self) -> u64 {
        self.issue.number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.issue.title
    }

    /// Score truncated toward zero, as shown in every output format.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn display_score(&self) -> i64 {
        self.score.trunc() as i64
    }
}

/// One line of a duplicate group listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMember {
    pub number: u64,
    pub title: String,
    pub score: i64,
}

impl GroupMember {
    #[must_use]
    pub fn from_scored(issue: &ScoredIssue) -> Self {
        Self {
            number: issue.number(),
            title: truncate_title(issue.title(), GROUP_TITLE_WIDTH),
            score: issue.display_score(),
        }
    }
}

/// A cluster of issues suspected to describe the same problem.
///
/// `members` lists the primary first, then `related` in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroup {
    pub primary: u64,
    pub related: Vec<u64>,
    pub shared_keywords: BTreeSet<String>,
    #[serde(rename = "titles")]
    pub members: Vec<GroupMember>,
}

impl DuplicateGroup {
    /// Number of issues in the group, primary included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.related.len().saturating_add(1)
    }

    /// A group always holds its primary.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// All member numbers, primary first.
    pub fn numbers(&self) -> impl Iterator<Item = u64> + '_ {
        std::iter::once(self.primary).chain(self.related.iter().copied())
    }
}

/// Truncate a title to at most `max` characters.
#[must_use]
pub fn truncate_title(title: &str, max: usize) -> String {
    title.chars().take(max).collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Malformed(IgnoredAny),
}

// Null or a value of the wrong shape yields `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => value,
        Lenient::Malformed(IgnoredAny) => {
            tracing::debug!(
                field = std::any::type_name::<T>(),
                "Ignoring malformed value in issue export"
            );
            T::default()
        }
    })
}

// `gh` exports comments as an array of objects; older exports and hand-written
// fixtures use a plain count. Both are accepted.
fn comment_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CommentCountVisitor;

    impl<'de> serde::de::Visitor<'de> for CommentCountVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("an array of comments or a comment count")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u64, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<u64, E>
        where
            E: serde::de::Error,
        {
            Ok(u64::try_from(value).unwrap_or(0))
        }

        fn visit_unit<E>(self) -> Result<u64, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }

        fn visit_none<E>(self) -> Result<u64, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<u64, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut count: u64 = 0;
            while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
                count = count.saturating_add(1);
            }
            Ok(count)
        }
    }

    deserializer.deserialize_any(CommentCountVisitor)
}
