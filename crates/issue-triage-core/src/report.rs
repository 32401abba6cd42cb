//! Rendering of analysis results
//!
//! Text layouts are stable line formats meant for terminals and `grep`;
//! JSON is a single pretty-printed document with both views.

use std::fmt::Write as _;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    analysis::Analysis,
    issues::{truncate_title, DuplicateGroup, ScoredIssue, SCORED_TITLE_WIDTH},
    OutputMode, Result,
};

/// Default number of issues and groups shown in the combined view.
pub const DEFAULT_TOP: usize = 30;

const SCORED_HEADER: &str = "=== TOP SCORED ISSUES ===";
const GROUPS_HEADER: &str = "=== POTENTIAL DUPLICATE GROUPS ===";

/// One row of the scored listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredRow {
    pub score: i64,
    pub number: u64,
    pub title: String,
}

impl ScoredRow {
    #[must_use]
    pub fn from_scored(issue: &ScoredIssue) -> Self {
        Self {
            score: issue.display_score(),
            number: issue.number(),
            title: truncate_title(issue.title(), SCORED_TITLE_WIDTH),
        }
    }
}

/// The JSON document emitted by [`OutputMode::Json`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub scored: Vec<ScoredRow>,
    pub duplicate_groups: &'a [DuplicateGroup],
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            scored: analysis.scored.iter().map(ScoredRow::from_scored).collect(),
            duplicate_groups: &analysis.groups,
        }
    }
}

/// Render an analysis in the requested mode.
///
/// `top` limits the combined view only; the other modes list everything.
pub fn render(analysis: &Analysis, mode: OutputMode, top: usize) -> Result<String> {
    match mode {
        OutputMode::Json => render_json(analysis),
        OutputMode::Scored => Ok(render_scored(&analysis.scored)),
        OutputMode::Duplicates => Ok(render_groups(&analysis.groups)),
        OutputMode::Both => Ok(render_both(analysis, top)),
    }
}

/// Pretty JSON with `scored` and `duplicateGroups` keys.
pub fn render_json(analysis: &Analysis) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&Report::new(analysis))?;
    out.push('\n');
    Ok(out)
}

/// `score<TAB>#number<TAB>title` per issue.
#[must_use]
pub fn render_scored(scored: &[ScoredIssue]) -> String {
    scored
        .iter()
        .map(ScoredRow::from_scored)
        .fold(String::new(), |mut out, row| {
            let _ = writeln!(out, "{}\t#{}\t{}", row.score, row.number, row.title);
            out
        })
}

/// Human-readable duplicate group listing.
#[must_use]
pub fn render_groups(groups: &[DuplicateGroup]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{GROUPS_HEADER}\n");
    for group in groups {
        let _ = writeln!(
            out,
            "--- Group (shared: {}) ---",
            group.shared_keywords.iter().join(", ")
        );
        for member in &group.members {
            let _ = writeln!(
                out,
                "  [{}] #{}: {}",
                member.score, member.number, member.title
            );
        }
        out.push('\n');
    }
    out
}

/// The top `top` scored issues followed by the top `top` groups.
#[must_use]
pub fn render_both(analysis: &Analysis, top: usize) -> String {
    let scored = &analysis.scored[..top.min(analysis.scored.len())];
    let groups = &analysis.groups[..top.min(analysis.groups.len())];

    let mut out = String::new();
    let _ = writeln!(out, "\n{SCORED_HEADER}\n");
    out.push_str(&render_scored(scored));
    out.push_str(&render_groups(groups));
    out
}
