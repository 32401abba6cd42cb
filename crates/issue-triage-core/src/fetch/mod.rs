//! Issue sources
//!
//! An [`IssueSource`] turns a [`FetchRequest`] into issue records. The live
//! source shells out to the GitHub CLI; the file source reads an exported
//! issue list for offline runs.

mod file;
mod gh;

use async_trait::async_trait;

pub use file::{JsonFileSource, STDIN_PATH};
pub use gh::{GhCliSource, ISSUE_FIELDS};

use crate::{issues::IssueRecord, IssueState, Result};

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub repo: String,
    pub limit: usize,
    pub state: IssueState,
}

impl FetchRequest {
    pub fn new(repo: impl Into<String>, limit: usize, state: IssueState) -> Self {
        Self {
            repo: repo.into(),
            limit,
            state,
        }
    }
}

impl From<&crate::Config> for FetchRequest {
    fn from(config: &crate::Config) -> Self {
        Self::new(config.repo.clone(), config.limit, config.state)
    }
}

/// A provider of issue records.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch issues for a request
    ///
    /// # Errors
    ///
    /// Returns error if the issues cannot be retrieved or decoded
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<IssueRecord>>;
}

/// Decode a `gh issue list --json` document.
///
/// # Errors
///
/// Returns `Error::Parse` if the text is not a JSON array of issues
pub fn parse_issue_list(json: &str) -> Result<Vec<IssueRecord>> {
    let issues: Vec<IssueRecord> = serde_json::from_str(json)?;
    tracing::debug!(count = issues.len(), "Decoded issue list");
    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{issues::ReactionKind, Error};

    const GH_SAMPLE: &str = r#"[
      {
        "number": 4021,
        "title": "OAuth callback redirect fails on mobile Safari",
        "reactionGroups": [
          {"content": "THUMBS_UP", "users": {"totalCount": 7}},
          {"content": "ROCKET", "users": {"totalCount": 1}}
        ],
        "comments": [{"body": "same here"}, {"body": "+1"}],
        "updatedAt": "2024-05-01T10:00:00Z",
        "createdAt": "2023-11-20T08:30:00Z",
        "labels": [{"name": "bug"}]
      },
      {
        "number": 4022,
        "title": "Docs typo",
        "reactionGroups": [],
        "comments": [],
        "updatedAt": null,
        "createdAt": null,
        "labels": []
      }
    ]"#;

    #[test]
    fn test_parse_gh_document() -> Result<()> {
        let issues = parse_issue_list(GH_SAMPLE)?;

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].number, 4021);
        assert_eq!(issues[0].reactions_of(ReactionKind::ThumbsUp), 7);
        assert_eq!(issues[0].reactions_of(ReactionKind::Rocket), 1);
        assert_eq!(issues[0].comment_count, 2);
        assert!(issues[0].has_label("Bug"));
        assert_eq!(issues[1].updated_at, None);
        Ok(())
    }

    #[test]
    fn test_parse_tolerates_malformed_fields() -> Result<()> {
        let issues = parse_issue_list(
            r#"[
              {"number": 1, "title": "Passkey prompt", "updatedAt": 1700000000},
              {"number": 2, "title": "Org invite", "reactionGroups": [{"content": null, "users": {"totalCount": null}}]}
            ]"#,
        )?;

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].updated_at, None);
        assert_eq!(issues[1].reaction_groups[0].content, ReactionKind::Other);
        assert_eq!(issues[1].total_reactions(), 0);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_issue_list(r#"{"message": "Not Found"}"#),
            Err(Error::Parse(_))
        ));
        assert!(matches!(parse_issue_list(""), Err(Error::Parse(_))));
    }

    #[test]
    fn test_request_from_config() {
        let config = crate::Config::default();
        let request = FetchRequest::from(&config);
        assert_eq!(
            request,
            FetchRequest::new("better-auth/better-auth", 500, IssueState::Open)
        );
    }
}
