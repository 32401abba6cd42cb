//! Live issue source backed by the GitHub CLI

use std::{ffi::OsString, io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use super::{parse_issue_list, FetchRequest, IssueSource};
use crate::{issues::IssueRecord, Error, Result};

/// Fields requested from `gh issue list --json`.
pub const ISSUE_FIELDS: &str = "number,title,reactionGroups,comments,updatedAt,createdAt,labels";

/// Runs `gh issue list` and decodes its JSON output.
#[derive(Debug, Clone)]
pub struct GhCliSource {
    program: OsString,
}

impl Default for GhCliSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GhCliSource {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("gh")
    }

    /// Use a different executable in place of `gh`.
    #[must_use]
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn resolve(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|_| Error::GhNotInstalled)
    }

    /// Arguments passed to `gh` for a request.
    #[must_use]
    pub fn args(request: &FetchRequest) -> Vec<String> {
        vec![
            "issue".to_string(),
            "list".to_string(),
            "--repo".to_string(),
            request.repo.clone(),
            "--state".to_string(),
            request.state.as_ref().to_string(),
            "--limit".to_string(),
            request.limit.to_string(),
            "--json".to_string(),
            ISSUE_FIELDS.to_string(),
        ]
    }
}

#[async_trait]
impl IssueSource for GhCliSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<IssueRecord>> {
        let program = self.resolve()?;
        tracing::debug!(program = %program.display(), repo = %request.repo, "Running gh issue list");

        let output = Command::new(&program)
            .args(Self::args(request))
            .output()
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    Error::GhNotInstalled
                } else {
                    Error::fetch(&request.repo, format!("Failed to execute gh: {e}"))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::fetch(&request.repo, stderr.trim()));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::Parse(format!("Invalid UTF-8 output from gh: {e}")))?;
        let issues = parse_issue_list(&stdout)?;

        tracing::info!(count = issues.len(), repo = %request.repo, "Fetched issues");
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IssueState;

    #[test]
    fn test_args_match_gh_cli() {
        let request = FetchRequest::new("acme/widgets", 50, IssueState::Closed);
        assert_eq!(
            GhCliSource::args(&request).join(" "),
            "issue list --repo acme/widgets --state closed --limit 50 --json \
             number,title,reactionGroups,comments,updatedAt,createdAt,labels"
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_gh_not_installed() {
        let source = GhCliSource::with_program("issue-triage-definitely-not-a-real-gh");
        let request = FetchRequest::new("acme/widgets", 10, IssueState::Open);

        let result = source.fetch(&request).await;

        assert!(matches!(result, Err(Error::GhNotInstalled)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_fetch_error() {
        let source = GhCliSource::with_program("false");
        let request = FetchRequest::new("acme/widgets", 10, IssueState::Open);

        let result = source.fetch(&request).await;

        assert!(
            matches!(&result, Err(Error::Fetch { repo, .. }) if repo == "acme/widgets"),
            "expected fetch error, got {result:?}"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unparsable_stdout_is_parse_error() {
        // `echo` prints its arguments, which is not a JSON array.
        let source = GhCliSource::with_program("echo");
        let request = FetchRequest::new("acme/widgets", 10, IssueState::Open);

        let result = source.fetch(&request).await;

        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
