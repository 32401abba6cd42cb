//! Offline issue source reading an exported `gh issue list --json` document

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use super::{parse_issue_list, FetchRequest, IssueSource};
use crate::{issues::IssueRecord, Error, Result};

/// Path value that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Reads issues from a JSON file or stdin.
///
/// The request's state is not applied; the export is taken as already
/// filtered. The limit truncates the list.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PATH
    }

    async fn read(&self) -> Result<String> {
        if self.is_stdin() {
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .map_err(|e| Error::Io(format!("Failed to read issues from stdin: {e}")))?;
            return Ok(content);
        }

        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::Io(format!(
                "Failed to read issues from {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl IssueSource for JsonFileSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<IssueRecord>> {
        tracing::info!(path = %self.path.display(), "Reading issues from file");

        let content = self.read().await?;
        let mut issues = parse_issue_list(&content)?;
        if issues.len() > request.limit {
            tracing::debug!(
                total = issues.len(),
                limit = request.limit,
                "Truncating issue list to limit"
            );
            issues.truncate(request.limit);
        }
        Ok(issues)
    }
}
