//! Error types for issue-triage
//!
//! Only the edges of a run can fail: fetching issues, reading input files
//! and loading configuration. Scoring and grouping never return errors.

use thiserror::Error;

/// Core error type for issue-triage operations
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The `gh` CLI is not on PATH
    #[error(
        "GitHub CLI (gh) is not installed or not in PATH.\n\n\
         Install it from https://cli.github.com/ and run 'gh auth login',\n\
         or pass --input <FILE> to analyze an exported issue list."
    )]
    GhNotInstalled,

    /// Fetching issues from the tracker failed
    #[error("Error fetching issues from {repo}: {reason}")]
    Fetch { repo: String, reason: String },

    /// Issue data could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO failure outside of the fetch process
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration file or environment value is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a fetch error for a repository.
    pub fn fetch(repo: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            repo: repo.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns the process exit code for this error.
    ///
    /// - 1: bad configuration
    /// - 2: fetch, parse or IO failure
    /// - 3: `gh` not installed
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig(_) => 1,
            Self::Fetch { .. } | Self::Parse(_) | Self::Io(_) => 2,
            Self::GhNotInstalled => 3,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(format!("Failed to parse config: {err}"))
    }
}

/// Result type alias for issue-triage operations
pub type Result<T> = std::result::Result<T, Error>;
