//! Configuration type definitions

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::OutputMode;

/// Resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Repository in `owner/name` form
    pub repo: String,
    /// Maximum number of issues to fetch
    pub limit: usize,
    pub state: IssueState,
    pub output: OutputMode,
    /// Rows and groups shown in the combined view
    pub top: usize,
}

/// Issue state filter passed to the tracker.
///
/// ```
/// use issue_triage_core::IssueState;
///
/// assert_eq!("closed".parse::<IssueState>(), Ok(IssueState::Closed));
/// assert_eq!(IssueState::All.as_ref(), "all");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
    All,
}

/// One configuration file. Every key is optional; absent keys leave the
/// lower layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub repo: Option<String>,
    pub limit: Option<usize>,
    pub state: Option<IssueState>,
    pub output: Option<OutputMode>,
    pub top: Option<usize>,
}

/// Values supplied on the command line. They win over every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub repo: Option<String>,
    pub limit: Option<usize>,
    pub state: Option<IssueState>,
    pub output: Option<OutputMode>,
    pub top: Option<usize>,
}

impl From<ConfigOverrides> for ConfigFile {
    fn from(overrides: ConfigOverrides) -> Self {
        Self {
            repo: overrides.repo,
            limit: overrides.limit,
            state: overrides.state,
            output: overrides.output,
            top: overrides.top,
        }
    }
}
