//! Built-in configuration defaults

use super::types::{Config, IssueState};
use crate::{report::DEFAULT_TOP, OutputMode};

pub const DEFAULT_REPO: &str = "better-auth/better-auth";
pub const DEFAULT_LIMIT: usize = 500;

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            limit: DEFAULT_LIMIT,
            state: IssueState::default(),
            output: OutputMode::default(),
            top: DEFAULT_TOP,
        }
    }
}
