//! Configuration validation

use super::types::Config;
use crate::{Error, Result};

impl Config {
    /// Validate resolved configuration values
    ///
    /// # Errors
    ///
    /// Returns error if the repository is blank or a count is zero
    pub fn validate(&self) -> Result<()> {
        if self.repo.trim().is_empty() {
            return Err(Error::invalid_config(
                "repo cannot be empty - use owner/name, e.g. better-auth/better-auth",
            ));
        }

        if self.limit == 0 {
            return Err(Error::invalid_config("limit must be at least 1"));
        }

        if self.top == 0 {
            return Err(Error::invalid_config("top must be at least 1"));
        }

        Ok(())
    }
}
