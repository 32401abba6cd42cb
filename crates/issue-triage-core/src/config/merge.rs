//! Configuration merging logic
//!
//! Later layers override earlier ones (defaults → global → project →
//! explicit file → env → CLI). Merging consumes both sides and returns a new
//! value.

use super::types::{Config, ConfigFile};

impl Config {
    /// Merge a partial layer into this config; keys present in `layer` win.
    #[must_use]
    pub fn merge(self, layer: ConfigFile) -> Self {
        Self {
            repo: layer.repo.unwrap_or(self.repo),
            limit: layer.limit.unwrap_or(self.limit),
            state: layer.state.unwrap_or(self.state),
            output: layer.output.unwrap_or(self.output),
            top: layer.top.unwrap_or(self.top),
        }
    }
}
