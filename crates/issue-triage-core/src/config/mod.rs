//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: `<platform config dir>/issue-triage/config.toml`
//! 3. Project config: `.issue-triage.toml`
//! 4. Explicit `--config <PATH>` file
//! 5. Environment variables: `ISSUE_TRIAGE_*`
//! 6. CLI arguments
//!
//! # Example Config
//!
//! ```toml
//! repo = "better-auth/better-auth"
//! limit = 200
//! state = "open"
//! output = "json"
//! top = 20
//! ```
//!
//! # Module Structure
//!
//! - `types`: Configuration structure definitions
//! - `defaults`: Default value implementations
//! - `load`: Loading from files and environment
//! - `merge`: Layer merging
//! - `validate`: Validation of resolved values
//! - `fallback`: Lenient parsing of command-line and environment values

mod defaults;
mod fallback;
mod load;
mod merge;
mod types;
mod validate;

#[cfg(test)]
mod tests_loading;

pub use defaults::{DEFAULT_LIMIT, DEFAULT_REPO};
pub use fallback::{count_or_default, repo_or_default};
pub use load::{
    global_config_path, load_config, load_config_from, load_toml_file, project_config_path,
    ConfigPaths, PROJECT_CONFIG_FILE,
};
pub use types::{Config, ConfigFile, ConfigOverrides, IssueState};
