//! Configuration loading from files and environment
//!
//! Layers, later wins:
//! 1. Built-in defaults
//! 2. Global config: `<platform config dir>/issue-triage/config.toml`
//! 3. Project config: `.issue-triage.toml` in the current directory
//! 4. Explicit file passed with `--config`
//! 5. Environment variables: `ISSUE_TRIAGE_*`
//! 6. Command-line overrides

use std::path::{Path, PathBuf};

use super::{
    defaults::DEFAULT_LIMIT,
    fallback::{count_or_default, repo_or_default},
    types::{Config, ConfigFile, ConfigOverrides, IssueState},
};
use crate::{report::DEFAULT_TOP, Error, OutputMode, Result};

pub const PROJECT_CONFIG_FILE: &str = ".issue-triage.toml";

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all layers
///
/// # Errors
///
/// Returns error if:
/// - A config file is malformed TOML or has unknown keys
/// - The explicit config file does not exist
/// - The resolved values fail validation
pub fn load_config(explicit: Option<&Path>, overrides: ConfigOverrides) -> Result<Config> {
    let files = ConfigPaths {
        global: global_config_path(),
        project: Some(project_config_path()?),
        explicit: explicit.map(Path::to_path_buf),
    };
    load_config_from(&files, overrides)
}

/// Where configuration files are looked up.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    /// Must exist when set
    pub explicit: Option<PathBuf>,
}

/// Load configuration from the given files, the environment and overrides.
///
/// # Errors
///
/// Same as [`load_config`]
pub fn load_config_from(paths: &ConfigPaths, overrides: ConfigOverrides) -> Result<Config> {
    let config = Config::default();

    let config = match optional_layer(paths.global.as_deref())? {
        Some(global) => config.merge(global),
        None => config,
    };

    let config = match optional_layer(paths.project.as_deref())? {
        Some(project) => config.merge(project),
        None => config,
    };

    let config = match paths.explicit.as_deref() {
        Some(path) => config.merge(load_toml_file(path)?),
        None => config,
    };

    let config = config.merge(env_layer()).merge(overrides.into());
    config.validate()?;

    tracing::debug!(
        repo = %config.repo,
        limit = config.limit,
        state = %config.state,
        output = %config.output,
        top = config.top,
        "Configuration resolved"
    );
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to global config file
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "issue-triage")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Get path to project config file
///
/// # Errors
///
/// Returns error if current directory cannot be determined
pub fn project_config_path() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .map_err(|e| Error::Io(format!("Failed to get current directory: {e}")))
}

fn optional_layer(path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match path {
        Some(path) if path.exists() => load_toml_file(path).map(Some),
        _ => Ok(None),
    }
}

/// Load a TOML file into a partial config layer
///
/// # Errors
///
/// Returns error if the file cannot be read, is a directory, or is not valid
/// TOML for a config layer
pub fn load_toml_file(path: &Path) -> Result<ConfigFile> {
    if path.is_dir() {
        return Err(Error::invalid_config(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::invalid_config(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::invalid_config(format!(
            "Failed to parse config file {}: {e}\n\
             \n\
             Supported keys: repo, limit, state, output, top",
            path.display()
        ))
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// ENVIRONMENT VARIABLE OVERRIDES
// ═══════════════════════════════════════════════════════════════════════════

/// `ISSUE_TRIAGE_*` overrides. Malformed values fall back to the built-in
/// default with a warning, the same as command-line values.
fn env_layer() -> ConfigFile {
    let var = |name: &str| std::env::var(name).ok();

    ConfigFile {
        repo: var("ISSUE_TRIAGE_REPO").map(|raw| repo_or_default("ISSUE_TRIAGE_REPO", &raw)),
        limit: var("ISSUE_TRIAGE_LIMIT")
            .map(|raw| count_or_default("ISSUE_TRIAGE_LIMIT", &raw, DEFAULT_LIMIT)),
        state: var("ISSUE_TRIAGE_STATE").map(|raw| IssueState::parse_or_default(&raw)),
        output: var("ISSUE_TRIAGE_OUTPUT").map(|raw| OutputMode::parse_or_default(&raw)),
        top: var("ISSUE_TRIAGE_TOP")
            .map(|raw| count_or_default("ISSUE_TRIAGE_TOP", &raw, DEFAULT_TOP)),
    }
}
