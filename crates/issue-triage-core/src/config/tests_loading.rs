//! Loading-focused tests for configuration
//!
//! File parsing, layer precedence and environment overrides. Tests that touch
//! `ISSUE_TRIAGE_*` variables run serially.

use std::path::{Path, PathBuf};

use serial_test::serial;
use tempfile::TempDir;

use crate::config::{
    load_config_from, load_toml_file, Config, ConfigFile, ConfigOverrides, ConfigPaths,
    IssueState,
};
use crate::{Error, OutputMode, Result};

const ENV_VARS: [&str; 5] = [
    "ISSUE_TRIAGE_REPO",
    "ISSUE_TRIAGE_LIMIT",
    "ISSUE_TRIAGE_STATE",
    "ISSUE_TRIAGE_OUTPUT",
    "ISSUE_TRIAGE_TOP",
];

struct EnvGuard;

impl EnvGuard {
    fn clean() -> Self {
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
        Self
    }

    fn set(&self, name: &str, value: &str) {
        std::env::set_var(name, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
    }
}

fn write(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}

fn only_explicit(path: &Path) -> ConfigPaths {
    ConfigPaths {
        explicit: Some(path.to_path_buf()),
        ..ConfigPaths::default()
    }
}

#[test]
#[serial]
fn test_no_files_returns_defaults() -> Result<()> {
    let _env = EnvGuard::clean();
    let config = load_config_from(&ConfigPaths::default(), ConfigOverrides::default())?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
#[serial]
fn test_missing_optional_files_are_skipped() -> Result<()> {
    let _env = EnvGuard::clean();
    let dir = TempDir::new()?;
    let paths = ConfigPaths {
        global: Some(dir.path().join("nope.toml")),
        project: Some(dir.path().join(".issue-triage.toml")),
        explicit: None,
    };
    assert_eq!(
        load_config_from(&paths, ConfigOverrides::default())?,
        Config::default()
    );
    Ok(())
}

#[test]
fn test_load_toml_file_partial() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(&dir, "config.toml", "limit = 200\noutput = \"json\"\n")?;

    let layer = load_toml_file(&path)?;

    assert_eq!(
        layer,
        ConfigFile {
            limit: Some(200),
            output: Some(OutputMode::Json),
            ..ConfigFile::default()
        }
    );
    Ok(())
}

#[test]
fn test_malformed_toml_is_invalid_config() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(&dir, "bad.toml", "limit = \n invalid toml [[[")?;

    let result = load_toml_file(&path);

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    Ok(())
}

#[test]
fn test_unknown_key_is_invalid_config() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(&dir, "typo.toml", "repository = \"acme/widgets\"\n")?;

    let err = load_toml_file(&path).err().map(|e| e.to_string());

    assert!(err.is_some_and(|msg| msg.contains("Supported keys")));
    Ok(())
}

#[test]
fn test_unknown_output_in_file_is_invalid_config() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(&dir, "config.toml", "output = \"xml\"\n")?;
    assert!(load_toml_file(&path).is_err());
    Ok(())
}

#[test]
fn test_directory_path_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    assert!(matches!(
        load_toml_file(dir.path()),
        Err(Error::InvalidConfig(_))
    ));
    Ok(())
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() -> Result<()> {
    let _env = EnvGuard::clean();
    let dir = TempDir::new()?;
    let paths = only_explicit(&dir.path().join("missing.toml"));

    let result = load_config_from(&paths, ConfigOverrides::default());

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    Ok(())
}

#[test]
#[serial]
fn test_layer_precedence() -> Result<()> {
    let _env = EnvGuard::clean();
    let dir = TempDir::new()?;
    let global = write(
        &dir,
        "global.toml",
        "repo = \"global/repo\"\nlimit = 100\ntop = 5\n",
    )?;
    let project = write(&dir, "project.toml", "repo = \"project/repo\"\nlimit = 50\n")?;
    let explicit = write(&dir, "explicit.toml", "repo = \"explicit/repo\"\n")?;

    let paths = ConfigPaths {
        global: Some(global),
        project: Some(project),
        explicit: Some(explicit),
    };
    let config = load_config_from(&paths, ConfigOverrides::default())?;

    assert_eq!(config.repo, "explicit/repo");
    assert_eq!(config.limit, 50);
    assert_eq!(config.top, 5);
    assert_eq!(config.state, IssueState::Open);
    Ok(())
}

#[test]
#[serial]
fn test_env_overrides_files() -> Result<()> {
    let env = EnvGuard::clean();
    let dir = TempDir::new()?;
    let path = write(&dir, "config.toml", "limit = 100\nstate = \"open\"\n")?;
    env.set("ISSUE_TRIAGE_LIMIT", "25");
    env.set("ISSUE_TRIAGE_STATE", "closed");
    env.set("ISSUE_TRIAGE_OUTPUT", "Scored");

    let config = load_config_from(&only_explicit(&path), ConfigOverrides::default())?;

    assert_eq!(config.limit, 25);
    assert_eq!(config.state, IssueState::Closed);
    assert_eq!(config.output, OutputMode::Scored);
    Ok(())
}

#[test]
#[serial]
fn test_cli_overrides_env() -> Result<()> {
    let env = EnvGuard::clean();
    env.set("ISSUE_TRIAGE_REPO", "env/repo");
    env.set("ISSUE_TRIAGE_TOP", "3");

    let overrides = ConfigOverrides {
        repo: Some("cli/repo".to_string()),
        ..ConfigOverrides::default()
    };
    let config = load_config_from(&ConfigPaths::default(), overrides)?;

    assert_eq!(config.repo, "cli/repo");
    assert_eq!(config.top, 3);
    Ok(())
}

#[test]
#[serial]
fn test_invalid_env_values_fall_back_to_defaults() -> Result<()> {
    let env = EnvGuard::clean();
    let dir = TempDir::new()?;
    let path = write(
        &dir,
        "config.toml",
        "limit = 100\ntop = 5\noutput = \"scored\"\n",
    )?;
    env.set("ISSUE_TRIAGE_LIMIT", "lots");
    env.set("ISSUE_TRIAGE_TOP", "0");
    env.set("ISSUE_TRIAGE_OUTPUT", "xml");
    env.set("ISSUE_TRIAGE_STATE", "draft");

    let config = load_config_from(&only_explicit(&path), ConfigOverrides::default())?;

    assert_eq!(config.limit, 500);
    assert_eq!(config.top, 30);
    assert_eq!(config.output, OutputMode::Both);
    assert_eq!(config.state, IssueState::Open);
    Ok(())
}

#[test]
#[serial]
fn test_empty_env_repo_falls_back_to_default() -> Result<()> {
    let env = EnvGuard::clean();
    env.set("ISSUE_TRIAGE_REPO", "  ");

    let config = load_config_from(&ConfigPaths::default(), ConfigOverrides::default())?;

    assert_eq!(config.repo, "better-auth/better-auth");
    Ok(())
}

#[test]
#[serial]
fn test_zero_limit_in_file_rejected() -> Result<()> {
    let _env = EnvGuard::clean();
    let dir = TempDir::new()?;
    let path = write(&dir, "config.toml", "limit = 0\n")?;

    let result = load_config_from(&only_explicit(&path), ConfigOverrides::default());

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    Ok(())
}
