//! Argument handling and the top-level run

use std::io::Write;

use anyhow::{Context, Result};
use clap::ArgMatches;
use issue_triage_core::{
    analyze,
    config::{count_or_default, repo_or_default, DEFAULT_LIMIT},
    load_config,
    report::{self, DEFAULT_TOP},
    Config, ConfigOverrides, FetchRequest, GhCliSource, IssueSource, IssueState, JsonFileSource,
    OutputMode,
};

use super::{build_cli, logging};

pub fn format_error(err: &anyhow::Error) -> String {
    let msg = err.to_string();
    if let Some(source) = err.source() {
        let source_msg = source.to_string();
        if !msg.contains(&source_msg) && !source_msg.is_empty() {
            return format!("{msg}\nCause: {source_msg}");
        }
    }
    msg
}

pub async fn run_cli() -> Result<()> {
    let matches = build_cli().try_get_matches().unwrap_or_else(|e| e.exit());

    logging::init(matches.get_count("verbose"));

    let overrides = overrides_from_matches(&matches);
    let config_path = matches.get_one::<String>("config").map(std::path::Path::new);
    let config = load_config(config_path, overrides)?;

    let source: Box<dyn IssueSource> = match matches.get_one::<String>("input") {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => {
            // Shown at every verbosity; stdout carries only the report.
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Fetching issues from {}...", config.repo);
            }
            Box::new(GhCliSource::new())
        }
    };

    run(&config, source.as_ref()).await
}

/// Fetch, analyze and print one report.
pub async fn run(config: &Config, source: &dyn IssueSource) -> Result<()> {
    let issues = source.fetch(&FetchRequest::from(config)).await?;
    let analysis = analyze(issues);
    let rendered = report::render(&analysis, config.output, config.top)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write report to stdout")
}

/// Translate command-line values into config overrides.
///
/// Malformed values never abort the run; they fall back to the built-in
/// default with a warning.
pub fn overrides_from_matches(matches: &ArgMatches) -> ConfigOverrides {
    let value = |id: &str| matches.get_one::<String>(id).map(String::as_str);

    ConfigOverrides {
        repo: value("repo").map(|raw| repo_or_default("repo", raw)),
        limit: value("limit").map(|raw| count_or_default("limit", raw, DEFAULT_LIMIT)),
        state: value("state").map(IssueState::parse_or_default),
        output: value("output").map(OutputMode::parse_or_default),
        top: value("top").map(|raw| count_or_default("top", raw, DEFAULT_TOP)),
    }
}
