//! CLI definition using `clap`

use clap::{Arg, ArgAction, Command as ClapCommand};
use issue_triage_core::{
    config::{DEFAULT_LIMIT, DEFAULT_REPO},
    report::DEFAULT_TOP,
    OutputMode,
};

pub fn after_help_text(examples: &[&str]) -> String {
    let mut text = String::from("EXAMPLES:\n");
    for example in examples {
        text.push_str("  ");
        text.push_str(example);
        text.push('\n');
    }
    text
}

pub fn build_cli() -> ClapCommand {
    ClapCommand::new("issue-triage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Score open GitHub issues and find likely duplicates")
        .long_about(
            "Fetches issues with the GitHub CLI (gh), ranks them by reactions, \
             comments, recency and severity labels, and groups issues whose \
             titles share discriminating keywords.",
        )
        .arg(
            Arg::new("repo")
                .value_name("REPO")
                .help(format!("Repository as owner/name [default: {DEFAULT_REPO}]")),
        )
        .arg(
            Arg::new("limit")
                .value_name("LIMIT")
                .help(format!("Maximum number of issues to fetch [default: {DEFAULT_LIMIT}]")),
        )
        .arg(Arg::new("output").value_name("OUTPUT").help(format!(
            "Output mode: {} [default: {}]",
            OutputMode::variants(),
            OutputMode::default()
        )))
        .arg(
            Arg::new("state")
                .long("state")
                .value_name("STATE")
                .help("Issue state to fetch: open, closed, all [default: open]"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("PATH")
                .help("Read a `gh issue list --json` export instead of calling gh ('-' for stdin)"),
        )
        .arg(
            Arg::new("top")
                .long("top")
                .value_name("N")
                .help(format!("Rows and groups shown in 'both' mode [default: {DEFAULT_TOP}]")),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Additional config file, applied after global and project config"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .after_help(after_help_text(&[
            "issue-triage                                  Analyze better-auth/better-auth",
            "issue-triage acme/widgets 200 duplicates      Only list duplicate groups",
            "issue-triage acme/widgets 1000 json > out.json Machine-readable report",
            "issue-triage --input issues.json scored       Analyze an exported issue list",
            "gh issue list --json number,title | issue-triage --input - scored",
        ]))
}
