//! issue-triage - priority scoring and duplicate detection for GitHub issues
//!
//! Binary name: `issue-triage`

use std::process;

mod cli;

use cli::handlers::{format_error, run_cli};

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {}", format_error(&err));
        }

        let code = err
            .downcast_ref::<issue_triage_core::Error>()
            .map_or(1, issue_triage_core::Error::exit_code);

        #[allow(clippy::exit)]
        process::exit(code);
    }
}
