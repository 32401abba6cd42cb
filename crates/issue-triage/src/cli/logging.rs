//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout only ever carries the report.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Base level for a `-v` count.
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_for(verbosity).into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
