//! CLI definition, argument handling and logging setup

pub mod commands;
pub mod handlers;
mod logging;

pub use commands::build_cli;
