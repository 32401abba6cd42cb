//! # Issue Triage Core
//!
//! Priority scoring and duplicate detection for issue tracker exports.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Layout
//!
//! - `issues`: data model, title normalization, keywords, similarity,
//!   scoring and duplicate grouping (pure, synchronous)
//! - `analysis`: the score → sort → group pipeline
//! - `report`: plain text and JSON rendering
//! - `fetch`: issue sources (`gh` CLI, JSON file)
//! - `config`: layered configuration

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod config;
mod error;
pub mod fetch;
pub mod issues;
mod output_format;
pub mod report;

pub use analysis::{analyze, analyze_at, Analysis};
pub use config::{load_config, Config, ConfigOverrides, IssueState};
pub use error::{Error, Result};
pub use fetch::{FetchRequest, GhCliSource, IssueSource, JsonFileSource};
pub use issues::{
    extract_keywords, find_duplicate_groups, normalize_title, score, score_at, similarity,
    DuplicateGroup, GroupMember, IssueRecord, ScoredIssue, Similarity,
};
pub use output_format::OutputMode;
