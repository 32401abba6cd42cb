#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Issue analysis
//!
//! This module provides the pure, synchronous core organized into
//! specialized submodules:
//! - `types`: issue records, scored issues and duplicate groups
//! - `normalize`: title → readable token stream
//! - `keywords`: discriminating keywords and the inverted keyword index
//! - `similarity`: keyword-overlap matching
//! - `scoring`: priority score from reactions, comments, recency and labels
//! - `grouping`: greedy duplicate grouping

mod grouping;
mod keywords;
mod normalize;
mod scoring;
mod similarity;
mod types;

pub use grouping::{find_duplicate_groups, MAX_BUCKET_SIZE, MAX_GROUP_SIZE, MIN_BUCKET_SIZE};
pub use keywords::{extract_keywords, KeywordIndex, KeywordSet, BROAD_WORDS, MIN_KEYWORD_LEN};
pub use normalize::{normalize_title, MIN_TOKEN_LEN, STOP_WORDS};
pub use scoring::{
    days_since, recency_boost, score, score_at, ScoreBreakdown, RECENCY_WINDOW_DAYS,
    SEVERITY_MULTIPLIER,
};
pub use similarity::{similarity, Similarity};
pub use types::*;
