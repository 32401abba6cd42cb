#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// `OutputMode` selects which views of an analysis are rendered.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use issue_triage_core::OutputMode;
///
/// assert_eq!(OutputMode::from_str("json"), Ok(OutputMode::Json));
/// assert_eq!(OutputMode::from_str("DUPLICATES"), Ok(OutputMode::Duplicates));
/// assert!(OutputMode::from_str("xml").is_err());
/// assert_eq!(OutputMode::Scored.to_string(), "scored");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Tab-separated `score  #number  title` lines
    Scored,
    /// Duplicate groups only
    Duplicates,
    /// Top scored issues followed by top duplicate groups
    #[default]
    Both,
    /// One JSON document with both views
    Json,
}

impl OutputMode {
    /// Parse a mode, falling back to [`OutputMode::Both`] for unknown values.
    ///
    /// ```
    /// use issue_triage_core::OutputMode;
    ///
    /// assert_eq!(OutputMode::parse_or_default("scored"), OutputMode::Scored);
    /// assert_eq!(OutputMode::parse_or_default("table"), OutputMode::Both);
    /// ```
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value, "Unknown output mode, using '{}'", Self::default());
            Self::default()
        })
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Comma-separated list of every mode, for help text.
    #[must_use]
    pub fn variants() -> String {
        use strum::IntoEnumIterator;
        Self::iter().map(|mode| mode.to_string()).collect::<Vec<_>>().join(", ")
    }
}
