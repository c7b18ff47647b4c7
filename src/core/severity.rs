use super::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity attached to an emitted directive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Suggestion,
    #[default]
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::None,
        Severity::Suggestion,
        Severity::Warning,
        Severity::Error,
    ];

    /// Text used after the colon in a directive.
    pub const fn description(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Suggestion => "suggestion",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.description().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_argument(format!("unknown severity '{s}'")))
    }
}
