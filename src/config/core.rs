use crate::core::Severity;
use crate::registry::DimensionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration structure for stylemap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StylemapConfig {
    /// Severity attached to emitted directives
    #[serde(default)]
    pub severity: SeverityConfig,

    /// Evidence required before a directive is emitted
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    /// Editorconfig layout
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SeverityConfig {
    #[serde(default)]
    pub default: Severity,

    /// Per-dimension severity, keyed by editorconfig key
    #[serde(default)]
    pub overrides: BTreeMap<String, Severity>,
}

impl SeverityConfig {
    pub fn for_dimension(&self, dimension: DimensionId) -> Severity {
        self.overrides
            .get(dimension.key())
            .copied()
            .unwrap_or(self.default)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThresholdsConfig {
    #[serde(default = "default_min_occurrences")]
    pub min_occurrences: u64,

    /// Lowest consistency score a dimension may have and still be emitted
    #[serde(default)]
    pub min_consistency: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            min_occurrences: default_min_occurrences(),
            min_consistency: 0.0,
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_occurrences == 0 {
            return Err("min_occurrences must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.min_consistency) {
            return Err(format!(
                "min_consistency must be between 0.0 and 1.0, got {}",
                self.min_consistency
            ));
        }
        Ok(())
    }

    /// Whether a dimension with this much evidence should be emitted.
    pub fn admits(&self, total_occurrences: u64, consistency: f64) -> bool {
        total_occurrences >= self.min_occurrences && consistency >= self.min_consistency
    }
}

fn default_min_occurrences() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Glob of the editorconfig section header
    #[serde(default = "default_section")]
    pub section: String,

    /// Emit `root = true` before the section
    #[serde(default = "default_root")]
    pub root: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            section: default_section(),
            root: default_root(),
        }
    }
}

fn default_section() -> String {
    "*.cs".to_string()
}

fn default_root() -> bool {
    true
}
