//! Turning an aggregated registry into configuration text.

use crate::config::{OutputConfig, StylemapConfig};
use crate::core::{Result, Severity};
use crate::registry::{DimensionId, StyleRegistry};
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    EditorConfig,
    Json,
}

/// Evidence and outcome for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionSummary {
    pub dimension: DimensionId,
    pub total_occurrences: u64,
    pub consistency: f64,
    pub severity: Severity,
    /// Directive line; `None` when there was no evidence or a threshold
    /// filtered it out.
    pub directive: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleReport {
    pub units: usize,
    pub dimensions: Vec<DimensionSummary>,
}

impl StyleReport {
    pub fn build(registry: &StyleRegistry, config: &StylemapConfig, units: usize) -> Self {
        let dimensions = DimensionId::all()
            .map(|dimension| summarize(registry, config, dimension))
            .collect();
        Self { units, dimensions }
    }

    pub fn directives(&self) -> impl Iterator<Item = &str> {
        self.dimensions
            .iter()
            .filter_map(|summary| summary.directive.as_deref())
    }

    pub fn to_editorconfig(&self, output: &OutputConfig) -> String {
        let mut text = String::new();
        if output.root {
            text.push_str("root = true\n\n");
        }
        text.push_str(&format!("[{}]\n", output.section));
        for directive in self.directives() {
            text.push_str(directive);
            text.push('\n');
        }
        text
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: OutputFormat, output: &OutputConfig) -> Result<String> {
        match format {
            OutputFormat::EditorConfig => Ok(self.to_editorconfig(output)),
            OutputFormat::Json => self.to_json(),
        }
    }
}

fn summarize(
    registry: &StyleRegistry,
    config: &StylemapConfig,
    dimension: DimensionId,
) -> DimensionSummary {
    let total_occurrences = registry.total_occurrences(dimension);
    let consistency = registry.consistency(dimension);
    let severity = config.severity.for_dimension(dimension);
    let directive = Some(registry.get_setting(dimension, severity))
        .filter(|line| !line.is_empty())
        .filter(|_| config.thresholds.admits(total_occurrences, consistency));

    DimensionSummary {
        dimension,
        total_occurrences,
        consistency,
        severity,
        directive,
    }
}
