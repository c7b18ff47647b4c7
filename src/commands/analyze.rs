use crate::aggregation::aggregate_units;
use crate::cli::setup::configure_thread_pool;
use crate::config::{load_config, load_config_from, StylemapConfig};
use crate::core::Severity;
use crate::io::{self, find_observation_files, OutputFormat, StyleReport};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub severity: Option<Severity>,
    pub jobs: usize,
}

fn resolve_config(config: &AnalyzeConfig) -> Result<StylemapConfig> {
    let mut resolved = match &config.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    if let Some(severity) = config.severity {
        resolved.severity.default = severity;
        resolved.severity.overrides.clear();
    }
    Ok(resolved)
}

/// Aggregate every observation file under the given paths and write the
/// resulting report.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    configure_thread_pool(config.jobs);
    let style_config = resolve_config(&config)?;

    let files = find_observation_files(&config.paths)?;
    if files.is_empty() {
        anyhow::bail!("No observation files found");
    }
    tracing::info!("Found {} observation files", files.len());

    let aggregate = aggregate_units(&files);
    if aggregate.analyzed == 0 {
        anyhow::bail!(
            "All {} observation files failed to load",
            aggregate.skipped.len()
        );
    }

    let report = StyleReport::build(&aggregate.registry, &style_config, aggregate.analyzed);
    let rendered = report.render(config.format, &style_config.output)?;

    match &config.output {
        Some(path) => io::write_file(path, &rendered)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}
