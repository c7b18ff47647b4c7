pub mod setup;

use crate::core::Severity;
use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stylemap")]
#[command(about = "Infer editorconfig code-style directives from style observations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate observation files and emit style directives
    Analyze {
        /// Observation files or directories containing *.jsonl files
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Configuration file (defaults to the nearest .stylemap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "editor-config")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Severity for every directive, overriding the configuration default
        #[arg(short, long, value_enum)]
        severity: Option<Severity>,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0", env = "STYLEMAP_JOBS")]
        jobs: usize,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_defaults() {
        let cli = Cli::try_parse_from(["stylemap", "analyze", "units"]).unwrap();
        match cli.command {
            Commands::Analyze {
                paths,
                format,
                severity,
                jobs,
                ..
            } => {
                assert_eq!(paths, vec![PathBuf::from("units")]);
                assert_eq!(format, OutputFormat::EditorConfig);
                assert_eq!(severity, None);
                assert_eq!(jobs, 0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_severity_and_format() {
        let cli = Cli::try_parse_from([
            "stylemap", "analyze", "a.jsonl", "-s", "error", "-f", "json", "-vv",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                format,
                severity,
                verbosity,
                ..
            } => {
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(severity, Some(Severity::Error));
                assert_eq!(verbosity, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_analyze_requires_path() {
        assert!(Cli::try_parse_from(["stylemap", "analyze"]).is_err());
    }
}
