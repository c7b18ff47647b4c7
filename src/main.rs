use anyhow::Result;
use clap::Parser;
use stylemap::cli::setup::init_tracing;
use stylemap::cli::{Cli, Commands};
use stylemap::commands::{handle_analyze, init_config, AnalyzeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            paths,
            config,
            format,
            output,
            severity,
            jobs,
            verbosity,
        } => {
            init_tracing(verbosity);
            handle_analyze(AnalyzeConfig {
                paths,
                config,
                format,
                output,
                severity,
                jobs,
            })
        }
        Commands::Init { force } => {
            init_tracing(0);
            init_config(force)
        }
    }
}
