//! CLI for the linkscrub clipboard URL cleaner.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkscrub_core::config;
use linkscrub_core::pipeline::Cleaner;
use linkscrub_core::rules::Ruleset;

use commands::{run_clean, run_status, run_watch};

/// Top-level CLI for the linkscrub clipboard URL cleaner.
#[derive(Debug, Parser)]
#[command(name = "linkscrub")]
#[command(about = "linkscrub: strip tracking parameters from copied URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Watch the clipboard and clean copied URLs in place.
    Run {
        /// Override the configured poll interval, in milliseconds.
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
    },

    /// Run a single URL through the cleaner and print the result.
    Clean {
        /// HTTP/HTTPS URL to normalize.
        url: String,
    },

    /// Show the status of the most recent watcher run.
    Status,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let cleaner = Cleaner::new(Ruleset::from_config(&cfg));

        match cli.command {
            CliCommand::Run { interval_ms } => {
                if let Some(ms) = interval_ms {
                    cfg.poll_interval_ms = ms;
                }
                run_watch(&cfg, &cleaner).await?;
            }
            CliCommand::Clean { url } => run_clean(&cleaner, &url)?,
            CliCommand::Status => run_status()?,
        }

        Ok(())
    }
}
