//! CLI for the shellfetch archive fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shellfetch_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_urls};

/// Top-level CLI for fetching versioned shell application archives.
#[derive(Debug, Parser)]
#[command(name = "shellfetch")]
#[command(about = "Download a versioned shell app archive with staging fallback", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the archive for a shell version.
    Fetch {
        /// Shell version to download (e.g. "1005.0.0").
        version: String,

        /// Directory to write the archive into (default: current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print the resolved URLs and archive filename without downloading.
    Urls {
        /// Shell version to resolve.
        version: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                version,
                output_dir,
            } => {
                let dir = match output_dir {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                run_fetch(&cfg, &version, &dir).await?;
            }
            CliCommand::Urls { version } => run_urls(&cfg, &version)?,
        }

        Ok(())
    }
}
