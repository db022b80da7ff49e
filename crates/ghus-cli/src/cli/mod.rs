//! CLI for the ghus GitHub user search.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ghus_core::config::{self, GhusConfig};
use std::path::PathBuf;

use commands::{run_config, run_interactive, run_search, SearchOptions};

/// Top-level CLI for ghus.
#[derive(Debug, Parser)]
#[command(name = "ghus")]
#[command(about = "ghus: search GitHub users from the terminal", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/ghus/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Search users and print one page of results.
    Search {
        /// Search query (GitHub search syntax, e.g. "tom location:berlin").
        query: String,
        /// Page to show, starting at 1.
        #[arg(long, default_value = "1", value_name = "N")]
        page: usize,
        /// Results per page (default from config).
        #[arg(long, value_name = "K")]
        page_size: Option<usize>,
        /// Maximum attempts including the first (default from config).
        #[arg(long, value_name = "N")]
        max_attempts: Option<u32>,
        /// Delay after the first failure in milliseconds; doubles per retry.
        #[arg(long, value_name = "MS")]
        base_delay_ms: Option<u64>,
    },

    /// Interactive session: type a query, navigate pages with :n / :p / :page N.
    Interactive {
        /// Results per page (default from config).
        #[arg(long, value_name = "K")]
        page_size: Option<usize>,
    },

    /// Show the config file path and effective settings.
    Config,
}

fn load_config(path: Option<&PathBuf>) -> Result<GhusConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Search {
                query,
                page,
                page_size,
                max_attempts,
                base_delay_ms,
            } => {
                let opts = SearchOptions {
                    page,
                    page_size,
                    max_attempts,
                    base_delay_ms,
                };
                run_search(&cfg, &query, &opts).await?;
            }
            CliCommand::Interactive { page_size } => run_interactive(&cfg, page_size).await?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
