//! CLI argument definitions using clap
//!
//! Commands:
//! - recordsearch serve [--config <path>] [--port <port>]
//! - recordsearch search [--config <path>] [--identity <id>] [filters...]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// recordsearch - permission-aware search over an in-memory record set
#[derive(Parser, Debug)]
#[command(name = "recordsearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP search server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single search and print the results as JSON
    Search {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        filters: SearchArgs,
    },
}

/// Filters accepted by the `search` command
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Requesting identity (defaults to the configured identity)
    #[arg(long)]
    pub identity: Option<String>,

    /// Case-insensitive substring of title or tags
    #[arg(long)]
    pub keywords: Option<String>,

    /// Case-insensitive category
    #[arg(long)]
    pub category: Option<String>,

    /// Required tag; repeat for several
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Include private records the requester owns
    #[arg(long)]
    pub include_private: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
