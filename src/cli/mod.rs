//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load config and dataset, then serve HTTP
//! - search: One-shot search printed as JSON

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, SearchArgs};
pub use commands::{execute_search, run, run_command, search, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
