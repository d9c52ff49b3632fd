//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Configuration load
//! 2. Dataset load
//! 3. Engine and HTTP server construction
//! 4. Serving until Ctrl+C

use std::path::Path;
use std::sync::Arc;

use crate::dataset::Dataset;
use crate::http_server::HttpServer;
use crate::identity::FixedIdentity;
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::search::{QuerySpec, SearchEngine, SearchResult};

use super::args::{Command, SearchArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Search { config, filters } => search(config.as_deref(), &filters),
    }
}

/// Start the HTTP search server
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = serve_config(config_path, port)?;
    let port_str = config.http.port.to_string();
    let budget_str = config.latency_budget_ms.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("port", port_str.as_str()),
            ("latency_budget_ms", budget_str.as_str()),
        ],
    );

    let dataset = match config.load_dataset() {
        Ok(dataset) => dataset,
        Err(e) => {
            log_event_with_fields(Event::DatasetFailed, &[("reason", e.message())]);
            return Err(e);
        }
    };

    let metrics = Arc::new(MetricsRegistry::new());
    metrics.set_records_loaded(dataset.len() as u64);
    let records_str = dataset.len().to_string();
    log_event_with_fields(Event::DatasetLoaded, &[("records", records_str.as_str())]);

    let engine = build_engine(&config, dataset);
    let server = HttpServer::with_parts(
        config.http.clone(),
        engine,
        Arc::new(FixedIdentity::new(config.identity.clone())),
        metrics,
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Load the config and apply the `--port` override
fn serve_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<Config> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.http = config.http.with_port(port);
    }
    Ok(config)
}

/// Run one search and print the results
///
/// Failures are written to stdout as an error object and also returned.
pub fn search(config_path: Option<&Path>, args: &SearchArgs) -> CliResult<()> {
    match execute_search(config_path, args) {
        Ok(results) => write_response(serde_json::to_value(results)?),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Load config and dataset, then run the query described by `args`
pub fn execute_search(
    config_path: Option<&Path>,
    args: &SearchArgs,
) -> CliResult<Vec<SearchResult>> {
    let config = Config::load_or_default(config_path)?;
    let dataset = config.load_dataset()?;
    let engine = build_engine(&config, dataset);

    let query = build_query(&config, args);
    Ok(engine.search(&query)?)
}

fn build_engine(config: &Config, dataset: Dataset) -> SearchEngine {
    SearchEngine::new(Arc::new(dataset)).with_budget(config.latency_budget())
}

fn build_query(config: &Config, args: &SearchArgs) -> QuerySpec {
    QuerySpec {
        keyword: args.keywords.clone().filter(|k| !k.is_empty()),
        category: args.category.clone().filter(|c| !c.is_empty()),
        tags: args.tags.clone(),
        only_public: !args.include_private,
        identity: args
            .identity
            .clone()
            .unwrap_or_else(|| config.identity.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn ids(results: &[SearchResult]) -> Vec<u64> {
        results.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_serve_port_override_keeps_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recordsearch.json");
        fs::write(
            &path,
            json!({"http": {"host": "127.0.0.1", "port": 8100,
                            "cors_origins": ["http://localhost:5173"]}})
            .to_string(),
        )
        .unwrap();

        let config = serve_config(Some(&path), Some(9001)).unwrap();
        assert_eq!(config.http.socket_addr(), "127.0.0.1:9001");
        assert_eq!(config.http.cors_origins, vec!["http://localhost:5173"]);

        let config = serve_config(Some(&path), None).unwrap();
        assert_eq!(config.http.port, 8100);
    }

    #[test]
    fn test_search_uses_configured_identity() {
        let args = SearchArgs {
            include_private: true,
            ..Default::default()
        };
        let results = execute_search(None, &args).unwrap();
        assert_eq!(ids(&results), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_identity_override() {
        let args = SearchArgs {
            identity: Some("bob".to_string()),
            include_private: true,
            ..Default::default()
        };
        let results = execute_search(None, &args).unwrap();
        assert_eq!(ids(&results), vec![1, 2]);
    }

    #[test]
    fn test_search_filters() {
        let args = SearchArgs {
            keywords: Some("api".to_string()),
            category: Some("EDUCATION".to_string()),
            tags: vec!["python".to_string()],
            ..Default::default()
        };
        let results = execute_search(None, &args).unwrap();
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_search_blank_identity_fails() {
        let args = SearchArgs {
            identity: Some("".to_string()),
            ..Default::default()
        };
        let err = execute_search(None, &args).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::SearchFailed);
    }

    #[test]
    fn test_search_with_bad_dataset_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("recordsearch.json");
        fs::write(
            &config_path,
            json!({"dataset_path": dir.path().join("missing.json")}).to_string(),
        )
        .unwrap();

        let err = execute_search(Some(&config_path), &SearchArgs::default()).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::DatasetError);
    }

    #[test]
    fn test_empty_filters_are_absent() {
        let args = SearchArgs {
            keywords: Some(String::new()),
            category: Some(String::new()),
            ..Default::default()
        };
        let query = build_query(&Config::default(), &args);
        assert!(query.keyword.is_none());
        assert!(query.category.is_none());
        assert!(query.only_public);
    }
}
