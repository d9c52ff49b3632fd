//! Service configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "http": { "host": "0.0.0.0", "port": 8000, "cors_origins": [] },
//!   "identity": "alice",
//!   "latency_budget_ms": 2000,
//!   "dataset_path": null
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::http_server::HttpServerConfig;
use crate::identity::DEFAULT_IDENTITY;
use crate::search::DEFAULT_LATENCY_BUDGET;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Stand-in identity for every HTTP request
    #[serde(default = "default_identity")]
    pub identity: String,

    /// Latency budget per search in milliseconds (default 2000)
    #[serde(default = "default_latency_budget_ms")]
    pub latency_budget_ms: u64,

    /// JSON array of records; the seed dataset is used when absent
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
}

fn default_identity() -> String {
    DEFAULT_IDENTITY.to_string()
}

fn default_latency_budget_ms() -> u64 {
    DEFAULT_LATENCY_BUDGET.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            identity: default_identity(),
            latency_budget_ms: default_latency_budget_ms(),
            dataset_path: None,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.latency_budget_ms == 0 {
            return Err(CliError::config_error("latency_budget_ms must be > 0"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
        }

        if let Some(origin) = self.http.invalid_origin() {
            return Err(CliError::config_error(format!(
                "http.cors_origins has invalid origin '{}'",
                origin
            )));
        }

        Ok(())
    }

    pub fn latency_budget(&self) -> Duration {
        Duration::from_millis(self.latency_budget_ms)
    }

    /// Load the configured dataset, or the seed records
    pub fn load_dataset(&self) -> CliResult<Dataset> {
        match &self.dataset_path {
            Some(path) => Ok(Dataset::load(path)?),
            None => Ok(Dataset::seed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, value: serde_json::Value) -> PathBuf {
        let path = dir.path().join("recordsearch.json");
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn test_config_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({}));

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.identity, "alice");
        assert_eq!(config.latency_budget(), Duration::from_secs(2));
        assert_eq!(config.http.port, 8000);
    }

    #[test]
    fn test_config_rejects_zero_budget() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({"latency_budget_ms": 0}));
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_config_rejects_zero_port() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({"http": {"port": 0}}));
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_config_rejects_invalid_cors_origin() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            json!({"http": {"cors_origins": ["http://localhost:5173", "not an origin"]}}),
        );

        let err = Config::load(&path).unwrap_err();
        assert!(err.message().contains("not an origin"));
    }

    #[test]
    fn test_config_accepts_valid_cors_origins() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            json!({"http": {"cors_origins": ["http://localhost:5173", "https://app.example"]}}),
        );
        assert_eq!(Config::load(&path).unwrap().http.cors_origins.len(), 2);
    }

    #[test]
    fn test_config_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ nope").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load(Path::new("/nonexistent/recordsearch.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_seed_dataset_when_no_path() {
        let dataset = Config::default().load_dataset().unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_dataset_from_file() {
        let dir = TempDir::new().unwrap();
        let dataset_path = dir.path().join("records.json");
        fs::write(
            &dataset_path,
            json!([
                {"id": 5, "title": "Rust Book", "category": "Education",
                 "tags": ["rust"], "is_public": true, "owner": "carol"}
            ])
            .to_string(),
        )
        .unwrap();
        let path = write_config(&dir, json!({"dataset_path": dataset_path}));

        let config = Config::load(&path).unwrap();
        let dataset = config.load_dataset().unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].owner, "carol");
    }
}
