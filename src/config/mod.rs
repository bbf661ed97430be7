//! Configuration for debtdesk
//!
//! Loaded once at startup from a JSON file. Every field has a default, so
//! `{}` is a valid configuration (in-memory store with generated records).
//!
//! ```json
//! {
//!   "store": { "backend": "memory", "seed": 42, "seed_count": 250 },
//!   "pipeline": { "default_page_size": 25, "max_page_size": 500, "top_n": 5 },
//!   "log_level": "info"
//! }
//! ```

mod errors;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::seed::RecordGenerator;
use crate::store::{MemoryStore, RecordStore, RemoteStore, StoreResult};

pub use errors::{ConfigError, ConfigResult};

/// Record store selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Ephemeral store filled with generated records
    Memory {
        #[serde(default = "default_seed")]
        seed: u64,
        #[serde(default = "default_seed_count")]
        seed_count: usize,
    },
    /// Hosted REST backend
    Remote {
        url: String,
        api_key: String,
        #[serde(default = "default_table")]
        table: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

fn default_seed() -> u64 {
    42
}
fn default_seed_count() -> usize {
    250
}
fn default_table() -> String {
    "debts".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Memory {
            seed: default_seed(),
            seed_count: default_seed_count(),
        }
    }
}

impl StoreConfig {
    /// Opens the configured store
    pub fn open(&self) -> StoreResult<Arc<dyn RecordStore>> {
        match self {
            StoreConfig::Memory { seed, seed_count } => {
                let records = RecordGenerator::new(*seed).generate(*seed_count);
                Ok(Arc::new(MemoryStore::from_records(records)))
            }
            StoreConfig::Remote {
                url,
                api_key,
                table,
                timeout_secs,
            } => Ok(Arc::new(RemoteStore::new(
                url.as_str(),
                api_key.as_str(),
                table.as_str(),
                Duration::from_secs(*timeout_secs),
            )?)),
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if let StoreConfig::Remote {
            url,
            api_key,
            table,
            timeout_secs,
        } = self
        {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "store.url must be an http(s) URL, got '{}'",
                    url
                )));
            }
            if api_key.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "store.api_key is required for the remote backend".to_string(),
                ));
            }
            if table.trim().is_empty() {
                return Err(ConfigError::Invalid("store.table must not be empty".to_string()));
            }
            if *timeout_secs == 0 {
                return Err(ConfigError::Invalid("store.timeout_secs must be > 0".to_string()));
            }
        }
        Ok(())
    }
}

/// Query pipeline settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Page size when a request does not name one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Largest page size a request may ask for
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Groups kept in ranked displays
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Numeric field summed by the aggregator
    #[serde(default = "default_value_field")]
    pub value_field: String,
}

fn default_page_size() -> usize {
    25
}
fn default_max_page_size() -> usize {
    500
}
fn default_top_n() -> usize {
    crate::aggregate::DEFAULT_TOP_N
}
fn default_value_field() -> String {
    "balance".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            top_n: default_top_n(),
            value_field: default_value_field(),
        }
    }
}

impl PipelineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "pipeline.default_page_size must be > 0".to_string(),
            ));
        }
        if self.max_page_size < self.default_page_size {
            return Err(ConfigError::Invalid(format!(
                "pipeline.max_page_size ({}) must be >= default_page_size ({})",
                self.max_page_size, self.default_page_size
            )));
        }
        if self.top_n == 0 {
            return Err(ConfigError::Invalid("pipeline.top_n must be > 0".to_string()));
        }
        if self.value_field.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "pipeline.value_field must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Minimum log severity (trace, info, warn, error)
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::Read(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all sections
    pub fn validate(&self) -> ConfigResult<()> {
        self.store.validate()?;
        self.pipeline.validate()?;
        self.severity()?;
        Ok(())
    }

    /// Resolved log severity
    pub fn severity(&self) -> ConfigResult<Severity> {
        match &self.log_level {
            None => Ok(Severity::Info),
            Some(level) => Severity::parse(level)
                .ok_or_else(|| ConfigError::Invalid(format!("Unknown log_level '{}'", level))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pipeline.default_page_size, 25);
        assert_eq!(config.pipeline.top_n, 5);
        assert!(matches!(
            config.store,
            StoreConfig::Memory { seed: 42, seed_count: 250 }
        ));
    }

    #[test]
    fn test_remote_config() {
        let config = Config::from_json(
            r#"{"store": {"backend": "remote", "url": "https://db.example.com", "api_key": "k"}}"#,
        )
        .unwrap();
        match config.store {
            StoreConfig::Remote { table, timeout_secs, .. } => {
                assert_eq!(table, "debts");
                assert_eq!(timeout_secs, 30);
            }
            other => panic!("unexpected store config: {:?}", other),
        }
    }

    #[test]
    fn test_remote_requires_api_key() {
        let result = Config::from_json(
            r#"{"store": {"backend": "remote", "url": "https://db.example.com", "api_key": " "}}"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_remote_missing_url_is_parse_error() {
        let result = Config::from_json(r#"{"store": {"backend": "remote", "api_key": "k"}}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_remote_rejects_non_http_url() {
        let result = Config::from_json(
            r#"{"store": {"backend": "remote", "url": "ftp://x", "api_key": "k"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_validation() {
        assert!(Config::from_json(r#"{"pipeline": {"default_page_size": 0}}"#).is_err());
        assert!(Config::from_json(
            r#"{"pipeline": {"default_page_size": 50, "max_page_size": 10}}"#
        )
        .is_err());
        assert!(Config::from_json(r#"{"pipeline": {"top_n": 0}}"#).is_err());
    }

    #[test]
    fn test_log_level() {
        let config = Config::from_json(r#"{"log_level": "warn"}"#).unwrap();
        assert_eq!(config.severity().unwrap(), Severity::Warn);
        assert!(Config::from_json(r#"{"log_level": "loud"}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"store": {{"backend": "memory", "seed_count": 3}}}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        let store = config.store.open().unwrap();
        assert_eq!(store.len().unwrap(), 3);
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/debtdesk.json"));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
