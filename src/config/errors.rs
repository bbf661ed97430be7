//! # Configuration Errors

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Read(String),

    #[error("{0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read(_) => "DEBTDESK_CONFIG_READ",
            ConfigError::Parse(_) => "DEBTDESK_CONFIG_PARSE",
            ConfigError::Invalid(_) => "DEBTDESK_CONFIG_INVALID",
        }
    }
}
