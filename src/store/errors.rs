//! # Record Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    // Remote backend errors
    #[error("Remote store returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "DEBTDESK_STORE_NOT_FOUND",
            StoreError::Remote { .. } => "DEBTDESK_STORE_REMOTE",
            StoreError::Transport(_) => "DEBTDESK_STORE_TRANSPORT",
            StoreError::Decode(_) => "DEBTDESK_STORE_DECODE",
            StoreError::Internal(_) => "DEBTDESK_STORE_INTERNAL",
        }
    }
}
