//! # Pagination Errors

use thiserror::Error;

/// Result type for pagination
pub type PaginationResult<T> = Result<T, PaginationError>;

/// Pagination errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page size or page number out of domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PaginationError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            PaginationError::InvalidArgument(_) => "DEBTDESK_INVALID_ARGUMENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_and_display() {
        let err = PaginationError::InvalidArgument("page_size must be > 0".into());
        assert_eq!(err.code(), "DEBTDESK_INVALID_ARGUMENT");
        assert!(err.to_string().contains("page_size"));
    }
}
