//! # Pipeline Errors

use thiserror::Error;

use crate::export::ExportError;
use crate::paginate::PaginationError;
use crate::store::StoreError;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("Page size {0} exceeds maximum {1}")]
    PageSizeExceeded(usize, usize),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl PipelineError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::Pagination(e) => e.code(),
            PipelineError::PageSizeExceeded(_, _) => "DEBTDESK_INVALID_ARGUMENT",
            PipelineError::Store(e) => e.code(),
            PipelineError::Export(_) => "DEBTDESK_EXPORT_FAILED",
        }
    }

    /// Whether the caller sent bad arguments
    pub fn is_invalid_argument(&self) -> bool {
        self.code() == "DEBTDESK_INVALID_ARGUMENT"
    }
}
