//! Fixed-size pagination of filtered sets
//!
//! Pages are 1-based. A page past the end is empty rather than an error;
//! only a zero page size or page number is rejected.

mod errors;
mod paginator;

pub use errors::{PaginationError, PaginationResult};
pub use paginator::{Page, Paginator};
