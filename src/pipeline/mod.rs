//! Command Center search pipeline
//!
//! Ties the subsystems together for the search and reporting screens:
//!
//! 1. Load records from the configured store
//! 2. Evaluate clauses once
//! 3. Summarize the filtered set (preview panel)
//! 4. Paginate the same filtered set (results table)
//!
//! Preview and results always read one filtered set, so their counts agree.

mod command_center;
mod errors;
mod request;

pub use command_center::CommandCenter;
pub use errors::{PipelineError, PipelineResult};
pub use request::{SearchRequest, SearchResponse};
