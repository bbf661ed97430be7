//! Aggregation of filtered record sets into summary statistics
//!
//! Feeds the summary/preview panels: totals, averages, grouped breakdowns
//! and top-N rankings over whatever the query evaluator kept.
//!
//! # Invariants
//!
//! - Sum of every group's sum equals the grand total
//! - Groups rank by sum descending; ties keep first-seen order
//! - Derived metrics are computed from the records, never synthesized

mod aggregator;
mod summary;

pub use aggregator::{Aggregator, DEFAULT_TOP_N};
pub use summary::{
    AggregationRequest, GroupStat, GroupedBreakdown, Metric, Summary, MISSING_GROUP_KEY,
};
