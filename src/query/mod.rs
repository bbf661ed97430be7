//! Filter/query evaluation for search screens
//!
//! Evaluates an ordered list of user-authored clauses against records and
//! returns the matching subset.
//!
//! # Evaluation Flow
//!
//! 1. No clauses: every record matches
//! 2. First clause seeds the accumulator
//! 3. Each later clause folds in with its connector, strictly left to right
//! 4. Records whose final accumulator is true are kept, in input order
//!
//! # Invariants
//!
//! - Pure: output depends only on (records, clauses)
//! - Order-preserving subset of the input
//! - Total: malformed paths, unknown operators and unparsable numbers fail
//!   the clause instead of raising an error

mod clause;
mod evaluator;

pub use clause::{Clause, Connector, Operator};
pub use evaluator::QueryEvaluator;
