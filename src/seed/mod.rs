//! Deterministic mock-record generation
//!
//! Mock mode fills the in-memory store with generated debtor records. The
//! same seed and count always produce the same records, so demo data and
//! test fixtures are reproducible.

mod generator;

pub use generator::{RecordGenerator, ANCHOR_DATE};
