//! Pipeline counters
//!
//! Counters only, monotonic, reset on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Atomic counters for pipeline activity
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    searches: AtomicU64,
    searches_rejected: AtomicU64,
    records_scanned: AtomicU64,
    records_matched: AtomicU64,
    pages_served: AtomicU64,
    exports: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub searches: u64,
    pub searches_rejected: u64,
    pub records_scanned: u64,
    pub records_matched: u64,
    pub pages_served: u64,
    pub exports: u64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluated search
    pub fn record_search(&self, scanned: usize, matched: usize) {
        self.searches.fetch_add(1, Ordering::Relaxed);
        self.records_scanned
            .fetch_add(scanned as u64, Ordering::Relaxed);
        self.records_matched
            .fetch_add(matched as u64, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.searches_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_page(&self) {
        self.pages_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_export(&self) {
        self.exports.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            searches_rejected: self.searches_rejected.load(Ordering::Relaxed),
            records_scanned: self.records_scanned.load(Ordering::Relaxed),
            records_matched: self.records_matched.load(Ordering::Relaxed),
            pages_served: self.pages_served.load(Ordering::Relaxed),
            exports: self.exports.load(Ordering::Relaxed),
        }
    }
}
