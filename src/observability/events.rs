//! Observable events

use std::fmt;

use super::logger::Severity;

/// Observable events in debtdesk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file loaded and validated
    ConfigLoaded,

    // Storage
    /// Record store opened
    StoreOpened,
    /// Record store call failed
    StoreFailed,

    // Pipeline
    /// Search (evaluate + summarize + paginate) complete
    SearchComplete,
    /// Search rejected before evaluation
    SearchRejected,

    // Outputs
    /// CSV export written
    ExportComplete,
    /// Mock records generated
    SeedComplete,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::StoreFailed => "STORE_FAILED",
            Event::SearchComplete => "SEARCH_COMPLETE",
            Event::SearchRejected => "SEARCH_REJECTED",
            Event::ExportComplete => "EXPORT_COMPLETE",
            Event::SeedComplete => "SEED_COMPLETE",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreFailed => Severity::Error,
            Event::SearchRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
