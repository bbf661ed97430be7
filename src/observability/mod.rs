//! Observability subsystem for debtdesk
//!
//! - Structured logging (one JSON object per line, on stderr)
//! - Pipeline counters
//! - Typed lifecycle events
//!
//! Observability is read-only: it never changes what the pipeline returns.
//!
//! # Usage
//!
//! ```ignore
//! use debtdesk::observability::{log_event_with_fields, Event, PipelineMetrics};
//!
//! log_event_with_fields(Event::SearchComplete, &[("matched", "42")]);
//!
//! let metrics = PipelineMetrics::new();
//! metrics.record_search(250, 42);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, PipelineMetrics};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
