//! Command Center facade over store, evaluator, aggregator and paginator

use std::io::Write;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::aggregate::{Aggregator, Summary};
use crate::config::PipelineConfig;
use crate::export::CsvExporter;
use crate::observability::{log_event_with_fields, Event, MetricsSnapshot, PipelineMetrics};
use crate::paginate::Paginator;
use crate::query::QueryEvaluator;
use crate::record::Record;
use crate::store::RecordStore;

use super::errors::{PipelineError, PipelineResult};
use super::request::{SearchRequest, SearchResponse};

/// Runs searches against one record store
pub struct CommandCenter {
    store: Arc<dyn RecordStore>,
    aggregator: Aggregator,
    config: PipelineConfig,
    metrics: PipelineMetrics,
}

impl CommandCenter {
    /// Create a command center over `store`
    pub fn new(store: Arc<dyn RecordStore>, config: PipelineConfig) -> Self {
        let aggregator = Aggregator::new(config.value_field.as_str(), config.top_n);
        Self {
            store,
            aggregator,
            config,
            metrics: PipelineMetrics::new(),
        }
    }

    /// Evaluates once, then summarizes and paginates the same filtered set
    pub fn search(&self, request: &SearchRequest) -> PipelineResult<SearchResponse> {
        let page_size = self.page_size(request)?;
        let records = self.load()?;
        let filtered = self.filter(&records, request);

        let summary = self.summarize_filtered(&filtered, request);
        let page = Paginator::paginate(&filtered, request.page, page_size)
            .map_err(|e| self.reject(e.into()))?
            .map(Record::clone);

        self.metrics.record_page();
        log_event_with_fields(
            Event::SearchComplete,
            &[
                ("clauses", &request.clauses.len().to_string()),
                ("matched", &filtered.len().to_string()),
                ("page", &page.page_number.to_string()),
                ("scanned", &records.len().to_string()),
            ],
        );

        Ok(SearchResponse { summary, page })
    }

    /// Summary only, for preview panels
    pub fn summarize(&self, request: &SearchRequest) -> PipelineResult<Summary> {
        let records = self.load()?;
        let filtered = self.filter(&records, request);
        Ok(self.summarize_filtered(&filtered, request))
    }

    /// Writes the full filtered set as CSV. Returns the row count.
    pub fn export<W: Write>(&self, request: &SearchRequest, writer: W) -> PipelineResult<usize> {
        let records = self.load()?;
        let filtered = self.filter(&records, request);
        let rows = CsvExporter::write(&filtered, writer)?;

        self.metrics.record_export();
        log_event_with_fields(Event::ExportComplete, &[("rows", &rows.to_string())]);
        Ok(rows)
    }

    /// Current pipeline counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn page_size(&self, request: &SearchRequest) -> PipelineResult<usize> {
        let size = request.page_size.unwrap_or(self.config.default_page_size);
        if size > self.config.max_page_size {
            return Err(self.reject(PipelineError::PageSizeExceeded(
                size,
                self.config.max_page_size,
            )));
        }
        Ok(size)
    }

    fn load(&self) -> PipelineResult<Vec<Record>> {
        self.store.load_all().map_err(|e| {
            log_event_with_fields(
                Event::StoreFailed,
                &[("backend", self.store.backend_name()), ("error", &e.to_string())],
            );
            PipelineError::from(e)
        })
    }

    fn filter<'a>(&self, records: &'a [Record], request: &SearchRequest) -> Vec<&'a Record> {
        let filtered = QueryEvaluator::evaluate(records, &request.clauses);
        self.metrics.record_search(records.len(), filtered.len());
        filtered
    }

    fn summarize_filtered(&self, filtered: &[&Record], request: &SearchRequest) -> Summary {
        let as_of = request.as_of.unwrap_or_else(today);
        self.aggregator.summarize(filtered, &request.group_by, as_of)
    }

    fn reject(&self, err: PipelineError) -> PipelineError {
        self.metrics.record_rejected();
        log_event_with_fields(Event::SearchRejected, &[("reason", &err.to_string())]);
        err
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
