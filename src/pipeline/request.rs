//! Search request and response types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregationRequest, Summary};
use crate::paginate::Page;
use crate::query::Clause;
use crate::record::Record;

/// One search from the Command Center screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub clauses: Vec<Clause>,

    /// Grouped breakdowns for the summary panel
    #[serde(default)]
    pub group_by: Vec<AggregationRequest>,

    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: usize,

    /// Falls back to the configured default
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Anchor for age metrics; today when absent
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

fn default_page() -> usize {
    1
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            clauses: Vec::new(),
            group_by: Vec::new(),
            page: default_page(),
            page_size: None,
            as_of: None,
        }
    }
}

impl SearchRequest {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self {
            clauses,
            ..Self::default()
        }
    }

    pub fn with_group_by(mut self, request: AggregationRequest) -> Self {
        self.group_by.push(request);
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = Some(page_size);
        self
    }

    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }
}

/// Summary and page computed from one filtered set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub summary: Summary,
    pub page: Page<Record>,
}
