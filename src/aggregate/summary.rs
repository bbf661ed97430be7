//! Aggregation request and result types

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::record::FieldPath;

/// Group key used for records that lack the grouping field
pub const MISSING_GROUP_KEY: &str = "(none)";

/// Per-group figure reported in [`GroupStat::value`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Sum,
    Average,
    Count,
}

/// One grouped breakdown to compute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationRequest {
    /// Field whose value becomes the group key
    #[serde(alias = "groupByField")]
    pub group_by: FieldPath,

    #[serde(default)]
    pub metric: Metric,
}

impl AggregationRequest {
    pub fn new(group_by: impl Into<FieldPath>, metric: Metric) -> Self {
        Self {
            group_by: group_by.into(),
            metric,
        }
    }

    /// Sum breakdown by the given field
    pub fn sum_by(group_by: impl Into<FieldPath>) -> Self {
        Self::new(group_by, Metric::Sum)
    }
}

/// Statistics for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStat {
    pub key: String,
    pub count: usize,
    pub sum: f64,
    /// Share of the grand total, 0..=100
    pub percentage: f64,
    /// The requested metric for this group
    pub value: f64,
}

impl GroupStat {
    pub(crate) fn new(key: String) -> Self {
        Self {
            key,
            count: 0,
            sum: 0.0,
            percentage: 0.0,
            value: 0.0,
        }
    }

    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Groups for one request, ranked by sum
///
/// Serializes the full ranked `groups` next to `top`, the first `top_n`
/// of them.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBreakdown {
    pub field: FieldPath,
    pub metric: Metric,
    /// Every group, ranked
    pub groups: Vec<GroupStat>,
    pub top_n: usize,
}

impl GroupedBreakdown {
    /// Ranked groups truncated to `top_n`
    pub fn top(&self) -> &[GroupStat] {
        let end = self.top_n.min(self.groups.len());
        &self.groups[..end]
    }

    /// Looks up a group by key
    pub fn get(&self, key: &str) -> Option<&GroupStat> {
        self.groups.iter().find(|g| g.key == key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for GroupedBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GroupedBreakdown", 5)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("metric", &self.metric)?;
        state.serialize_field("groups", &self.groups)?;
        state.serialize_field("top", self.top())?;
        state.serialize_field("top_n", &self.top_n)?;
        state.end()
    }
}

/// Summary of a filtered set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_count: usize,
    /// Sum of the aggregated numeric field
    pub total: f64,
    /// `total / total_count`, or 0 for an empty set
    pub average: f64,
    /// Mean days between charge-off and the as-of date
    pub avg_charge_off_age_days: Option<f64>,
    pub breakdowns: Vec<GroupedBreakdown>,
}

impl Summary {
    /// Finds the breakdown for a grouping field
    pub fn breakdown(&self, field: &str) -> Option<&GroupedBreakdown> {
        self.breakdowns.iter().find(|b| b.field.as_str() == field)
    }
}
