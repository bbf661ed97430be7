//! Single-pass aggregation over filtered records

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::record::{FieldPath, Record};

use super::summary::{
    AggregationRequest, GroupStat, GroupedBreakdown, Metric, Summary, MISSING_GROUP_KEY,
};

/// Number of groups shown in ranked displays
pub const DEFAULT_TOP_N: usize = 5;

/// Reduces record sets into [`Summary`] values
#[derive(Debug, Clone)]
pub struct Aggregator {
    value_field: FieldPath,
    top_n: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new("balance", DEFAULT_TOP_N)
    }
}

impl Aggregator {
    /// Creates an aggregator summing `value_field`
    pub fn new(value_field: impl Into<FieldPath>, top_n: usize) -> Self {
        Self {
            value_field: value_field.into(),
            top_n,
        }
    }

    /// Summarizes `records` with one breakdown per request.
    ///
    /// `as_of` anchors the charge-off age computation.
    pub fn summarize(
        &self,
        records: &[&Record],
        requests: &[AggregationRequest],
        as_of: NaiveDate,
    ) -> Summary {
        let total_count = records.len();
        let total = self.total(records);
        let average = if total_count == 0 {
            0.0
        } else {
            total / total_count as f64
        };

        let breakdowns = requests
            .iter()
            .map(|request| self.group_with_total(records, request, total))
            .collect();

        Summary {
            total_count,
            total,
            average,
            avg_charge_off_age_days: Self::charge_off_age_days(records, as_of),
            breakdowns,
        }
    }

    /// Computes a single grouped breakdown
    pub fn group(&self, records: &[&Record], request: &AggregationRequest) -> GroupedBreakdown {
        let total = self.total(records);
        self.group_with_total(records, request, total)
    }

    /// Sum of the value field; missing or non-numeric values count as zero
    pub fn total(&self, records: &[&Record]) -> f64 {
        records.iter().map(|r| self.value_of(r)).sum()
    }

    /// Mean age in days of charge-offs relative to `as_of`
    pub fn charge_off_age_days(records: &[&Record], as_of: NaiveDate) -> Option<f64> {
        let ages: Vec<i64> = records
            .iter()
            .filter_map(|r| r.charge_off_date)
            .map(|date| (as_of - date).num_days())
            .collect();

        if ages.is_empty() {
            return None;
        }
        Some(ages.iter().sum::<i64>() as f64 / ages.len() as f64)
    }

    fn value_of(&self, record: &Record) -> f64 {
        record.resolve(&self.value_field).to_number().unwrap_or(0.0)
    }

    fn group_with_total(
        &self,
        records: &[&Record],
        request: &AggregationRequest,
        grand_total: f64,
    ) -> GroupedBreakdown {
        // First-seen order is kept in `groups`; `index` maps key -> slot
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<GroupStat> = Vec::new();

        for record in records {
            let key = record
                .resolve(&request.group_by)
                .to_text()
                .unwrap_or_else(|| MISSING_GROUP_KEY.to_string());

            let slot = match index.get(&key) {
                Some(&slot) => slot,
                None => {
                    groups.push(GroupStat::new(key.clone()));
                    index.insert(key, groups.len() - 1);
                    groups.len() - 1
                }
            };

            let group = &mut groups[slot];
            group.count += 1;
            group.sum += self.value_of(record);
        }

        for group in &mut groups {
            group.percentage = if grand_total == 0.0 {
                0.0
            } else {
                group.sum / grand_total * 100.0
            };
            group.value = match request.metric {
                Metric::Sum => group.sum,
                Metric::Average => group.average(),
                Metric::Count => group.count as f64,
            };
        }

        // sort_by is stable, so ties keep first-seen order
        groups.sort_by(|a, b| b.sum.total_cmp(&a.sum));

        GroupedBreakdown {
            field: request.group_by.clone(),
            metric: request.metric,
            groups,
            top_n: self.top_n,
        }
    }
}
