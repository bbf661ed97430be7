//! Resolved field values
//!
//! A [`FieldValue`] borrows from the record it was resolved from. The
//! `Missing` variant stands in for any path that did not resolve.

use chrono::NaiveDate;

/// A scalar resolved from a record, or the `Missing` sentinel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Text field
    Str(&'a str),
    /// Numeric field
    Number(f64),
    /// Calendar date
    Date(NaiveDate),
    /// Flag
    Bool(bool),
    /// Path did not resolve at some hop
    Missing,
}

impl FieldValue<'_> {
    /// Returns true for the `Missing` sentinel
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Renders the value as display text.
    ///
    /// Integral numbers print without a fractional part, dates as
    /// `YYYY-MM-DD`. `Missing` has no text.
    pub fn to_text(&self) -> Option<String> {
        match self {
            FieldValue::Str(s) => Some((*s).to_string()),
            FieldValue::Number(n) => Some(format_number(*n)),
            FieldValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Missing => None,
        }
    }

    /// Coerces the value to a finite number.
    ///
    /// Strings are parsed after trimming. Empty strings, dates, flags and
    /// missing values have no numeric form.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Str(s) => parse_number(s),
            _ => None,
        }
    }
}

/// Parses a trimmed, non-empty, finite number
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn format_number(n: f64) -> String {
    // f64 Display already drops ".0" for integral values
    format!("{}", n)
}
