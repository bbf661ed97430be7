//! Clause, operator and connector types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::record::FieldPath;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Case-insensitive text equality
    #[serde(alias = "EQUALS")]
    Equals,
    /// Case-insensitive text inequality
    #[serde(alias = "NOT_EQUALS")]
    NotEquals,
    /// Case-insensitive substring
    #[serde(alias = "CONTAINS")]
    Contains,
    /// Case-insensitive prefix
    #[serde(alias = "STARTS_WITH")]
    StartsWith,
    /// Numeric greater than
    #[serde(alias = "GREATER_THAN")]
    GreaterThan,
    /// Numeric less than
    #[serde(alias = "LESS_THAN")]
    LessThan,
    /// Any operator name outside the closed set. Never matches.
    #[serde(other)]
    Unknown,
}

impl Operator {
    /// Get the operator string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts_with",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boolean join between a clause and everything before it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connector {
    #[default]
    #[serde(rename = "AND", alias = "and")]
    And,
    #[serde(rename = "OR", alias = "or")]
    Or,
}

impl Connector {
    /// Folds the next clause result into the accumulator
    pub fn apply(&self, acc: bool, next: bool) -> bool {
        match self {
            Connector::And => acc && next,
            Connector::Or => acc || next,
        }
    }
}

/// One filter condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// Dotted path to the field
    pub field: FieldPath,

    /// Comparison operator
    pub operator: Operator,

    /// Literal to compare against
    #[serde(deserialize_with = "value_as_text")]
    pub value: String,

    /// Join to the previous clause (ignored on the first clause)
    #[serde(default)]
    pub connector: Connector,
}

impl Clause {
    /// Create a new clause joined with AND
    pub fn new(field: impl Into<FieldPath>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
            connector: Connector::And,
        }
    }

    /// Create an equality clause
    pub fn equals(field: impl Into<FieldPath>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::Equals, value)
    }

    /// Create a greater than clause
    pub fn greater_than(field: impl Into<FieldPath>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::GreaterThan, value)
    }

    /// Create a less than clause
    pub fn less_than(field: impl Into<FieldPath>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::LessThan, value)
    }

    /// Sets the connector to AND
    pub fn and(mut self) -> Self {
        self.connector = Connector::And;
        self
    }

    /// Sets the connector to OR
    pub fn or(mut self) -> Self {
        self.connector = Connector::Or;
        self
    }
}

/// Accepts the literal as a JSON string, number or bool
fn value_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "clause value must be a scalar, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_clause() {
        let clause: Clause = serde_json::from_value(json!({
            "field": "debtor_info.state",
            "operator": "starts_with",
            "value": "t",
            "connector": "OR"
        }))
        .unwrap();

        assert_eq!(clause.field.as_str(), "debtor_info.state");
        assert_eq!(clause.operator, Operator::StartsWith);
        assert_eq!(clause.connector, Connector::Or);
    }

    #[test]
    fn test_connector_defaults_to_and() {
        let clause: Clause = serde_json::from_value(json!({
            "field": "state",
            "operator": "equals",
            "value": "tx"
        }))
        .unwrap();
        assert_eq!(clause.connector, Connector::And);
    }

    #[test]
    fn test_unknown_operator_deserializes() {
        let clause: Clause = serde_json::from_value(json!({
            "field": "state",
            "operator": "matches_regex",
            "value": ".*"
        }))
        .unwrap();
        assert_eq!(clause.operator, Operator::Unknown);
    }

    #[test]
    fn test_numeric_value_accepted() {
        let clause: Clause = serde_json::from_value(json!({
            "field": "balance",
            "operator": "greater_than",
            "value": 150
        }))
        .unwrap();
        assert_eq!(clause.value, "150");
    }

    #[test]
    fn test_object_value_rejected() {
        let result: Result<Clause, _> = serde_json::from_value(json!({
            "field": "balance",
            "operator": "equals",
            "value": {"nested": true}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_uppercase_operator_alias() {
        let op: Operator = serde_json::from_str("\"NOT_EQUALS\"").unwrap();
        assert_eq!(op, Operator::NotEquals);
        let op: Operator = serde_json::from_str("\"EQUALS\"").unwrap();
        assert_eq!(op, Operator::Equals);

        // Mixed case is outside the accepted spellings
        let op: Operator = serde_json::from_str("\"Equals\"").unwrap();
        assert_eq!(op, Operator::Unknown);
    }

    #[test]
    fn test_lowercase_connector_alias() {
        let c: Connector = serde_json::from_str("\"or\"").unwrap();
        assert_eq!(c, Connector::Or);
    }
}
