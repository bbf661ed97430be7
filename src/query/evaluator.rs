//! Clause evaluation against records
//!
//! Connectors fold left to right with no precedence:
//! `A OR B AND C` is `(A OR B) AND C`.

use crate::record::{parse_number, FieldValue, Record};

use super::clause::{Clause, Operator};

/// Evaluates clause lists against records
pub struct QueryEvaluator;

impl QueryEvaluator {
    /// Returns the records matching `clauses`, in input order.
    ///
    /// An empty clause list keeps every record.
    pub fn evaluate<'a>(records: &'a [Record], clauses: &[Clause]) -> Vec<&'a Record> {
        records
            .iter()
            .filter(|record| Self::matches_all(record, clauses))
            .collect()
    }

    /// Narrows an already filtered set with further clauses
    pub fn refine<'a>(records: &[&'a Record], clauses: &[Clause]) -> Vec<&'a Record> {
        records
            .iter()
            .copied()
            .filter(|record| Self::matches_all(record, clauses))
            .collect()
    }

    /// Folds all clauses for a single record
    pub fn matches_all(record: &Record, clauses: &[Clause]) -> bool {
        let mut iter = clauses.iter();
        let first = match iter.next() {
            Some(c) => c,
            None => return true,
        };

        // Connector on the first clause is ignored
        let mut acc = Self::matches(record, first);
        for clause in iter {
            acc = clause.connector.apply(acc, Self::matches(record, clause));
        }
        acc
    }

    /// Checks a single clause
    pub fn matches(record: &Record, clause: &Clause) -> bool {
        let actual = record.resolve(&clause.field);

        if actual.is_missing() {
            // Missing is not equal to any literal
            return clause.operator == Operator::NotEquals;
        }

        match clause.operator {
            Operator::Equals => Self::text_match(&actual, &clause.value, |a, b| a == b),
            Operator::NotEquals => Self::text_match(&actual, &clause.value, |a, b| a != b),
            Operator::Contains => Self::text_match(&actual, &clause.value, |a, b| a.contains(b)),
            Operator::StartsWith => {
                Self::text_match(&actual, &clause.value, |a, b| a.starts_with(b))
            }
            Operator::GreaterThan => Self::numeric_match(&actual, &clause.value, |a, b| a > b),
            Operator::LessThan => Self::numeric_match(&actual, &clause.value, |a, b| a < b),
            Operator::Unknown => false,
        }
    }

    /// Case-insensitive text comparison
    fn text_match<F>(actual: &FieldValue<'_>, expected: &str, cmp: F) -> bool
    where
        F: Fn(&str, &str) -> bool,
    {
        match actual.to_text() {
            Some(text) => cmp(&text.to_lowercase(), &expected.to_lowercase()),
            None => false,
        }
    }

    /// Numeric comparison; either side failing to parse fails the clause
    fn numeric_match<F>(actual: &FieldValue<'_>, expected: &str, cmp: F) -> bool
    where
        F: Fn(f64, f64) -> bool,
    {
        match (actual.to_number(), parse_number(expected)) {
            (Some(a), Some(b)) => cmp(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Connector;
    use crate::record::DebtorInfo;

    fn records() -> Vec<Record> {
        vec![
            Record::new("1").with_state("TX").with_balance(100.0),
            Record::new("2").with_state("TX").with_balance(200.0),
            Record::new("3").with_state("CA").with_balance(50.0),
        ]
    }

    fn ids(matched: &[&Record]) -> Vec<String> {
        matched.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_clauses_identity() {
        let recs = records();
        let matched = QueryEvaluator::evaluate(&recs, &[]);
        assert_eq!(ids(&matched), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_equals_case_insensitive() {
        let recs = records();
        let matched = QueryEvaluator::evaluate(&recs, &[Clause::equals("state", "tx")]);
        assert_eq!(ids(&matched), vec!["1", "2"]);
    }

    #[test]
    fn test_not_equals_case_insensitive() {
        let recs = records();
        let clause = Clause::new("state", Operator::NotEquals, "tx");
        assert_eq!(ids(&QueryEvaluator::evaluate(&recs, &[clause])), vec!["3"]);

        let clause = Clause::new("state", Operator::NotEquals, "Ca");
        assert_eq!(ids(&QueryEvaluator::evaluate(&recs, &[clause])), vec!["1", "2"]);
    }

    #[test]
    fn test_contains_and_starts_with() {
        let recs = vec![
            Record::new("1").with_status("Payment Plan"),
            Record::new("2").with_status("Paid in Full"),
            Record::new("3").with_status("Disputed"),
        ];

        let contains = Clause::new("status", Operator::Contains, "PLAN");
        assert_eq!(ids(&QueryEvaluator::evaluate(&recs, &[contains])), vec!["1"]);

        let prefix = Clause::new("status", Operator::StartsWith, "pa");
        assert_eq!(ids(&QueryEvaluator::evaluate(&recs, &[prefix])), vec!["1", "2"]);
    }

    #[test]
    fn test_no_wildcard_syntax() {
        let recs = vec![Record::new("1").with_status("Open")];
        let clause = Clause::new("status", Operator::Contains, "o%");
        assert!(QueryEvaluator::evaluate(&recs, &[clause]).is_empty());
    }

    #[test]
    fn test_numeric_comparisons() {
        let recs = records();
        let gt = Clause::greater_than("balance", "99.5");
        assert_eq!(ids(&QueryEvaluator::evaluate(&recs, &[gt])), vec!["1", "2"]);

        let lt = Clause::less_than("balance", "100");
        assert_eq!(ids(&QueryEvaluator::evaluate(&recs, &[lt])), vec!["3"]);
    }

    #[test]
    fn test_numeric_on_string_field() {
        let recs = vec![Record {
            account_number: Some("1500".into()),
            ..Record::new("1")
        }];
        let clause = Clause::greater_than("account_number", "1000");
        assert_eq!(QueryEvaluator::evaluate(&recs, &[clause]).len(), 1);
    }

    #[test]
    fn test_greater_than_non_numeric_excluded() {
        let recs = records();
        let clause = Clause::greater_than("state", "10");
        assert!(QueryEvaluator::evaluate(&recs, &[clause]).is_empty());

        let clause = Clause::greater_than("balance", "lots");
        assert!(QueryEvaluator::evaluate(&recs, &[clause]).is_empty());
    }

    #[test]
    fn test_unknown_operator_never_matches() {
        let recs = records();
        let clause = Clause::new("state", Operator::Unknown, "TX");
        assert!(QueryEvaluator::evaluate(&recs, &[clause.clone()]).is_empty());

        // Also fails inside an OR chain on its own
        let chain = vec![clause, Clause::equals("state", "ca").or()];
        assert_eq!(ids(&QueryEvaluator::evaluate(&recs, &chain)), vec!["3"]);
    }

    #[test]
    fn test_missing_path_semantics() {
        let recs = records();
        let eq = Clause::equals("debtor_info.state", "tx");
        assert!(QueryEvaluator::evaluate(&recs, &[eq]).is_empty());

        let neq = Clause::new("debtor_info.state", Operator::NotEquals, "tx");
        assert_eq!(QueryEvaluator::evaluate(&recs, &[neq]).len(), 3);
    }

    #[test]
    fn test_padded_path_never_resolves() {
        let recs = records();
        assert!(QueryEvaluator::evaluate(&recs, &[Clause::equals(" state ", "tx")]).is_empty());
    }

    #[test]
    fn test_nested_field() {
        let recs = vec![
            Record::new("1").with_debtor(DebtorInfo {
                last_name: Some("Lovelace".into()),
                ..DebtorInfo::default()
            }),
            Record::new("2"),
        ];
        let clause = Clause::new("debtor_info.last_name", Operator::StartsWith, "LOVE");
        assert_eq!(ids(&QueryEvaluator::evaluate(&recs, &[clause])), vec!["1"]);
    }

    #[test]
    fn test_left_fold_no_precedence() {
        // A OR B AND C with A true, B false, C false:
        // left fold gives (true || false) && false = false
        // standard precedence would give true || (false && false) = true
        let recs = vec![Record::new("1").with_state("TX").with_balance(10.0)];
        let chain = vec![
            Clause::equals("state", "TX"),
            Clause::equals("state", "CA").or(),
            Clause::greater_than("balance", "100").and(),
        ];
        assert!(QueryEvaluator::evaluate(&recs, &chain).is_empty());
    }

    #[test]
    fn test_first_connector_ignored() {
        let recs = records();
        let or_first = vec![Clause::equals("state", "ca").or()];
        let and_first = vec![Clause::equals("state", "ca").and()];
        assert_eq!(
            ids(&QueryEvaluator::evaluate(&recs, &or_first)),
            ids(&QueryEvaluator::evaluate(&recs, &and_first))
        );
        assert_eq!(or_first[0].connector, Connector::Or);
    }

    #[test]
    fn test_refine_matches_sequential_fold() {
        let recs = records();
        let a = Clause::equals("state", "ca");
        let b = Clause::equals("state", "tx").or();
        let c = Clause::greater_than("balance", "150").and();

        let once = QueryEvaluator::evaluate(&recs, &[a.clone(), b.clone(), c.clone()]);
        let first = QueryEvaluator::evaluate(&recs, &[a, b]);
        let twice = QueryEvaluator::refine(&first, &[c]);

        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(ids(&once), vec!["2"]);
    }
}
