//! Pipeline Invariant Tests
//!
//! Evaluator, aggregator and paginator properties:
//! - Empty clause list is the identity
//! - Filtered set is an order-preserving subset
//! - Connectors fold left to right with no precedence
//! - Pages cover the filtered set exactly once
//! - Group sums add up to the grand total

use chrono::NaiveDate;
use debtdesk::aggregate::{AggregationRequest, Aggregator, Metric};
use debtdesk::paginate::{PaginationError, Paginator};
use debtdesk::query::{Clause, Operator, QueryEvaluator};
use debtdesk::record::Record;
use debtdesk::seed::RecordGenerator;

// =============================================================================
// Helper Functions
// =============================================================================

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn scenario_records() -> Vec<Record> {
    vec![
        Record::new("a").with_state("TX").with_balance(100.0),
        Record::new("b").with_state("TX").with_balance(200.0),
        Record::new("c").with_state("CA").with_balance(50.0),
    ]
}

fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

fn clause_sets() -> Vec<Vec<Clause>> {
    vec![
        vec![Clause::equals("state", "tx")],
        vec![Clause::greater_than("balance", "5000")],
        vec![
            Clause::equals("status", "active"),
            Clause::equals("status", "disputed").or(),
        ],
        vec![
            Clause::new("debtor_info.last_name", Operator::StartsWith, "g"),
            Clause::less_than("balance", "2000").and(),
        ],
        vec![Clause::new("portfolio_id", Operator::NotEquals, "PF-1001")],
    ]
}

// =============================================================================
// Evaluator Properties
// =============================================================================

/// evaluate(R, []) == R
#[test]
fn test_empty_clauses_identity() {
    let records = RecordGenerator::new(11).generate(40);
    let filtered = QueryEvaluator::evaluate(&records, &[]);

    assert_eq!(filtered.len(), records.len());
    for (kept, original) in filtered.iter().zip(records.iter()) {
        assert_eq!(*kept, original);
    }
}

/// Filtered set is a subset of R in original relative order.
#[test]
fn test_filter_is_ordered_subset() {
    let records = RecordGenerator::new(12).generate(120);

    for clauses in clause_sets() {
        let filtered = QueryEvaluator::evaluate(&records, &clauses);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|kept| records.iter().position(|r| r.id == kept.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

/// Same inputs give the same output every time.
#[test]
fn test_evaluation_is_deterministic() {
    let records = RecordGenerator::new(13).generate(60);
    for clauses in clause_sets() {
        let first = ids(&QueryEvaluator::evaluate(&records, &clauses));
        for _ in 0..10 {
            assert_eq!(ids(&QueryEvaluator::evaluate(&records, &clauses)), first);
        }
    }
}

/// [A, OR B, AND C] equals evaluating [A, OR B] then narrowing with C.
#[test]
fn test_left_associative_connector_law() {
    let records = RecordGenerator::new(14).generate(200);
    let a = Clause::equals("state", "TX");
    let b = Clause::equals("state", "CA").or();
    let c = Clause::greater_than("balance", "4000").and();

    let chained = QueryEvaluator::evaluate(&records, &[a.clone(), b.clone(), c.clone()]);
    let staged = QueryEvaluator::refine(&QueryEvaluator::evaluate(&records, &[a, b]), &[c]);

    assert_eq!(ids(&chained), ids(&staged));
}

/// A OR B AND C is not A OR (B AND C).
#[test]
fn test_no_standard_precedence() {
    let records = vec![Record::new("x").with_state("TX").with_balance(1.0)];
    let chain = vec![
        Clause::equals("state", "tx"),
        Clause::equals("state", "ny").or(),
        Clause::greater_than("balance", "100").and(),
    ];
    assert!(QueryEvaluator::evaluate(&records, &chain).is_empty());
}

/// Non-numeric comparisons drop the record without panicking.
#[test]
fn test_greater_than_non_numeric_excluded() {
    let records = vec![
        Record::new("1").with_status("Active"),
        Record::new("2").with_balance(10.0),
    ];
    let filtered = QueryEvaluator::evaluate(&records, &[Clause::greater_than("status", "1")]);
    assert!(filtered.is_empty());
}

// =============================================================================
// Aggregation Properties
// =============================================================================

/// Worked example: TX filter, total 300, average 150, TX group 100%.
#[test]
fn test_state_scenario() {
    let records = scenario_records();
    let filtered = QueryEvaluator::evaluate(&records, &[Clause::equals("state", "tx")]);
    assert_eq!(filtered.len(), 2);

    let summary = Aggregator::default().summarize(
        &filtered,
        &[AggregationRequest::sum_by("state")],
        as_of(),
    );
    assert_eq!(summary.total, 300.0);
    assert_eq!(summary.average, 150.0);

    let by_state = summary.breakdown("state").unwrap();
    assert_eq!(by_state.len(), 1);
    let tx = by_state.get("TX").unwrap();
    assert_eq!(tx.count, 2);
    assert_eq!(tx.sum, 300.0);
    assert_eq!(tx.percentage, 100.0);
}

/// Group sums add up to the total for fields present on every record.
#[test]
fn test_group_sums_equal_total() {
    let records = RecordGenerator::new(21).generate(300);
    let refs: Vec<&Record> = records.iter().collect();
    let aggregator = Aggregator::default();
    let total = aggregator.total(&refs);

    for field in ["state", "status", "portfolio_id", "agency_id"] {
        let breakdown = aggregator.group(&refs, &AggregationRequest::new(field, Metric::Sum));
        let group_total: f64 = breakdown.groups.iter().map(|g| g.sum).sum();
        assert!((group_total - total).abs() < 1e-6, "field {}", field);

        let counted: usize = breakdown.groups.iter().map(|g| g.count).sum();
        assert_eq!(counted, refs.len());
    }
}

/// Ranked groups are sorted by sum descending, top-N truncated.
#[test]
fn test_top_n_ranking() {
    let records = RecordGenerator::new(22).generate(300);
    let refs: Vec<&Record> = records.iter().collect();
    let breakdown = Aggregator::default().group(&refs, &AggregationRequest::sum_by("state"));

    assert!(breakdown.groups.windows(2).all(|w| w[0].sum >= w[1].sum));
    assert_eq!(breakdown.top().len(), 5);
    assert_eq!(breakdown.top(), &breakdown.groups[..5]);
}

/// Charge-off age comes from data: same input, same answer.
#[test]
fn test_charge_off_age_not_random() {
    let records = RecordGenerator::new(23).generate(50);
    let refs: Vec<&Record> = records.iter().collect();
    let first = Aggregator::charge_off_age_days(&refs, as_of());
    assert!(first.unwrap() > 0.0);
    for _ in 0..5 {
        assert_eq!(Aggregator::charge_off_age_days(&refs, as_of()), first);
    }
}

// =============================================================================
// Pagination Properties
// =============================================================================

/// Sum of page lengths over 1..=ceil(n/size) equals n.
#[test]
fn test_pages_cover_filtered_set() {
    let records = RecordGenerator::new(31).generate(97);
    let filtered = QueryEvaluator::evaluate(&records, &[Clause::greater_than("balance", "1000")]);

    for size in [1, 3, 10, 25, 100] {
        let pages = filtered.len().div_ceil(size);
        let mut seen = Vec::new();
        for p in 1..=pages {
            let page = Paginator::paginate(&filtered, p, size).unwrap();
            assert_eq!(page.total_count, filtered.len());
            seen.extend(page.items.iter().map(|r| r.id.clone()));
        }
        assert_eq!(seen, ids(&filtered));
    }
}

/// Page 2 of size 2 over three records holds the third.
#[test]
fn test_second_page_example() {
    let records = scenario_records();
    let filtered = QueryEvaluator::evaluate(&records, &[]);
    let page = Paginator::paginate(&filtered, 2, 2).unwrap();

    assert_eq!(ids(&page.items), vec!["c"]);
    assert_eq!(page.page_number, 2);
    assert_eq!(page.page_size, 2);
    assert_eq!(page.total_count, 3);
}

/// Zero page size is an InvalidArgument error.
#[test]
fn test_zero_page_size_invalid() {
    let records = scenario_records();
    let result = Paginator::paginate(&records, 1, 0);
    assert!(matches!(result, Err(PaginationError::InvalidArgument(_))));
}
