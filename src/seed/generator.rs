//! Seeded record generator

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use crate::record::{DebtorInfo, Record};

/// Fixed reference date generated dates are offset from (YYYY, MM, DD)
pub const ANCHOR_DATE: (i32, u32, u32) = (2024, 6, 30);

const STATES: [&str; 10] = ["TX", "CA", "FL", "NY", "GA", "IL", "OH", "PA", "AZ", "NC"];

const STATUSES: [&str; 6] = [
    "Active",
    "Payment Plan",
    "Disputed",
    "Paid in Full",
    "Settled",
    "Closed",
];

const PORTFOLIOS: [&str; 5] = ["PF-1001", "PF-1002", "PF-1003", "PF-1004", "PF-1005"];

const AGENCIES: [&str; 4] = ["AG-NORTH", "AG-SOUTH", "AG-EAST", "AG-WEST"];

const FIRST_NAMES: [&str; 10] = [
    "James", "Maria", "Robert", "Linda", "Michael", "Patricia", "David", "Jennifer", "Carlos",
    "Aisha",
];

const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Garcia", "Brown", "Davis", "Martinez", "Wilson", "Anderson", "Thomas",
    "Lee",
];

const CITIES: [&str; 8] = [
    "Austin", "Fresno", "Tampa", "Buffalo", "Macon", "Peoria", "Dayton", "Tucson",
];

/// Generates reproducible debtor records from a seed
pub struct RecordGenerator {
    rng: StdRng,
    anchor: NaiveDate,
}

impl RecordGenerator {
    /// Create a generator for `seed`
    pub fn new(seed: u64) -> Self {
        let (y, m, d) = ANCHOR_DATE;
        Self {
            rng: StdRng::seed_from_u64(seed),
            anchor: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        }
    }

    /// Generate `count` records
    pub fn generate(&mut self, count: usize) -> Vec<Record> {
        (0..count).map(|i| self.next_record(i)).collect()
    }

    fn next_record(&mut self, index: usize) -> Record {
        let mut id_bytes = [0u8; 16];
        self.rng.fill(&mut id_bytes);
        let id = Builder::from_random_bytes(id_bytes).into_uuid().to_string();

        let original_balance = self.cents(250.0, 25_000.0);
        let paid_fraction: f64 = self.rng.gen_range(0.0..0.6);
        let balance = round_cents(original_balance * (1.0 - paid_fraction));

        // Charge-offs within roughly six years before the anchor
        let charge_off_date = self.anchor - Duration::days(self.rng.gen_range(30..2190));

        let (last_payment_date, last_payment_amount) = if self.rng.gen_bool(0.55) {
            let since = (self.anchor - charge_off_date).num_days().max(1);
            let date = self.anchor - Duration::days(self.rng.gen_range(0..since));
            (Some(date), Some(self.cents(25.0, 500.0)))
        } else {
            (None, None)
        };

        let state = self.pick(&STATES);
        let debtor_info = if self.rng.gen_bool(0.9) {
            Some(self.debtor(state))
        } else {
            None
        };

        Record {
            id,
            account_number: Some(format!("ACC-{:06}", 100_000 + index)),
            portfolio_id: Some(self.pick(&PORTFOLIOS).to_string()),
            agency_id: Some(self.pick(&AGENCIES).to_string()),
            status: Some(self.pick(&STATUSES).to_string()),
            state: Some(state.to_string()),
            balance: Some(balance),
            original_balance: Some(original_balance),
            charge_off_date: Some(charge_off_date),
            last_payment_date,
            last_payment_amount,
            is_disputed: Some(self.rng.gen_bool(0.08)),
            debtor_info,
        }
    }

    fn debtor(&mut self, state: &str) -> DebtorInfo {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let years = self.rng.gen_range(21..80);
        let date_of_birth = self.anchor - Duration::days(years * 365 + self.rng.gen_range(0..365));

        DebtorInfo {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: Some(format!(
                "{}.{}@example.com",
                first.to_lowercase(),
                last.to_lowercase()
            )),
            phone: Some(format!(
                "555-{:03}-{:04}",
                self.rng.gen_range(100..1000),
                self.rng.gen_range(0..10_000)
            )),
            city: Some(self.pick(&CITIES).to_string()),
            state: Some(state.to_string()),
            zip: Some(format!("{:05}", self.rng.gen_range(10_000..99_999))),
            date_of_birth: Some(date_of_birth),
        }
    }

    fn pick(&mut self, options: &[&'static str]) -> &'static str {
        options.choose(&mut self.rng).copied().unwrap_or("")
    }

    fn cents(&mut self, low: f64, high: f64) -> f64 {
        round_cents(self.rng.gen_range(low..high))
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_records() {
        let a = RecordGenerator::new(7).generate(25);
        let b = RecordGenerator::new(7).generate(25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_differs() {
        let a = RecordGenerator::new(7).generate(10);
        let b = RecordGenerator::new(8).generate(10);
        assert_ne!(a, b);
    }

    #[test]
    fn test_unique_ids_and_account_numbers() {
        let records = RecordGenerator::new(1).generate(200);
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(records[0].account_number.as_deref(), Some("ACC-100000"));
    }

    #[test]
    fn test_field_ranges() {
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        for record in RecordGenerator::new(99).generate(100) {
            let balance = record.balance.unwrap();
            let original = record.original_balance.unwrap();
            assert!(balance > 0.0 && balance <= original);
            assert!(record.charge_off_date.unwrap() < anchor);
            if let Some(paid) = record.last_payment_date {
                assert!(paid >= record.charge_off_date.unwrap());
            }
            assert!(STATES.contains(&record.state.as_deref().unwrap()));
        }
    }

    #[test]
    fn test_balances_rounded_to_cents() {
        for record in RecordGenerator::new(3).generate(50) {
            let cents = record.balance.unwrap() * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }
}
