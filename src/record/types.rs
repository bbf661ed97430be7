//! Debtor/debt record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::path::FieldPath;
use super::value::FieldValue;

/// Personal fields of the debtor attached to a record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl DebtorInfo {
    /// Field names in column order
    pub const FIELDS: [&'static str; 8] = [
        "first_name",
        "last_name",
        "email",
        "phone",
        "city",
        "state",
        "zip",
        "date_of_birth",
    ];

    /// Resolves a single field name
    pub fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "first_name" => opt_str(&self.first_name),
            "last_name" => opt_str(&self.last_name),
            "email" => opt_str(&self.email),
            "phone" => opt_str(&self.phone),
            "city" => opt_str(&self.city),
            "state" => opt_str(&self.state),
            "zip" => opt_str(&self.zip),
            "date_of_birth" => opt_date(self.date_of_birth),
            _ => FieldValue::Missing,
        }
    }
}

/// One debtor/debt entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque identifier
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Current balance owed
    #[serde(default, alias = "bal", skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_off_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_payment_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_payment_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_disputed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debtor_info: Option<DebtorInfo>,
}

impl Record {
    /// Top-level scalar field names in column order
    pub const FIELDS: [&'static str; 12] = [
        "id",
        "account_number",
        "portfolio_id",
        "agency_id",
        "status",
        "state",
        "balance",
        "original_balance",
        "charge_off_date",
        "last_payment_date",
        "last_payment_amount",
        "is_disputed",
    ];

    /// Creates an empty record with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_portfolio(mut self, portfolio_id: impl Into<String>) -> Self {
        self.portfolio_id = Some(portfolio_id.into());
        self
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn with_charge_off_date(mut self, date: NaiveDate) -> Self {
        self.charge_off_date = Some(date);
        self
    }

    pub fn with_debtor(mut self, info: DebtorInfo) -> Self {
        self.debtor_info = Some(info);
        self
    }

    /// Resolves a dotted path against this record.
    ///
    /// Unknown names, absent optionals, and hops past a scalar all yield
    /// [`FieldValue::Missing`].
    pub fn resolve(&self, path: &FieldPath) -> FieldValue<'_> {
        match path.segments() {
            [name] => self.field(name),
            [head, name] if head == "debtor_info" => match &self.debtor_info {
                Some(info) => info.field(name),
                None => FieldValue::Missing,
            },
            _ => FieldValue::Missing,
        }
    }

    /// Resolves a single top-level field name
    pub fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Str(&self.id),
            "account_number" => opt_str(&self.account_number),
            "portfolio_id" => opt_str(&self.portfolio_id),
            "agency_id" => opt_str(&self.agency_id),
            "status" => opt_str(&self.status),
            "state" => opt_str(&self.state),
            "balance" | "bal" => opt_number(self.balance),
            "original_balance" => opt_number(self.original_balance),
            "charge_off_date" => opt_date(self.charge_off_date),
            "last_payment_date" => opt_date(self.last_payment_date),
            "last_payment_amount" => opt_number(self.last_payment_amount),
            "is_disputed" => self.is_disputed.map_or(FieldValue::Missing, FieldValue::Bool),
            _ => FieldValue::Missing,
        }
    }
}

fn opt_str(value: &Option<String>) -> FieldValue<'_> {
    value
        .as_deref()
        .map_or(FieldValue::Missing, FieldValue::Str)
}

fn opt_number(value: Option<f64>) -> FieldValue<'static> {
    value.map_or(FieldValue::Missing, FieldValue::Number)
}

fn opt_date(value: Option<NaiveDate>) -> FieldValue<'static> {
    value.map_or(FieldValue::Missing, FieldValue::Date)
}
