//! Record schema for debtor/debt entries
//!
//! Records are typed structs with optional scalar fields and one nested
//! `debtor_info` block. Lookups go through [`FieldPath`] and always produce a
//! [`FieldValue`]; an absent field resolves to [`FieldValue::Missing`] instead
//! of an error.
//!
//! # Invariants
//!
//! - Records are immutable inputs to the query pipeline
//! - Resolution is total: every path yields a value or `Missing`

mod path;
mod types;
mod value;

pub use path::FieldPath;
pub use types::{DebtorInfo, Record};
pub use value::FieldValue;

pub(crate) use value::parse_number;
