//! debtdesk - filter, aggregation and pagination core for debt-collection
//! back-office search

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod export;
pub mod observability;
pub mod paginate;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod seed;
pub mod store;
