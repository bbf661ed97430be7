//! CLI module for debtdesk
//!
//! Provides command-line interface for:
//! - search: filter, summarize and paginate
//! - summary: filter and summarize only
//! - export: filter and write CSV
//! - seed: print generated mock records
//!
//! Requests arrive as a single JSON object on stdin. Responses leave as a
//! single JSON object on stdout; logs go to stderr.

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{export, run, run_command, search, seed, summary};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response};
