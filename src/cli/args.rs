//! CLI argument definitions using clap
//!
//! Commands:
//! - debtdesk search --config <path>
//! - debtdesk summary --config <path>
//! - debtdesk export --config <path> --output <path>
//! - debtdesk seed --count <n> --seed <u64>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// debtdesk - search, summary and export over debtor records
#[derive(Parser, Debug)]
#[command(name = "debtdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a search request read from stdin
    Search {
        /// Path to configuration file
        #[arg(long, default_value = "./debtdesk.json")]
        config: PathBuf,
    },

    /// Print only the summary for a search request read from stdin
    Summary {
        /// Path to configuration file
        #[arg(long, default_value = "./debtdesk.json")]
        config: PathBuf,
    },

    /// Export the filtered set of a search request as CSV
    Export {
        /// Path to configuration file
        #[arg(long, default_value = "./debtdesk.json")]
        config: PathBuf,

        /// CSV output file
        #[arg(long)]
        output: PathBuf,
    },

    /// Print generated mock records as a JSON array
    Seed {
        /// Number of records
        #[arg(long, default_value_t = 25)]
        count: usize,

        /// Generator seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
