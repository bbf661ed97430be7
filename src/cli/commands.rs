//! CLI command implementations
//!
//! Each command follows the same sequence:
//! 1. Load and validate configuration
//! 2. Open the configured record store
//! 3. Read the request from stdin
//! 4. Run the pipeline and write one response

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::Config;
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::pipeline::{CommandCenter, SearchRequest};
use crate::seed::RecordGenerator;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Search { config } => search(&config),
        Command::Summary { config } => summary(&config),
        Command::Export { config, output } => export(&config, &output),
        Command::Seed { count, seed } => self::seed(count, seed),
    }
}

/// Filter, summarize and paginate a request from stdin
pub fn search(config_path: &Path) -> CliResult<()> {
    let center = open_center(config_path)?;
    let request: SearchRequest = read_request()?;
    let response = center.search(&request)?;
    write_response(&response)
}

/// Filter and summarize a request from stdin
pub fn summary(config_path: &Path) -> CliResult<()> {
    let center = open_center(config_path)?;
    let request: SearchRequest = read_request()?;
    let summary = center.summarize(&request)?;
    write_response(&summary)
}

/// Write the filtered set of a request from stdin to a CSV file
pub fn export(config_path: &Path, output: &Path) -> CliResult<()> {
    let center = open_center(config_path)?;
    let request: SearchRequest = read_request()?;

    let file = File::create(output).map_err(|e| {
        CliError::io_error(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let rows = center.export(&request, BufWriter::new(file))?;

    write_response(&serde_json::json!({
        "rows": rows,
        "output": output.display().to_string(),
    }))
}

/// Print generated mock records
pub fn seed(count: usize, seed: u64) -> CliResult<()> {
    let records = RecordGenerator::new(seed).generate(count);
    log_event_with_fields(
        Event::SeedComplete,
        &[("count", &count.to_string()), ("seed", &seed.to_string())],
    );
    write_response(&records)
}

fn load_config(path: &Path) -> CliResult<Config> {
    let config = Config::load(path)?;
    Logger::set_min_severity(config.severity()?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("path", &path.display().to_string())],
    );
    Ok(config)
}

fn open_center(config_path: &Path) -> CliResult<CommandCenter> {
    let config = load_config(config_path)?;
    let store = config.store.open()?;
    log_event_with_fields(Event::StoreOpened, &[("backend", store.backend_name())]);
    Ok(CommandCenter::new(store, config.pipeline))
}
