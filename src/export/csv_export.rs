//! Record to CSV writer

use std::io::Write;

use thiserror::Error;

use crate::record::{DebtorInfo, Record};

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output is not valid UTF-8")]
    Utf8,
}

/// Writes records as CSV
pub struct CsvExporter;

impl CsvExporter {
    /// Header row
    pub fn header() -> Vec<String> {
        Record::FIELDS
            .iter()
            .map(|f| f.to_string())
            .chain(DebtorInfo::FIELDS.iter().map(|f| format!("debtor_info.{}", f)))
            .collect()
    }

    /// Writes a header and one row per record. Returns the row count.
    pub fn write<W: Write>(records: &[&Record], writer: W) -> ExportResult<usize> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(Self::header())?;

        for record in records {
            out.write_record(Self::row(record))?;
        }

        out.flush()?;
        Ok(records.len())
    }

    /// Renders records to a CSV string
    pub fn to_string(records: &[&Record]) -> ExportResult<String> {
        let mut buf = Vec::new();
        Self::write(records, &mut buf)?;
        String::from_utf8(buf).map_err(|_| ExportError::Utf8)
    }

    fn row(record: &Record) -> Vec<String> {
        let top = Record::FIELDS
            .iter()
            .map(|f| record.field(f).to_text().unwrap_or_default());

        let nested = DebtorInfo::FIELDS.iter().map(|f| match &record.debtor_info {
            Some(info) => info.field(f).to_text().unwrap_or_default(),
            None => String::new(),
        });

        top.chain(nested).collect()
    }
}
