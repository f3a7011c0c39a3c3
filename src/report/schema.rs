//! Column schemas and the shared row builder.
//!
//! Each generator declares its columns as an ordered list of
//! `(label, extractor)` pairs; `generate` does the filtering and row
//! building for all of them.

use super::format::{DEFAULT_PRECISION, round_maybe};
use super::types::{Report, ReportRow, RowEntry};
use crate::error::RowError;
use crate::types::{Cell, ExperimentRecord};
use log::{debug, warn};

/// Pulls one display value out of a record
pub type Extractor = fn(&ExperimentRecord) -> Result<Cell, RowError>;

/// One column of a report
#[derive(Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub extract: Extractor,
}

impl Column {
    pub const fn new(label: &'static str, extract: Extractor) -> Self {
        Self { label, extract }
    }
}

/// Column labels of a schema, in declaration order
pub fn labels(schema: &[Column]) -> Vec<String> {
    schema.iter().map(|c| c.label.to_string()).collect()
}

/// Build one row by running every extractor and rounding its result.
///
/// Stops at the first extractor that fails.
pub fn build_row(record: &ExperimentRecord, schema: &[Column]) -> Result<ReportRow, RowError> {
    let mut row = ReportRow::new();
    for column in schema {
        let cell = (column.extract)(record)?;
        row.push(column.label, round_maybe(cell, DEFAULT_PRECISION));
    }
    Ok(row)
}

/// Filter `records` with `keep` and build a row for each survivor.
///
/// A record whose row cannot be built becomes a `RowEntry::Failed` and the
/// remaining records are still processed.
pub fn generate<F>(title: &str, records: &[ExperimentRecord], schema: &[Column], keep: F) -> Report
where
    F: Fn(&ExperimentRecord) -> bool,
{
    let entries: Vec<RowEntry> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| keep(*record))
        .map(|(index, record)| match build_row(record, schema) {
            Ok(row) => RowEntry::Built(row),
            Err(error) => {
                warn!("{}: record {} skipped: {}", title, index, error);
                RowEntry::Failed { record: index, error }
            }
        })
        .collect();

    debug!("{}: {} of {} records matched", title, entries.len(), records.len());

    Report { title: title.to_string(), columns: labels(schema), entries, scanned: records.len() }
}
