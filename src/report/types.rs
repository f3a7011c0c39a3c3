//! Report type definitions for the rendering model.
//!
//! A `Report` is what a generator hands back to the display layer: ordered
//! column labels plus one entry per matching record, where an entry is either
//! a finished row or the reason that record could not be summarized.

use crate::error::RowError;
use crate::types::Cell;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One output row: column label -> display value, in schema order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportRow {
    cells: Vec<(String, Cell)>,
}

impl ReportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, cell: Cell) {
        self.cells.push((label.into(), cell));
    }

    /// Value for `label`, if the row has that column
    #[cfg(test)]
    pub fn get(&self, label: &str) -> Option<&Cell> {
        self.cells.iter().find(|(l, _)| l == label).map(|(_, c)| c)
    }

    #[cfg(test)]
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(l, c)| (l.as_str(), c))
    }
}

// Serialized as a JSON object whose keys keep column order
impl Serialize for ReportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (label, cell) in &self.cells {
            map.serialize_entry(label, cell)?;
        }
        map.end()
    }
}

/// Result of summarizing one matching record
#[derive(Debug, Clone, PartialEq)]
pub enum RowEntry {
    /// Row built from every column extractor
    Built(ReportRow),
    /// Some extractor failed; `record` is the index into the input collection
    Failed { record: usize, error: RowError },
}

impl RowEntry {
    pub fn row(&self) -> Option<&ReportRow> {
        match self {
            RowEntry::Built(row) => Some(row),
            RowEntry::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RowEntry::Failed { .. })
    }
}

impl Serialize for RowEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RowEntry::Built(row) => row.serialize(serializer),
            RowEntry::Failed { record, error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("record", record)?;
                map.serialize_entry("error", &error.to_string())?;
                map.end()
            }
        }
    }
}

/// A generated report, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub columns: Vec<String>,
    pub entries: Vec<RowEntry>,
    /// Number of input records examined (before filtering)
    pub scanned: usize,
}

impl Report {
    /// Successfully built rows, in input order
    pub fn rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.entries.iter().filter_map(RowEntry::row)
    }

    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_failed()).count()
    }
}

/// Counts shown in the summary block and exports
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportSummary {
    pub scanned: usize,
    pub matched: usize,
    pub rendered: usize,
    pub failed: usize,
}
