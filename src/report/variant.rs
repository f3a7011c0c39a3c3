//! Variant run report.
//!
//! Compares direct synthesis (`direct_gen`) against rules ported from the
//! BV4 run (`from_bv4`) for every record that has the latter.

use super::format::{LINE_BREAK, TIMING_PRECISION, derivability_percentage, format_rule_list, round_maybe};
use super::schema::{Column, generate};
use super::types::Report;
use crate::error::RowError;
use crate::types::{Cell, ExperimentRecord};

const LHS: &str = "derivability.lhs";
const LHS_RHS: &str = "derivability.lhs_rhs";

const COLUMNS: &[Column] = &[
    Column::new("Domain", |r| r.str_at("domain").map(Cell::from)),
    Column::new("Generated", |r| r.len_at("direct_gen.rules").map(Cell::from)),
    Column::new("Gen Time (s)", |r| r.number_at("direct_gen.time").map(Cell::from)),
    Column::new("From BV4", |r| r.len_at("from_bv4.rules").map(Cell::from)),
    Column::new("From BV4 Time (s)", |r| r.number_at("from_bv4.time").map(Cell::from)),
    Column::new("LHS", |r| percentage(r, LHS)),
    Column::new("LHS Time", |r| timing(r, LHS)),
    Column::new("LHS Missing", |r| missing_rules(r, LHS)),
    Column::new("LHS-RHS", |r| percentage(r, LHS_RHS)),
    Column::new("LHS-RHS Time", |r| timing(r, LHS_RHS)),
    Column::new("LHS-RHS Missing", |r| missing_rules(r, LHS_RHS)),
];

fn percentage(record: &ExperimentRecord, path: &str) -> Result<Cell, RowError> {
    record.derivability(path).map(|d| Cell::Text(derivability_percentage(&d)))
}

fn timing(record: &ExperimentRecord, path: &str) -> Result<Cell, RowError> {
    let result = record.derivability(path)?;
    Ok(round_maybe(Cell::Number(result.time), TIMING_PRECISION))
}

/// Rules that could not be derived, bidirectional pairs collapsed
fn missing_rules(record: &ExperimentRecord, path: &str) -> Result<Cell, RowError> {
    let result = record.derivability(path)?;
    Ok(Cell::Text(format_rule_list(&result.cannot)?.join(LINE_BREAK)))
}

/// Build the variant report for every record with a `from_bv4` run.
pub fn variant_report(records: &[ExperimentRecord]) -> Report {
    generate("BV4 variant comparison", records, COLUMNS, ExperimentRecord::has_variant_run)
}
