//! Baseline comparison report.
//!
//! One row per record whose `baseline_name` contains the requested
//! substring: sizes, synthesis time, and derivability in both directions
//! (Enumo rules deriving the baseline, and the baseline deriving Enumo).

use super::format::{TIMING_PRECISION, derivability_percentage, round_maybe};
use super::schema::{Column, generate};
use super::types::Report;
use crate::error::RowError;
use crate::types::{Cell, ExperimentRecord};

const ENUMO_DERIVES_BASELINE: &str = "derivability.enumo_derives_baseline";
const BASELINE_DERIVES_ENUMO: &str = "derivability.baseline_derives_enumo";

const COLUMNS: &[Column] = &[
    Column::new("Baseline", |r| r.str_at("baseline_name").map(Cell::from)),
    Column::new("Enumo Spec", |r| r.str_at("spec_name").map(Cell::from)),
    Column::new("Enumo LOC", |r| r.cell_at("loc")),
    Column::new("# Enumo", |r| r.len_at("rules").map(Cell::from)),
    Column::new("Time (s)", |r| r.number_at("time").map(Cell::from)),
    Column::new("Enumo Derives Baseline (LHS / LHSRHS)", |r| derivability_pair(r, ENUMO_DERIVES_BASELINE)),
    Column::new("Enumo derives Baseline Time (s)", |r| timing_pair(r, ENUMO_DERIVES_BASELINE)),
    Column::new("Baseline Derives Enumo (LHS / LHSRHS)", |r| derivability_pair(r, BASELINE_DERIVES_ENUMO)),
    Column::new("Baseline derives Enumo Time (s)", |r| timing_pair(r, BASELINE_DERIVES_ENUMO)),
];

/// `"<lhs%> / <lhs_rhs%>"` for one derivability direction
fn derivability_pair(record: &ExperimentRecord, direction: &str) -> Result<Cell, RowError> {
    let lhs = record.derivability(&format!("{}.lhs", direction))?;
    let lhs_rhs = record.derivability(&format!("{}.lhs_rhs", direction))?;
    Ok(Cell::Text(format!("{} / {}", derivability_percentage(&lhs), derivability_percentage(&lhs_rhs))))
}

/// `"<lhs time> / <lhs_rhs time>"` at timing precision
fn timing_pair(record: &ExperimentRecord, direction: &str) -> Result<Cell, RowError> {
    let lhs = record.number_at(&format!("{}.lhs.time", direction))?;
    let lhs_rhs = record.number_at(&format!("{}.lhs_rhs.time", direction))?;
    Ok(Cell::Text(format!(
        "{} / {}",
        round_maybe(Cell::Number(lhs), TIMING_PRECISION),
        round_maybe(Cell::Number(lhs_rhs), TIMING_PRECISION)
    )))
}

/// Build the baseline report for every record whose `baseline_name`
/// contains `name` (case-sensitive). Records without a baseline name are
/// never included.
pub fn baseline_report(records: &[ExperimentRecord], name: &str) -> Report {
    let title = format!("Baseline comparison ({})", name);
    generate(&title, records, COLUMNS, |record| record.baseline_name().is_some_and(|b| b.contains(name)))
}
