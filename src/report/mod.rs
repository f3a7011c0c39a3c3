//! Report generation module - Data transformations and business logic.
//!
//! This module handles:
//! - Formatting primitives (rounding, percentages, rule-list condensing)
//! - The shared column-schema row builder
//! - The baseline and variant report generators
//! - Summary statistics
//! - Export to JSON and Markdown formats
//!
//! Console rendering is handled by the console_format module.
//!
//! # Module Organization
//!
//! - `types` - Report model (ReportRow, RowEntry, Report, ReportSummary)
//! - `format` - Rounding, percentage and rule-list formatting
//! - `schema` - Column schemas and the generic row builder
//! - `baseline` - Baseline comparison report
//! - `variant` - BV4 variant report
//! - `stats` - Summary statistics
//! - `export` - JSON and Markdown export

mod baseline;
mod export;
mod format;
mod schema;
mod stats;
mod types;
mod variant;

// Re-export types
pub use types::{Report, ReportRow, ReportSummary, RowEntry};

// Re-export generators
pub use baseline::baseline_report;
pub use variant::variant_report;

// Re-export stats functions
pub use stats::summarize_report;

// Re-export export functions
pub use export::{export_json_report, export_markdown_report};
