//! Report export functions for JSON and Markdown formats.
//!
//! This module handles writing a generated report to files for storage
//! and for pasting into the nightly page.

use super::stats::summarize_report;
use super::types::{Report, ReportSummary, RowEntry};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Cell text used for every column of a row that failed to build
pub const FAILED_CELL: &str = "-";

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Top-level JSON export document.
///
/// Serialized directly (not through `serde_json::Value`) so every row keeps
/// its column order.
#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    generated_at: String,
    columns: &'a [String],
    summary: ReportSummary,
    rows: &'a [RowEntry],
}

/// Export a report as JSON.
///
/// Rows keep their column order; failed rows become
/// `{"record": <index>, "error": "<reason>"}`.
pub fn export_json_report(report: &Report, output_path: &Path) -> std::io::Result<()> {
    let document = JsonReport {
        title: &report.title,
        generated_at: timestamp(),
        columns: &report.columns,
        summary: summarize_report(report),
        rows: &report.entries,
    };

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &document)?;

    Ok(())
}

/// Escape a cell for a Markdown pipe table.
///
/// Pipes are escaped and line breaks become `<br />` so multi-line rule
/// lists stay in one table cell.
fn markdown_cell(text: &str) -> String {
    text.replace('|', "\\|").replace("\r\n", "<br />").replace('\n', "<br />")
}

/// Render the report as a Markdown pipe table (no surrounding document).
pub fn format_markdown_table(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!("| {} |\n", report.columns.iter().map(|c| markdown_cell(c)).collect::<Vec<_>>().join(" | ")));
    output.push_str(&format!("|{}\n", "---|".repeat(report.columns.len())));

    for entry in &report.entries {
        let cells: Vec<String> = match entry {
            RowEntry::Built(row) => row.iter().map(|(_, cell)| markdown_cell(&cell.to_string())).collect(),
            RowEntry::Failed { record, error } => {
                let mut cells = vec![FAILED_CELL.to_string(); report.columns.len().max(1)];
                cells[0] = markdown_cell(&format!("⚠ record {}: {}", record, error));
                cells
            }
        };
        output.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    output
}

/// Export a report as a Markdown document.
///
/// Contains a title, summary counts and the pipe table.
pub fn export_markdown_report(report: &Report, output_path: &Path) -> std::io::Result<()> {
    let mut file = File::create(output_path)?;
    let summary = summarize_report(report);

    writeln!(file, "# {}\n", report.title)?;
    writeln!(file, "Generated {}\n", timestamp())?;

    writeln!(file, "## Summary\n")?;
    writeln!(file, "- Records scanned: {}", summary.scanned)?;
    writeln!(file, "- Matched: {}", summary.matched)?;
    writeln!(file, "- ✓ Rendered: {}", summary.rendered)?;
    writeln!(file, "- ⚠ Failed: {}\n", summary.failed)?;

    writeln!(file, "## Results\n")?;
    write!(file, "{}", format_markdown_table(report))?;

    Ok(())
}
