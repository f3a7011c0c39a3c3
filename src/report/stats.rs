//! Summary statistics for a generated report.

use super::types::{Report, ReportSummary};

/// Count scanned, matched, rendered and failed records.
pub fn summarize_report(report: &Report) -> ReportSummary {
    ReportSummary {
        scanned: report.scanned,
        matched: report.entries.len(),
        rendered: report.rows().count(),
        failed: report.failed_count(),
    }
}
