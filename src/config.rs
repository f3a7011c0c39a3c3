/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportPlan from CLI arguments
/// - Checking that the records file exists before anything is rendered
/// - Dispatching the plan to the matching report generator
use crate::cli::{CliArgs, ReportSelector};
use crate::report::{self, Report};
use crate::types::ExperimentRecord;
use log::debug;
use std::path::PathBuf;

/// Which generator to run, with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    /// Records whose `baseline_name` contains `name`
    Baseline { name: String },
    /// Records with a `from_bv4` run
    Variant,
}

/// Fully resolved, immutable description of one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    pub kind: ReportKind,
    pub input: PathBuf,
    pub markdown_output: Option<PathBuf>,
    pub json_output: Option<PathBuf>,
    pub print_table: bool,
}

impl ReportPlan {
    /// Run the selected generator over `records`
    pub fn generate(&self, records: &[ExperimentRecord]) -> Report {
        match &self.kind {
            ReportKind::Baseline { name } => report::baseline_report(records, name),
            ReportKind::Variant => report::variant_report(records),
        }
    }
}

/// Build a complete ReportPlan from CLI arguments
pub fn build_report_plan(args: &CliArgs) -> Result<ReportPlan, String> {
    debug!("Building report plan from CLI args");

    if !args.input.is_file() {
        return Err(format!(
            "records file not found: {} (pass --input <PATH> to point at the nightly output)",
            args.input.display()
        ));
    }

    let kind = match args.report {
        ReportSelector::Baseline => ReportKind::Baseline { name: args.baseline.clone() },
        ReportSelector::Variant => ReportKind::Variant,
    };

    debug!("Report: {:?} from {:?}", kind, args.input);

    Ok(ReportPlan {
        kind,
        input: args.input.clone(),
        markdown_output: args.output_markdown.clone(),
        json_output: args.output_json.clone(),
        print_table: !args.quiet,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
