use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Where the nightly synthesis runs append their records
pub const DEFAULT_INPUT: &str = "nightly/data/output.json";

/// Baseline family shown when no `--baseline` is given
pub const DEFAULT_BASELINE: &str = "oopsla";

/// Which report to generate
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSelector {
    /// Enumo rulesets against a named baseline
    Baseline,
    /// Direct generation against rules ported from BV4
    Variant,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "enumo-report")]
#[command(about = "Summarize Enumo nightly experiment records as comparison tables")]
#[command(version)]
pub struct CliArgs {
    /// JSON file holding the array of experiment records
    #[arg(long, short = 'i', value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Report to generate
    #[arg(long, short = 'r', value_enum, default_value_t = ReportSelector::Baseline)]
    pub report: ReportSelector,

    /// Only include records whose baseline name contains this text (case-sensitive)
    #[arg(long, short = 'b', value_name = "NAME", default_value = DEFAULT_BASELINE)]
    pub baseline: String,

    /// Also write the report as a Markdown table
    #[arg(long = "output-markdown", value_name = "PATH")]
    pub output_markdown: Option<PathBuf>,

    /// Also write the report as JSON
    #[arg(long = "output-json", value_name = "PATH")]
    pub output_json: Option<PathBuf>,

    /// Override console width (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,

    /// Don't print the table, only the summary
    /// Useful together with --output-markdown / --output-json
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.report == ReportSelector::Baseline && self.baseline.trim().is_empty() {
            return Err("--baseline must not be empty".to_string());
        }

        if let Some(width) = self.console_width
            && width < 40
        {
            return Err(format!("--console-width must be at least 40 (got {})", width));
        }

        if let (Some(md), Some(json)) = (&self.output_markdown, &self.output_json)
            && md == json
        {
            return Err(format!("--output-markdown and --output-json both point to {}", md.display()));
        }

        if self.quiet && self.output_markdown.is_none() && self.output_json.is_none() {
            return Err("--quiet needs --output-markdown or --output-json, otherwise nothing is reported".to_string());
        }

        Ok(())
    }
}
