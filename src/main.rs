mod cli;
mod config;
mod console_format;
mod data;
mod error;
mod report;
mod types;

use config::ReportPlan;
use report::Report;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        console_format::print_error(&e);
        std::process::exit(1);
    }

    // Set console width override if specified
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    let plan = match config::build_report_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            console_format::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let records = match data::load_records(&plan.input) {
        Ok(r) => r,
        Err(e) => {
            console_format::print_error(&format!("Could not load experiment records: {}", e));
            std::process::exit(1);
        }
    };

    let report = plan.generate(&records);

    if plan.print_table {
        console_format::print_report(&report);
    }

    write_exports(&report, &plan);

    console_format::print_summary(&report::summarize_report(&report));
}

/// Write the Markdown and JSON exports requested by the plan
fn write_exports(report: &Report, plan: &ReportPlan) {
    if let Some(path) = &plan.markdown_output {
        match report::export_markdown_report(report, path) {
            Ok(_) => println!("Markdown report saved to: {}", path.display()),
            Err(e) => eprintln!("Warning: Failed to save markdown report: {}", e),
        }
    }

    if let Some(path) = &plan.json_output {
        match report::export_json_report(report, path) {
            Ok(_) => println!("JSON report saved to: {}", path.display()),
            Err(e) => eprintln!("Warning: Failed to save JSON report: {}", e),
        }
    }
}
