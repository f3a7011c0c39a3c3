/// End-to-end tests for the enumo-report binary
///
/// These run the built binary against the nightly output fixture in
/// `test-data/` and check both the console table and the exports.
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// Helper to get the records fixture
fn fixture() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-data/nightly-output.json")
}

// Helper to run the binary with arguments
fn run_report(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_enumo-report"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run enumo-report {}: {}", args.join(" "), e))
}

// Helper to assert the run succeeded
fn assert_success(output: &Output, context: &str) {
    assert!(
        output.status.success(),
        "{} failed with status: {:?}\nstdout: {}\nstderr: {}",
        context,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn read_json(path: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(path).expect("export should exist");
    serde_json::from_str(&contents).expect("export should be valid JSON")
}

#[test]
fn test_fixture_exists() {
    assert!(fixture().exists(), "records fixture should exist");
}

#[test]
fn test_baseline_console_table() {
    let input = fixture();
    let output = run_report(&["--input", input.to_str().unwrap(), "--console-width", "100"]);
    assert_success(&output, "baseline report");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Baseline comparison (oopsla) (2 of 5 records)"));
    assert!(stdout.contains("oopsla-herbie"));
    assert!(stdout.contains("66.7% / 66.7%"));
    assert!(stdout.contains("0.013 / 1.250"));
    // Record 2 has skipped derivability runs and is shown as a placeholder
    assert!(stdout.contains("⚠ record 2"));
    assert!(stdout.contains("=== Summary ==="));
    // The halide baseline does not match "oopsla"
    assert!(!stdout.contains("│ halide "));
}

#[test]
fn test_baseline_json_export() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("baseline.json");
    let input = fixture();

    let output = run_report(&[
        "--input",
        input.to_str().unwrap(),
        "--baseline",
        "oopsla",
        "--output-json",
        json_path.to_str().unwrap(),
        "--quiet",
    ]);
    assert_success(&output, "baseline JSON export");

    let report = read_json(&json_path);
    assert_eq!(report["summary"]["scanned"], 5);
    assert_eq!(report["summary"]["matched"], 2);
    assert_eq!(report["summary"]["failed"], 1);

    let row = &report["rows"][0];
    assert_eq!(row["Baseline"], "oopsla-herbie");
    assert_eq!(row["Enumo LOC"], 48);
    assert_eq!(row["# Enumo"], 10);
    assert_eq!(row["Time (s)"], "12.35");
    assert_eq!(row["Enumo Derives Baseline (LHS / LHSRHS)"], "66.7% / 66.7%");
    assert_eq!(row["Baseline Derives Enumo (LHS / LHSRHS)"], "66.7% / 66.7%");
    assert_eq!(row["Baseline derives Enumo Time (s)"], "2 / 0.500");

    assert_eq!(report["rows"][1]["record"], 2);
    assert_eq!(report["rows"][1]["error"], "missing field `derivability.enumo_derives_baseline.lhs`");
}

#[test]
fn test_variant_markdown_export() {
    let dir = tempfile::tempdir().unwrap();
    let md_path = dir.path().join("variant.md");
    let input = fixture();

    let output = run_report(&[
        "--input",
        input.to_str().unwrap(),
        "--report",
        "variant",
        "--output-markdown",
        md_path.to_str().unwrap(),
        "--quiet",
    ]);
    assert_success(&output, "variant markdown export");

    let markdown = std::fs::read_to_string(&md_path).unwrap();
    assert!(markdown.contains("| Domain | Generated | Gen Time (s) | From BV4 |"));
    assert!(markdown.contains("| bv8 | 3 | 8.75 | 2 | 0.13 | 33.3% | 0.004 | (<< ?a 1) <=> (+ ?a ?a) |"));
    assert!(markdown.contains("| 0.0% | 0.031 | (<< ?a 1) <=> (+ ?a ?a)<br />(^ ?a ?a) ==> 0 |"));
    // bv16 has a null from_bv4 and is filtered out
    assert!(!markdown.contains("bv16"));
}

#[test]
fn test_baseline_with_no_matches() {
    let input = fixture();
    let output = run_report(&["--input", input.to_str().unwrap(), "--baseline", "nonexistent"]);
    assert_success(&output, "baseline report without matches");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No matching records."));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("output.json");
    let output = run_report(&["--input", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("records file not found"));
}

#[test]
fn test_malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.json");
    std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

    let output = run_report(&["--input", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("expected a JSON array"));
}
