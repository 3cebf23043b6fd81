//! CLI integration tests

use std::process::Command;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "-p", "cloudprice-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Compare cloud provider pricing"),
        "Should show app description"
    );
    assert!(stdout.contains("compare"), "Should show compare command");
    assert!(stdout.contains("performance"), "Should show performance command");
    assert!(stdout.contains("regional"), "Should show regional command");
    assert!(stdout.contains("simulate"), "Should show simulate command");
    assert!(stdout.contains("catalog"), "Should show catalog command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = run_cli(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("cloudprice"), "Should show binary name");
}

/// Test simulate subcommand help
#[test]
fn test_simulate_help() {
    let output = run_cli(&["simulate", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Simulate help should succeed");
    assert!(stdout.contains("--service"), "Should show service flag");
    assert!(stdout.contains("--usage"), "Should show usage flag");
    assert!(stdout.contains("--period"), "Should show period flag");
    assert!(stdout.contains("--term"), "Should show term flag");
}

/// Comparison without an explicit service type names the one it picked
#[test]
fn test_compare_reports_chosen_usage_type() {
    let output = run_cli(&["compare"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Compare should succeed");
    assert!(
        stdout.contains("Usage type: Storage"),
        "Should report the usage type being compared"
    );
    assert!(
        stdout.contains("Usage: 100 GB/Month"),
        "Should report the usage amount in the service's billing units"
    );
}

/// Comparison over the built-in sample data emits parseable JSON
#[test]
fn test_compare_json_output() {
    let output = run_cli(&[
        "--format",
        "json",
        "--service-type",
        "Storage",
        "--region",
        "US East",
        "compare",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Compare should succeed");
    let rows: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    let rows = rows.as_array().expect("should be a JSON array");
    assert_eq!(rows.len(), 3, "one storage row per provider in US East");
    assert!(rows[0].get("on_demand_cost").is_some());
}

/// Simulation skips services the catalog does not contain
#[test]
fn test_simulate_skips_unknown_services() {
    let output = run_cli(&[
        "--format",
        "json",
        "simulate",
        "--service",
        "S3 Standard",
        "--service",
        "Nonexistent Service",
        "--usage",
        "S3 Standard=100",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Simulate should succeed");
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    let items = result["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1, "unknown service is silently omitted");
    assert_eq!(items[0]["name"], "AWS S3 Standard");
}

/// A catalog file that exists but cannot be parsed is fatal
#[test]
fn test_malformed_catalog_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "Provider,Service\nAWS,S3 Standard\n").unwrap();

    let output = run_cli(&["--data", path.to_str().unwrap(), "catalog", "summary"]);

    assert!(
        !output.status.success(),
        "Malformed catalog should abort the session"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to load pricing catalog"),
        "Should explain the failure"
    );
}
