//! End-to-end tests of the `nac-tco` binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn nac_tco(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nac-tco").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_init_then_compare_as_json() {
    let temp_dir = TempDir::new().unwrap();

    nac_tco(&temp_dir).arg("init").assert().success();
    assert!(temp_dir.path().join(".nac-tco.toml").is_file());

    let output = nac_tco(&temp_dir)
        .args(["compare", "--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["baseline"], "no_nac");
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0]["vendor"], "portnox_cloud");
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();

    nac_tco(&temp_dir).arg("init").assert().success();
    nac_tco(&temp_dir).arg("init").assert().failure();
    nac_tco(&temp_dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_compare_writes_markdown_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    let report = temp_dir.path().join("reports").join("tco.md");

    nac_tco(&temp_dir)
        .args(["compare", "--vendors", "portnox,cisco", "--devices", "1200", "-o"])
        .arg(&report)
        .assert()
        .success();

    let markdown = fs::read_to_string(&report).unwrap();
    assert!(markdown.starts_with("# "));
    assert!(markdown.contains("Cisco ISE"));
}

#[test]
fn test_invalid_flag_value_fails_with_field_name() {
    let temp_dir = TempDir::new().unwrap();

    let output = nac_tco(&temp_dir)
        .args(["compare", "--years", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("years_to_project"));
}

#[test]
fn test_vendors_lists_the_catalog() {
    let temp_dir = TempDir::new().unwrap();

    let output = nac_tco(&temp_dir).args(["--plain", "vendors"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("portnox"));
    assert!(stdout.contains("no-nac"));
}

#[test]
fn test_unrecognized_vendor_names_reach_the_report() {
    let temp_dir = TempDir::new().unwrap();

    let output = nac_tco(&temp_dir)
        .args(["compare", "--vendors", "zscaler,portnox,acme", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["unrecognized_vendors"],
        serde_json::json!(["zscaler", "acme"])
    );
}

#[test]
fn test_huge_sweep_range_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let output = nac_tco(&temp_dir)
        .args([
            "sensitivity",
            "--variable",
            "fte-cost",
            "--start",
            "0",
            "--end",
            "1e30",
            "--step",
            "1",
            "-f",
            "json",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid sweep range"));
}

#[test]
fn test_risk_reduction_sweep_changes_value() {
    let temp_dir = TempDir::new().unwrap();

    let output = nac_tco(&temp_dir)
        .args([
            "sensitivity",
            "--variable",
            "risk-reduction",
            "--metric",
            "value",
            "--vendors",
            "portnox,no-nac",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let portnox = json["series"]
        .as_array()
        .unwrap()
        .iter()
        .find(|series| series["vendor"] == "portnox_cloud")
        .unwrap();
    let values: Vec<f64> = portnox["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|value| value.as_f64().unwrap())
        .collect();
    assert!(values.windows(2).all(|pair| pair[1] > pair[0]));
}

#[test]
fn test_sensitivity_sweep_as_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = nac_tco(&temp_dir)
        .args([
            "sensitivity",
            "--variable",
            "discount",
            "--start",
            "0",
            "--end",
            "40",
            "--step",
            "20",
            "--vendors",
            "portnox,cisco",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["points"].as_array().unwrap().len(), 3);
    assert_eq!(json["series"].as_array().unwrap().len(), 2);
}
