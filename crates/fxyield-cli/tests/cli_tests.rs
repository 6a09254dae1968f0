//! End-to-end tests for the `fxyield` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fxyield() -> Command {
    let mut cmd = Command::cargo_bin("fxyield").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("FXYIELD_CONFIG");
    cmd
}

#[test]
fn test_calc_reference_scenario() {
    fxyield()
        .args([
            "calc",
            "--investment",
            "1000",
            "--start-rate",
            "37",
            "--end-rate",
            "37",
            "--coupon",
            "9.85",
            "--nominal-yield",
            "19.70",
            "--duration",
            "2.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1738.75"))
        .stdout(predicate::str::contains("738.75"))
        .stdout(predicate::str::contains("Profit %"))
        .stdout(predicate::str::contains("73.8"));
}

#[test]
fn test_calc_json_output() {
    let output = fxyield()
        .args(["--format", "json", "calc", "--end-rate", "50"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let total_return = report["result"]["total_return"].as_f64().unwrap();
    let profit_percentage = report["result"]["profit_percentage"].as_f64().unwrap();

    assert!((total_return - 1286.675).abs() < 1e-9);
    assert!((profit_percentage - 28.67).abs() < 0.005);
    assert_eq!(report["bond"]["coupon_rate"].as_f64(), Some(9.85));
}

#[test]
fn test_calc_rejects_zero_investment() {
    fxyield()
        .args(["calc", "--investment", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("investment_amount"));
}

#[test]
fn test_calc_rejects_negative_investment() {
    fxyield()
        .args(["calc", "--investment", "-1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_calc_rejects_zero_end_rate() {
    fxyield()
        .args(["calc", "--end-rate", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end_rate"));
}

#[test]
fn test_calc_rejects_out_of_range_coupon() {
    fxyield()
        .args(["calc", "--coupon", "100.001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error: coupon_rate"));
}

#[test]
fn test_sweep_writes_chart_and_csv() {
    let dir = TempDir::new().unwrap();
    let chart = dir.path().join("profit.svg");
    let csv = dir.path().join("profit.csv");

    fxyield()
        .args(["--quiet", "--format", "minimal", "sweep", "--to", "40"])
        .arg("--chart")
        .arg(&chart)
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("37 738.75"));

    let svg = fs::read_to_string(&chart).unwrap();
    assert_eq!(svg.matches("<circle").count(), 4);

    let rows = fs::read_to_string(&csv).unwrap();
    assert_eq!(rows.lines().count(), 5);
    assert!(rows.starts_with("end_rate,total_return,profit,profit_percentage"));
}

#[test]
fn test_sweep_no_chart_writes_nothing() {
    let dir = TempDir::new().unwrap();

    fxyield()
        .current_dir(dir.path())
        .args(["--quiet", "sweep", "--to", "38", "--no-chart"])
        .assert()
        .success();

    assert!(!dir.path().join("profits_vs_exchange_rate.svg").exists());
}

#[test]
fn test_sweep_default_chart_location() {
    let dir = TempDir::new().unwrap();

    fxyield()
        .current_dir(dir.path())
        .args(["sweep", "--to", "38"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Chart written to"));

    assert!(dir.path().join("profits_vs_exchange_rate.svg").exists());
}

#[test]
fn test_sweep_rejects_bad_step() {
    fxyield()
        .args(["sweep", "--step", "0", "--no-chart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sweep step"));
}

#[test]
fn test_scenario_file() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("scenario.toml");
    fs::write(
        &scenario,
        "investment = 2000.0\ncoupon_rate = 0.0\nnominal_yield_rate = 0.0\nduration_years = 1.0\n\n[sweep]\nto = 39.0\n",
    )
    .unwrap();

    // No income and a flat rate: total return is the investment.
    fxyield()
        .arg("--config")
        .arg(&scenario)
        .args(["--format", "minimal", "calc"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2000 0 0"));

    fxyield()
        .arg("--config")
        .arg(&scenario)
        .args(["--format", "csv", "sweep", "--no-chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("39.0,"));
}

#[test]
fn test_scenario_unknown_key() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("bad.toml");
    fs::write(&scenario, "coupon = 5.0\n").unwrap();

    fxyield()
        .arg("--config")
        .arg(&scenario)
        .arg("calc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
