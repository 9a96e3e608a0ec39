use assert_cmd::Command;
use predicates::str::{contains, is_empty};
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("networth_cli").unwrap();
    cmd.env("NETWORTH_HOME", home.path()).env("RUST_LOG", "off");
    cmd
}

fn project_json(home: &TempDir, extra: &[&str]) -> serde_json::Value {
    let output = cli(home)
        .args(["project", "--json", "--seed", "1"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn project_prints_json_view() {
    let home = TempDir::new().unwrap();
    let view = project_json(&home, &[]);

    let series = view["series"].as_array().unwrap();
    assert_eq!(series.len(), 15 * 24);
    assert_eq!(series[0][1], 7500.0);
    assert_eq!(view["range"], "1A");
    assert_eq!(view["goal_marker"], "Objetivo: 100K €");
    assert!(view["eta"].is_object());
}

#[test]
fn flow_flags_replace_starter_flows() {
    let home = TempDir::new().unwrap();
    let view = project_json(
        &home,
        &[
            "--balance",
            "1000",
            "--income",
            "Salary=2000",
            "--expense",
            "Rent=900,50",
            "--years",
            "2",
            "--range",
            "todo",
        ],
    );

    assert_eq!(view["totals"]["income"], 2000.0);
    assert_eq!(view["totals"]["expense"], 900.5);
    assert_eq!(view["series"].as_array().unwrap().len(), 2 * 24);
    assert_eq!(view["zoom"]["end_pct"], 100.0);
    assert!(view["eta"].is_null());
}

#[test]
fn config_set_changes_later_projections() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["config", "set", "horizon_years", "3"])
        .assert()
        .success()
        .stdout(contains("horizon_years = 3"));

    cli(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("horizon_years = 3"));

    let view = project_json(&home, &[]);
    assert_eq!(view["series"].as_array().unwrap().len(), 3 * 24);
}

#[test]
fn text_mode_reports_goal() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["project", "--plain", "--seed", "4"])
        .assert()
        .success()
        .stdout(contains("=== Net worth projection ==="))
        .stdout(contains("Starting balance: 7.500,00 €"))
        .stdout(contains("Goal reached in"));
}

#[test]
fn bad_input_exits_with_error() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["project", "--income", "Salary=lots"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Invalid amount"));

    cli(&home)
        .args(["config", "set", "colour", "on"])
        .assert()
        .failure()
        .stderr(contains("Error:"));

    cli(&home)
        .args(["project", "--range", "7A"])
        .assert()
        .failure();
}

#[test]
fn version_reports_package() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(contains(concat!("networth ", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn restore_brings_back_backed_up_settings() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["config", "set", "ui_color_enabled", "false"])
        .assert()
        .success();
    cli(&home)
        .args(["config", "set", "horizon_years", "3"])
        .assert()
        .success();

    let output = cli(&home)
        .args(["config", "backup", "three"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let name = stdout
        .split_whitespace()
        .find(|word| word.starts_with("config_") && word.contains("_three.json"))
        .expect("backup name in output")
        .to_string();

    cli(&home)
        .args(["config", "backups"])
        .assert()
        .success()
        .stdout(contains(name.as_str()));

    cli(&home)
        .args(["config", "set", "horizon_years", "9"])
        .assert()
        .success();
    cli(&home)
        .args(["config", "restore", name.as_str()])
        .assert()
        .success()
        .stdout(contains("Restored configuration"));

    cli(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("horizon_years = 3"));
    let view = project_json(&home, &[]);
    assert_eq!(view["series"].as_array().unwrap().len(), 3 * 24);

    cli(&home)
        .args(["config", "restore", "../config.json"])
        .assert()
        .failure()
        .stderr(contains("Invalid backup name"));
}

#[test]
fn rust_log_off_silences_stderr() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .env("RUST_LOG", "off")
        .args(["project", "--plain", "--seed", "2"])
        .assert()
        .success()
        .stderr(is_empty());
}
