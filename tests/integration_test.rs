use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Scale with a single fiscal power, values from the 2019 scale
const SCALE_5CV: &str = r#"{
    "5": [
        {"coeff": 0.318, "term": 0},
        {"coeff": 0.179, "term": 1376},
        {"coeff": 0.214, "term": 0}
    ]
}"#;

/// Helper to run the binary against a history file in a temp dir
fn cmd(history: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("commute-expenses");
    cmd.arg("--history-name").arg(history);
    cmd
}

fn add_day(history: &Path, date: &str, distance: &str) {
    cmd(history)
        .args(["add", "--date", date, "--distance", distance])
        .assert()
        .success();
}

#[test]
fn test_add_creates_history() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    cmd(&history)
        .args(["add", "--date", "01/03/2024", "--distance", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "New day successfully added in history.",
        ));

    let content: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&history).unwrap()).unwrap();
    assert_eq!(
        content,
        serde_json::json!({"travels": [{"date": "01/03/2024", "distance": 50.0}]})
    );
}

#[test]
fn test_add_duplicate_date_fails() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    add_day(&history, "01/03/2024", "50");
    let before = fs::read_to_string(&history).unwrap();

    cmd(&history)
        .args(["add", "--date", "01/03/2024", "--distance", "12"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "There already is a record for 01/03/2024.",
        ));

    assert_eq!(fs::read_to_string(&history).unwrap(), before);
}

#[test]
fn test_add_rejects_bad_date() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    cmd(&history)
        .args(["add", "--date", "2024-03-01", "--distance", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DD/MM/YYYY"));

    assert!(!history.exists());
}

#[test]
fn test_remove_existing_day() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    add_day(&history, "01/03/2024", "50");
    add_day(&history, "02/03/2024", "20");

    cmd(&history)
        .args(["remove", "--date", "01/03/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Day successfully removed from history.",
        ));

    let content = fs::read_to_string(&history).unwrap();
    assert!(!content.contains("01/03/2024"));
    assert!(content.contains("02/03/2024"));
}

#[test]
fn test_remove_missing_day_fails() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    add_day(&history, "01/03/2024", "50");
    let before = fs::read_to_string(&history).unwrap();

    cmd(&history)
        .args(["remove", "--date", "05/03/2024"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No travel found with date 05/03/2024.",
        ));

    assert_eq!(fs::read_to_string(&history).unwrap(), before);
}

#[test]
fn test_remove_without_history_fails() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    cmd(&history)
        .args(["remove", "--date", "05/03/2024"])
        .assert()
        .code(1);

    assert!(!history.exists());
}

#[test]
fn test_calculate_caps_daily_distance() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");
    let config = temp_dir.path().join("config.json");
    fs::write(&config, SCALE_5CV).unwrap();

    add_day(&history, "01/03/2024", "50");
    add_day(&history, "24/04/2020", "30");

    cmd(&history)
        .arg("--config")
        .arg(&config)
        .args(["calculate", "--year", "2024", "--power", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The amount to report is 12.72€."));
}

#[test]
fn test_calculate_details() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");
    let config = temp_dir.path().join("config.json");
    fs::write(&config, SCALE_5CV).unwrap();

    add_day(&history, "01/03/2024", "50");

    cmd(&history)
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .args(["calculate", "--year", "2024", "--power", "5", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Travel expenses 2024"))
        .stdout(predicate::str::contains("|**Cumulation**|40.00 km|"));
}

#[test]
fn test_calculate_without_data_for_year() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");
    let config = temp_dir.path().join("config.json");
    fs::write(&config, SCALE_5CV).unwrap();

    add_day(&history, "01/03/2023", "50");

    cmd(&history)
        .arg("--config")
        .arg(&config)
        .args(["calculate", "--year", "2024", "--power", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No travel recorded for year 2024."));
}

#[test]
fn test_calculate_unknown_power_fails() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");
    let config = temp_dir.path().join("config.json");
    fs::write(&config, SCALE_5CV).unwrap();

    add_day(&history, "01/03/2024", "50");

    cmd(&history)
        .arg("--config")
        .arg(&config)
        .args(["calculate", "--year", "2024", "--power", "4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_calculate_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    add_day(&history, "01/03/2024", "50");

    cmd(&history)
        .arg("--config")
        .arg(temp_dir.path().join("missing.json"))
        .args(["calculate", "--year", "2024", "--power", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config init"));
}

#[test]
fn test_config_init_then_calculate() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");
    let config = temp_dir.path().join("config.json");

    cmd(&history)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));
    assert!(config.exists());

    add_day(&history, "02/01/2024", "20");

    // 20 km * 0.529 on the default 3 CV scale
    cmd(&history)
        .arg("--config")
        .arg(&config)
        .args(["calculate", "--year", "2024", "--power", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The amount to report is 10.58€."));
}

#[test]
fn test_config_init_keeps_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.json");
    fs::write(&config, SCALE_5CV).unwrap();

    cargo::cargo_bin_cmd!("commute-expenses")
        .args(["config", "init", "--path", config.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&config).unwrap(), SCALE_5CV);
}

#[test]
fn test_list_sorted_by_date() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    add_day(&history, "03/03/2024", "12");
    add_day(&history, "01/03/2024", "50");
    add_day(&history, "01/03/2023", "5");

    let output = cmd(&history)
        .env("NO_COLOR", "1")
        .args(["list", "--year", "2024"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let first = stdout.find("01/03/2024").unwrap();
    let second = stdout.find("03/03/2024").unwrap();
    assert!(first < second);
    assert!(!stdout.contains("01/03/2023"));
    assert!(stdout.contains("**2** days, **52.00 km** deductible."));
}

#[test]
fn test_invalid_power_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    cmd(&history)
        .args(["calculate", "--year", "2024", "--power", "9"])
        .assert()
        .code(2);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let history = temp_dir.path().join("work_trip.json");

    cmd(&history)
        .env_remove("RUST_LOG")
        .args(["-v", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("There is no history file yet."));
}
