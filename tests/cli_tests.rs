//! CLI-level tests: argument handling, validation failures and
//! configuration errors, all without network access.
//!
//! Each invocation runs in its own temporary working directory so no `.env`
//! file is picked up and log files stay isolated.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with a clean environment and isolated working directory.
fn ordercast(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ordercast").expect("binary builds");
    cmd.current_dir(workdir.path())
        .env_remove("BINANCE_API_KEY")
        .env_remove("BINANCE_API_SECRET")
        .env_remove("BINANCE_TESTNET_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn place_rejects_invalid_side_before_touching_config() {
    let dir = TempDir::new().unwrap();

    // No credentials are set; a validation failure must still be reported
    // as such because validation runs first.
    ordercast(&dir)
        .args([
            "place",
            "--symbol",
            "BTCUSDT",
            "--side",
            "HOLD",
            "--type",
            "MARKET",
            "--quantity",
            "0.001",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("side must be BUY or SELL"));
}

#[test]
fn place_rejects_non_alphanumeric_symbol() {
    let dir = TempDir::new().unwrap();

    ordercast(&dir)
        .args([
            "place",
            "--symbol",
            "BTC-USDT",
            "--side",
            "BUY",
            "--type",
            "MARKET",
            "--quantity",
            "0.001",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("alphanumeric"));
}

#[test]
fn place_rejects_limit_order_without_price() {
    let dir = TempDir::new().unwrap();

    ordercast(&dir)
        .args([
            "place",
            "--symbol",
            "ETHUSDT",
            "--side",
            "SELL",
            "--type",
            "LIMIT",
            "--quantity",
            "0.01",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("price is required for LIMIT"));
}

#[test]
fn place_rejects_non_positive_quantity() {
    let dir = TempDir::new().unwrap();

    ordercast(&dir)
        .args([
            "place",
            "--symbol",
            "BTCUSDT",
            "--side",
            "BUY",
            "--type",
            "MARKET",
            "--quantity",
            "0",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("quantity must be positive"));
}

#[test]
fn place_rejects_non_numeric_quantity_at_the_parsing_edge() {
    let dir = TempDir::new().unwrap();

    // Argument-syntax errors exit with the CLI framework's usage code,
    // not the validation code.
    ordercast(&dir)
        .args([
            "place",
            "--symbol",
            "BTCUSDT",
            "--side",
            "BUY",
            "--type",
            "MARKET",
            "--quantity",
            "lots",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--quantity"));
}

#[test]
fn place_requires_all_mandatory_flags() {
    let dir = TempDir::new().unwrap();

    ordercast(&dir)
        .args(["place", "--symbol", "BTCUSDT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--side"));
}

#[test]
fn place_with_valid_arguments_fails_fast_without_credentials() {
    let dir = TempDir::new().unwrap();

    ordercast(&dir)
        .args([
            "place",
            "--symbol",
            "BTCUSDT",
            "--side",
            "BUY",
            "--type",
            "MARKET",
            "--quantity",
            "0.001",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("BINANCE_API_KEY"));
}

#[test]
fn check_config_reports_missing_credentials() {
    let dir = TempDir::new().unwrap();

    ordercast(&dir)
        .args(["check", "config"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "missing required environment variable",
        ));
}

#[test]
fn check_config_passes_with_credentials_set() {
    let dir = TempDir::new().unwrap();

    ordercast(&dir)
        .env("BINANCE_API_KEY", "test-key")
        .env("BINANCE_API_SECRET", "test-secret")
        .args(["check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is complete"))
        .stdout(predicate::str::contains("testnet.binancefuture.com"));
}

#[test]
fn runs_append_to_the_rolling_log_file() {
    let dir = TempDir::new().unwrap();

    ordercast(&dir)
        .args([
            "place",
            "--symbol",
            "BTCUSDT",
            "--side",
            "HOLD",
            "--type",
            "MARKET",
            "--quantity",
            "0.001",
        ])
        .assert()
        .failure();

    let logs = dir.path().join("logs");
    assert!(logs.is_dir(), "log directory is created");
    let has_log_file = std::fs::read_dir(&logs)
        .unwrap()
        .filter_map(Result::ok)
        .any(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("ordercast.")
        });
    assert!(has_log_file, "a rolling log file is written");
}
