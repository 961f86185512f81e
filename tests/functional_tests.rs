// Functional tests for the futsalku binary
// These run the non-interactive subcommands end to end

use std::process::Command;
use std::str;
use tempfile::TempDir;

// Runs futsalku with an empty config directory so a local config.json never leaks in
fn run_futsalku(args: &[&str]) -> (bool, String, String) {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_futsalku"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute futsalku binary");

    let stdout = str::from_utf8(&output.stdout)
        .expect("stdout is not UTF-8")
        .to_string();
    let stderr = str::from_utf8(&output.stderr)
        .expect("stderr is not UTF-8")
        .to_string();
    (output.status.success(), stdout, stderr)
}

#[test]
fn test_venues_lists_all_venues() {
    let (ok, stdout, stderr) = run_futsalku(&["venues"]);
    assert!(ok, "venues failed: {}", stderr);
    assert!(stdout.contains("Futsal Arena Sudirman"));
    assert!(stdout.contains("Sports Hub Jakarta"));
    assert!(stdout.contains("4 venue(s)"));
}

#[test]
fn test_venues_filter_outdoor() {
    let (ok, stdout, _) = run_futsalku(&["venues", "--filter", "outdoor"]);
    assert!(ok);
    assert!(stdout.contains("1 venue(s)"));
    assert!(stdout.contains("Outdoor"));
}

#[test]
fn test_venues_unknown_filter_fails() {
    let (ok, _, stderr) = run_futsalku(&["venues", "--filter", "beach"]);
    assert!(!ok);
    assert!(stderr.contains("Unknown filter"));
}

#[test]
fn test_venues_json_is_parseable() {
    let (ok, stdout, _) = run_futsalku(&["venues", "--json"]);
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let venues = value.as_array().expect("expected an array");
    assert_eq!(venues.len(), 4);
    assert_eq!(venues[0]["id"], 1);
}

#[test]
fn test_slots_marks_booked_hours() {
    let (ok, stdout, _) = run_futsalku(&["slots"]);
    assert!(ok);
    assert!(stdout.contains("08:00 (booked)"));
    assert!(stdout.contains("20:00 (booked)"));
    assert!(stdout.contains("14 of 18 slots available"));
}

#[test]
fn test_quote_with_flat_promo() {
    let (ok, stdout, stderr) = run_futsalku(&[
        "quote", "--venue", "1", "--time", "13:00", "--duration", "2", "--promo", "DISKON50K",
    ]);
    assert!(ok, "quote failed: {}", stderr);
    assert!(stdout.contains("Rp 300.000"));
    assert!(stdout.contains("Diskon DISKON50K"));
    assert!(stdout.contains("Rp 250.000"));
}

#[test]
fn test_quote_json_total() {
    let (ok, stdout, _) = run_futsalku(&[
        "quote", "--venue", "2", "--time", "19:00", "--duration", "1", "--promo", "first30",
        "--json",
    ]);
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(value["base"], 180_000);
    assert_eq!(value["discount"], 54_000);
    assert_eq!(value["total"], 126_000);
    assert_eq!(value["promo"], "FIRST30");
}

#[test]
fn test_quote_rejects_booked_slot() {
    let (ok, _, stderr) = run_futsalku(&["quote", "--venue", "1", "--time", "08:00"]);
    assert!(!ok);
    assert!(stderr.contains("already booked"));
}

#[test]
fn test_quote_rejects_unknown_venue() {
    let (ok, _, stderr) = run_futsalku(&["quote", "--venue", "9", "--time", "13:00"]);
    assert!(!ok);
    assert!(stderr.contains("Unknown venue: 9"));
}

#[test]
fn test_quote_rejects_long_duration() {
    let (ok, _, stderr) = run_futsalku(&[
        "quote", "--venue", "1", "--time", "13:00", "--duration", "4",
    ]);
    assert!(!ok);
    assert!(stderr.contains("Invalid duration"));
}

#[test]
fn test_bookings_history_tab() {
    let (ok, stdout, _) = run_futsalku(&["bookings", "--tab", "history"]);
    assert!(ok);
    assert!(stdout.contains("=== History"));
    assert!(!stdout.contains("=== Upcoming"));
}

#[test]
fn test_version_mentions_build_date() {
    let (ok, stdout, _) = run_futsalku(&["--version"]);
    assert!(ok);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
