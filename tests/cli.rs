use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn resv_cli(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("resv-cli").expect("binary");
    cmd.arg("--config-dir").arg(config_dir);
    cmd
}

#[test]
fn help_lists_command_groups() {
    Command::cargo_bin("resv-cli")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("restaurant"))
        .stdout(predicate::str::contains("hotel"))
        .stdout(predicate::str::contains("property"));
}

#[test]
fn rejects_unknown_subcommand() {
    Command::cargo_bin("resv-cli")
        .expect("binary")
        .arg("flights")
        .assert()
        .failure();
}

#[test]
fn rejects_invalid_mode() {
    let dir = tempdir().expect("tempdir");
    resv_cli(dir.path())
        .args(["--mode", "sideways", "home"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown API mode"));
}

#[test]
fn rejects_malformed_booking_date() {
    let dir = tempdir().expect("tempdir");
    resv_cli(dir.path())
        .args([
            "--mode",
            "mock",
            "restaurant",
            "tables",
            "--date",
            "junk",
            "--time",
            "19:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn mock_mode_lists_demo_bookings() {
    let dir = tempdir().expect("tempdir");
    resv_cli(dir.path())
        .args(["--mode", "mock", "restaurant", "bookings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Grand Palace"));
}

#[test]
fn mock_mode_lists_demo_properties() {
    let dir = tempdir().expect("tempdir");
    resv_cli(dir.path())
        .args(["--mode", "mock", "property", "list", "--listing-type", "sale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("For Sale"));
}

#[test]
fn config_show_prints_bootstrapped_profile() {
    let dir = tempdir().expect("tempdir");
    resv_cli(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default Profile: default"));
}
