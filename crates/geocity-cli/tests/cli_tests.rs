//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run `geocity` in an empty directory so no stray config file is picked up.
fn geocity(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("geocity").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("GEOCITY_SCORE_INCREMENT");
    cmd
}

#[test]
fn check_parallel_within_tolerance() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["check", "--mode", "parallel", "--angle", "1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: 1.5° is parallel."));
}

#[test]
fn check_parallel_at_band_edge_fails() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["check", "--mode", "parallel", "--angle", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: 2° is not parallel"));
}

#[test]
fn check_negative_angle() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["check", "--mode", "parallel", "--angle", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success"));
}

#[test]
fn check_perpendicular() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["check", "--mode", "perpendicular", "--angle", "89"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: 89° is perpendicular."));

    geocity(&dir)
        .args(["check", "--mode", "perp", "--angle", "87.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aim for 90°"));
}

#[test]
fn check_clamps_to_slider_range() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["check", "--mode", "parallel", "--angle", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Angle clamped to 45°"));
}

#[test]
fn check_rejects_practice_mode() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["check", "--mode", "practice", "--angle", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an interactive mode"));
}

#[test]
fn classify_angles() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["classify", "--angle", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30°: intersecting"));

    geocity(&dir)
        .args(["classify", "--angle", "90.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("perpendicular"));
}

#[test]
fn play_seeded_session_with_report() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("out/session.json");

    geocity(&dir)
        .args(["play", "--rounds", "3", "--seed", "7", "--report"])
        .arg(&report)
        .write_stdin("parallel\nperpendicular\nintersecting\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Round 3/3"))
        .stdout(predicate::str::contains("/30"))
        .stdout(predicate::str::contains("Report saved to"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["seed"], 7);
    assert_eq!(json["score"]["total_possible"], 30);
    assert_eq!(json["history"].as_array().unwrap().len(), 3);
    assert_eq!(json["stats"]["answered"], 3);
}

#[test]
fn play_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let run = |dir: &TempDir| {
        let output = geocity(dir)
            .args(["play", "--rounds", "4", "--seed", "42"])
            .write_stdin("parallel\nparallel\nparallel\nparallel\n")
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(&dir), run(&dir));
}

#[test]
fn play_stops_when_input_ends() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["play", "--rounds", "3", "--seed", "1"])
        .write_stdin("parallel\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input ended after 1 of 3 round(s)."))
        .stdout(predicate::str::contains("/10"));
}

#[test]
fn play_uses_env_increment() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .env("GEOCITY_SCORE_INCREMENT", "5")
        .args(["play", "--rounds", "1", "--seed", "3"])
        .write_stdin("intersecting\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("/5"));
}

#[test]
fn play_uses_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("geocity.toml"), "score_increment = 25\n").unwrap();

    geocity(&dir)
        .args(["play", "--rounds", "2", "--seed", "3"])
        .write_stdin("parallel\nparallel\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("/50"));
}

#[test]
fn sample_respects_guard() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["sample", "--count", "3000", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 3000 question(s)"))
        .stdout(predicate::str::contains("intersecting"))
        .stdout(predicate::str::contains("Guard violations: 0"));
}

#[test]
fn validate_default_config() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("intersecting    = [-80, 80)"))
        .stdout(predicate::str::contains("Config valid."));
}

#[test]
fn validate_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "angle_min = -5\nangle_span = 10\n").unwrap();

    geocity(&dir)
        .arg("validate")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("clears the 10° guard"));
}

#[test]
fn validate_missing_config() {
    let dir = TempDir::new().unwrap();
    geocity(&dir)
        .args(["validate", "--config", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    geocity(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created geocity.toml"));
    assert!(dir.path().join("geocity.toml").exists());

    // The generated file is picked up and valid
    geocity(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config valid."));

    geocity(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
