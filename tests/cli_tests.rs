// CLI behaviour tests for the damper-seq binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_generate_prints_checklist_table() {
    let mut cmd = Command::cargo_bin("damper-seq").unwrap();

    cmd.args(["generate", "--start-floor", "0", "--floors", "2", "--dampers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INSPECTION SEQUENCE"))
        .stdout(predicate::str::contains("Floor 01"))
        .stdout(predicate::str::contains("SS1-2"))
        .stdout(predicate::str::contains("Total items: 4"));
}

#[test]
fn test_generate_json_output() {
    let mut cmd = Command::cargo_bin("damper-seq").unwrap();
    let output = cmd
        .args(["generate", "--floors", "3", "--shaft-prefix", "SC", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2]["floor_number"], "02");
    assert_eq!(items[2]["shaft_id"], "SC");
}

#[test]
fn test_generate_rejects_zero_floors() {
    let mut cmd = Command::cargo_bin("damper-seq").unwrap();

    cmd.args(["generate", "--floors", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("floor_count"));
}

#[test]
fn test_generate_rejects_floor_range_overflow() {
    let mut cmd = Command::cargo_bin("damper-seq").unwrap();

    cmd.args(["generate", "--start-floor", "2147483647", "--floors", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the supported range"));
}

#[test]
fn test_walk_reports_completed_session() {
    let mut cmd = Command::cargo_bin("damper-seq").unwrap();

    cmd.args(["walk", "--building", "Harbour Tower", "--floors", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Floor 00"))
        .stdout(predicate::str::contains("\"status\": \"completed\""))
        .stdout(predicate::str::contains("\"completed_count\": 2"));
}

#[test]
fn test_walk_without_building_fails() {
    let mut cmd = Command::cargo_bin("damper-seq").unwrap();

    cmd.args(["walk", "--building", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("building is required"));
}
