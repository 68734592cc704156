//! Integration tests for `waypath run` and `waypath distances`

mod support;

use predicates::prelude::*;
use std::fs;
use support::{waypath, CHAIN_CONFIG};
use tempfile::tempdir;

// ============================================================================
// Run command
// ============================================================================

#[test]
fn test_run_demo_streams_log() {
    let dir = tempdir().unwrap();
    let output = waypath()
        .current_dir(dir.path())
        .args(["run", "--delay-ms", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Starting relaxation from src1: 0");
    assert_eq!(lines[1], "Visiting node 0 with current distance 0");
    assert!(lines.contains(&"Shortest paths from src1 completed. Distances: 0,3,2,5,7,6"));
    assert!(lines.contains(&"Shortest paths from src2 completed. Distances: 3,0,5,8,5,6"));
    assert!(lines.contains(&"Shortest paths to dest completed. Distances: 6,6,6,3,1,0"));
    assert!(lines.contains(&"Node 0: d1 = 0, d2 = 3, d3 = 6"));
    assert_eq!(lines.last().unwrap(), &"Final minimum weight: 9");
}

#[test]
fn test_run_quiet_prints_only_result() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args(["--quiet", "run", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout("Final minimum weight: 9\n");
}

#[test]
fn test_run_json_report() {
    let dir = tempdir().unwrap();
    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "run", "--delay-ms", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["minimum"], 9.0);
    assert_eq!(json["pivot"], 0);
    assert_eq!(json["query"]["dest"], 5);
    assert_eq!(json["to_dest"][3], 3.0);
    assert_eq!(json["candidates"].as_array().unwrap().len(), 6);
    assert_eq!(json["candidates"][5]["combined"], 12.0);
}

#[test]
fn test_run_records() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args(["--format", "records", "run", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H waypath=1 records=1 mode=run src1=0 src2=1 dest=5 nodes=6\n",
        ))
        .stdout(predicate::str::contains("N 2 d1=2 d2=5 d3=6 combined=13"))
        .stdout(predicate::str::ends_with("M minimum=9 pivot=0\n"));
}

#[test]
fn test_run_swapped_sources_same_minimum() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args([
            "--quiet", "run", "--src1", "1", "--src2", "0", "--delay-ms", "0",
        ])
        .assert()
        .success()
        .stdout("Final minimum weight: 9\n");
}

#[test]
fn test_run_unreachable_destination_is_infinity() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args([
            "--quiet", "run", "--src1", "5", "--src2", "5", "--dest", "0", "--delay-ms", "0",
        ])
        .assert()
        .success()
        .stdout("Final minimum weight: Infinity\n");
}

#[test]
fn test_run_writes_svg() {
    let dir = tempdir().unwrap();
    let svg = dir.path().join("diagram.svg");

    waypath()
        .current_dir(dir.path())
        .args(["--quiet", "run", "--delay-ms", "0", "--svg"])
        .arg(&svg)
        .assert()
        .success();

    let content = fs::read_to_string(&svg).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(content.contains(r#"id="node-0""#));
    assert!(content.contains(r#"id="edge-0-2""#));
    assert!(content.contains("fill=\"red\""));
}

#[test]
fn test_run_invalid_destination() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args(["run", "--dest", "9", "--delay-ms", "0"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "invalid node index for dest: 9 (graph has 6 nodes)",
        ));
}

#[test]
fn test_run_invalid_source_json_error() {
    let dir = tempdir().unwrap();
    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "run", "--src2", "6", "--delay-ms", "0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_node_index");
}

#[test]
fn test_run_uses_configured_query_and_delay() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("waypath.toml"), CHAIN_CONFIG).unwrap();

    // 0 -> 1 -> 2: meeting at 1 costs 2 + 0 + 3
    waypath()
        .current_dir(dir.path())
        .args(["--format", "records", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N 1 d1=2 d2=0 d3=3 combined=5"))
        .stdout(predicate::str::contains("M minimum=5 pivot=1"));
}

// ============================================================================
// Distances command
// ============================================================================

#[test]
fn test_distances_from_source() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args(["distances", "--source", "1", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Visiting node 1 with current distance 0\n",
        ))
        .stdout(predicate::str::ends_with("Distances: 3,0,5,8,5,6\n"));
}

#[test]
fn test_distances_reverse_records() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args([
            "--format", "records", "distances", "--source", "5", "--reverse", "--delay-ms", "0",
        ])
        .assert()
        .success()
        .stdout(
            "H waypath=1 records=1 mode=distances source=5 reverse=true nodes=6\n\
             D 0 6\nD 1 6\nD 2 6\nD 3 3\nD 4 1\nD 5 0\n",
        );
}

#[test]
fn test_distances_json_marks_unreachable_as_null() {
    let dir = tempdir().unwrap();
    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "distances", "--source", "5", "--delay-ms", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], 5);
    assert!(json["distances"][0].is_null());
    assert_eq!(json["distances"][5], 0.0);
}

#[test]
fn test_distances_out_of_range_source() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args(["distances", "--source", "6", "--delay-ms", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid node index"));
}
