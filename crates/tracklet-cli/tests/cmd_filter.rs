//! Integration tests for `tracklet filter`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Path to the compiled `tracklet` binary.
fn tracklet_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("tracklet");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(name);
    path
}

// ---------------------------------------------------------------------------
// filter: human mode — pruning
// ---------------------------------------------------------------------------

#[test]
fn filter_prunes_short_side_chain() {
    let out = Command::new(tracklet_bin())
        .args([
            "filter",
            fixture("side-chain.tracks.json").to_str().expect("path"),
            "--min-length",
            "4",
        ])
        .output()
        .expect("run tracklet filter");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["0 -> 1", "1 -> 2", "2 -> 3", "3 -> 4", "4 -> 5"],
        "the 0->6->5 side chain should be pruned"
    );
}

#[test]
fn filter_low_threshold_keeps_everything() {
    let out = Command::new(tracklet_bin())
        .args([
            "filter",
            fixture("side-chain.tracks.json").to_str().expect("path"),
            "--min-length",
            "1",
        ])
        .output()
        .expect("run tracklet filter");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 7, "all 7 edges should survive");
}

#[test]
fn filter_empty_survivor_set_still_exits_0() {
    let out = Command::new(tracklet_bin())
        .args([
            "filter",
            fixture("side-chain.tracks.json").to_str().expect("path"),
            "--min-length",
            "100",
        ])
        .output()
        .expect("run tracklet filter");
    assert!(
        out.status.success(),
        "an empty result is not an error: {:?}",
        out.status.code()
    );
    assert!(out.stdout.is_empty(), "no edges should be printed");
}

#[test]
fn filter_respects_node_weights() {
    // The weighted chain has total length 9; threshold 9 keeps it intact.
    let out = Command::new(tracklet_bin())
        .args([
            "filter",
            fixture("weighted-chain.tracks.json")
                .to_str()
                .expect("path"),
            "--min-length",
            "9",
        ])
        .output()
        .expect("run tracklet filter");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 5, "all 5 edges should survive");
}

// ---------------------------------------------------------------------------
// filter: JSON mode
// ---------------------------------------------------------------------------

#[test]
fn filter_json_output_has_parallel_arrays() {
    let out = Command::new(tracklet_bin())
        .args([
            "filter",
            fixture("side-chain.tracks.json").to_str().expect("path"),
            "--min-length",
            "4",
            "--format",
            "json",
        ])
        .output()
        .expect("run tracklet filter");
    assert!(out.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_eq!(value["count"], 5);
    assert_eq!(value["sources"], serde_json::json!([0, 1, 2, 3, 4]));
    assert_eq!(value["targets"], serde_json::json!([1, 2, 3, 4, 5]));
}

// ---------------------------------------------------------------------------
// filter: stdin
// ---------------------------------------------------------------------------

#[test]
fn filter_reads_stdin_with_dash() {
    let mut child = Command::new(tracklet_bin())
        .args(["filter", "-", "--min-length", "2", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tracklet filter");

    child
        .stdin
        .as_mut()
        .expect("stdin handle")
        .write_all(br#"{"sources": [0, 1], "targets": [1, 2]}"#)
        .expect("write stdin");

    let out = child.wait_with_output().expect("wait for tracklet");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());

    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_eq!(value["count"], 2);
}

// ---------------------------------------------------------------------------
// filter: failure exit codes
// ---------------------------------------------------------------------------

#[test]
fn filter_cyclic_graph_exits_1() {
    let out = Command::new(tracklet_bin())
        .args([
            "filter",
            fixture("cyclic.tracks.json").to_str().expect("path"),
            "--min-length",
            "1",
        ])
        .output()
        .expect("run tracklet filter");
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("cycle"),
        "stderr should mention the cycle: {stderr}"
    );
}

#[test]
fn filter_missing_file_exits_2() {
    let out = Command::new(tracklet_bin())
        .args(["filter", "no-such-file.tracks.json", "--min-length", "1"])
        .output()
        .expect("run tracklet filter");
    assert_eq!(out.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("not found"),
        "stderr should mention the missing file: {stderr}"
    );
}

#[test]
fn filter_malformed_json_exits_2() {
    let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
    tmp.write_all(b"{\"sources\": [0,").expect("write temp file");

    let out = Command::new(tracklet_bin())
        .args([
            "filter",
            tmp.path().to_str().expect("path"),
            "--min-length",
            "1",
        ])
        .output()
        .expect("run tracklet filter");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn filter_mismatched_edge_lists_exit_2() {
    let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
    tmp.write_all(br#"{"sources": [0, 1], "targets": [1]}"#)
        .expect("write temp file");

    let out = Command::new(tracklet_bin())
        .args([
            "filter",
            tmp.path().to_str().expect("path"),
            "--min-length",
            "1",
        ])
        .output()
        .expect("run tracklet filter");
    assert_eq!(out.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("mismatch"),
        "stderr should mention the mismatch: {stderr}"
    );
}
