//! Integration tests for the `watch` command over a replayed frame directory.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_frame(dir: &Path, name: &str) {
    image::RgbImage::new(8, 8)
        .save(dir.join(name))
        .expect("write frame");
}

#[test]
fn test_watch_end_to_end() {
    let dir = tempdir().expect("create temp dir");
    let frames = dir.path().join("frames");
    fs::create_dir(&frames).expect("create frames dir");
    write_frame(&frames, "frame_001.png");
    write_frame(&frames, "frame_002.png");
    write_frame(&frames, "frame_003.png");
    write_frame(&frames, "frame_004.png");

    let manifest = dir.path().join("predictions.json");
    fs::write(
        &manifest,
        r#"{
  "frame_001": { "label": "Vaquita", "confidence": 0.95 },
  "frame_002": { "label": "Human", "confidence": 0.99 },
  "frame_003": { "label": "Lion", "confidence": 0.42 }
}"#,
    )
    .expect("write manifest");

    let log = dir.path().join("logs").join("detection_logs.json");

    let mut cmd = cargo_bin_cmd!("wildwatch");
    cmd.arg("--quiet")
        .arg("watch")
        .arg("--frames")
        .arg(&frames)
        .arg("--predictions")
        .arg(&manifest)
        .arg("--log-file")
        .arg(&log)
        .arg("--interval-ms")
        .arg("0");

    // frame_001 passes the gate; frame_002 is excluded, frame_003 is below
    // threshold, frame_004 has no manifest entry (sentinel).
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 detection(s) logged"));

    let content = fs::read_to_string(&log).expect("read log");
    let records: serde_json::Value = serde_json::from_str(&content).expect("parse log");
    let records = records.as_array().expect("log is an array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["class_name"], "Vaquita");
    assert_eq!(records[0]["category"], "EN(G1)");
}

#[test]
fn test_watch_cooldown_suppresses_repeat_sightings() {
    let dir = tempdir().expect("create temp dir");
    let frames = dir.path().join("frames");
    fs::create_dir(&frames).expect("create frames dir");
    // Two frames of the same species inside one cooldown window.
    write_frame(&frames, "a.png");
    write_frame(&frames, "b.png");

    let manifest = dir.path().join("predictions.json");
    fs::write(
        &manifest,
        r#"{
  "a": { "label": "Red Panda", "confidence": 0.94 },
  "b": { "label": "Red Panda", "confidence": 0.96 }
}"#,
    )
    .expect("write manifest");

    let log = dir.path().join("detection_logs.json");

    let mut cmd = cargo_bin_cmd!("wildwatch");
    cmd.arg("--quiet")
        .arg("watch")
        .arg("--frames")
        .arg(&frames)
        .arg("--predictions")
        .arg(&manifest)
        .arg("--log-file")
        .arg(&log)
        .arg("--interval-ms")
        .arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 detection(s) logged"));
}

#[test]
fn test_watch_missing_frames_dir_is_fatal() {
    let dir = tempdir().expect("create temp dir");
    let manifest = dir.path().join("predictions.json");
    fs::write(&manifest, "{}").expect("write manifest");

    let mut cmd = cargo_bin_cmd!("wildwatch");
    cmd.arg("--quiet")
        .arg("watch")
        .arg("--frames")
        .arg(dir.path().join("nonexistent"))
        .arg("--predictions")
        .arg(&manifest);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to open frame source"));
}

#[test]
fn test_watch_malformed_manifest_is_fatal() {
    let dir = tempdir().expect("create temp dir");
    let frames = dir.path().join("frames");
    fs::create_dir(&frames).expect("create frames dir");
    write_frame(&frames, "a.png");

    let manifest = dir.path().join("predictions.json");
    fs::write(&manifest, "not json").expect("write manifest");

    let mut cmd = cargo_bin_cmd!("wildwatch");
    cmd.arg("--quiet")
        .arg("watch")
        .arg("--frames")
        .arg(&frames)
        .arg("--predictions")
        .arg(&manifest);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("prediction manifest"));
}

#[test]
fn test_watch_heals_corrupt_log() {
    let dir = tempdir().expect("create temp dir");
    let frames = dir.path().join("frames");
    fs::create_dir(&frames).expect("create frames dir");
    write_frame(&frames, "a.png");

    let manifest = dir.path().join("predictions.json");
    fs::write(
        &manifest,
        r#"{ "a": { "label": "Vaquita", "confidence": 0.95 } }"#,
    )
    .expect("write manifest");

    let log = dir.path().join("detection_logs.json");
    fs::write(&log, "corrupted ][ content").expect("write corrupt log");

    let mut cmd = cargo_bin_cmd!("wildwatch");
    cmd.arg("--quiet")
        .arg("watch")
        .arg("--frames")
        .arg(&frames)
        .arg("--predictions")
        .arg(&manifest)
        .arg("--log-file")
        .arg(&log)
        .arg("--interval-ms")
        .arg("0");

    cmd.assert().success();

    let content = fs::read_to_string(&log).expect("read log");
    let records: serde_json::Value = serde_json::from_str(&content).expect("parse log");
    assert_eq!(records.as_array().map(Vec::len), Some(1));
}
