//! Integration tests: status-harness CLI.
//!
//! Validates:
//! 1. `render` prints display strings under both label styles.
//! 2. `encode` then `inspect` reproduces the status fields.
//! 3. Malformed records are reported, not fatal.
//! 4. `--log` writes schema-valid JSONL.

use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use arrowstatus_harness::structured_log::{LogLevel, Outcome, validate_log_line};

fn unique_tmp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after UNIX_EPOCH")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}-{}-{nanos}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn harness() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_status-harness"));
    cmd.env_remove("ARROWSTATUS_LABELS");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run status-harness");
    assert!(
        output.status.success(),
        "status-harness failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

#[test]
fn render_prints_display_string() {
    let out = stdout_of(harness().args([
        "render",
        "--code",
        "io_error",
        "--message",
        "disk full",
        "--aux",
        "28",
    ]));
    assert_eq!(out, "IO error: disk full\n");

    let out = stdout_of(harness().args(["render", "--code", "ok"]));
    assert_eq!(out, "OK\n");

    let out = stdout_of(harness().args(["render", "--code", "KeyError"]));
    assert_eq!(out, "Key error: \n");
}

#[test]
fn render_honours_label_style() {
    let args = ["render", "--code", "type_error", "--message", "x"];
    assert_eq!(stdout_of(harness().args(args)), "Value error: x\n");
    assert_eq!(
        stdout_of(harness().args(args).args(["--labels", "corrected"])),
        "Type error: x\n"
    );
    assert_eq!(
        stdout_of(harness().args(args).env("ARROWSTATUS_LABELS", "corrected")),
        "Type error: x\n"
    );
}

#[test]
fn encode_then_inspect_round_trips() {
    let dir = unique_tmp_dir("status-harness-roundtrip");
    let record = dir.join("record.bin");
    stdout_of(harness().args([
        "encode",
        "--code",
        "not_implemented",
        "--message",
        "feature X",
        "--aux",
        "-1",
        "--output",
    ]).arg(&record));

    let bytes = std::fs::read(&record).expect("read record");
    assert_eq!(bytes.len(), "feature X".len() + 7);

    let json = stdout_of(harness().args(["inspect", "--input"]).arg(&record));
    let report: serde_json::Value = serde_json::from_str(&json).expect("json report");
    assert_eq!(report["status"]["kind"], "Decoded");
    assert_eq!(report["code"], "not_implemented");
    assert_eq!(report["auxiliary_code"], -1);
    assert_eq!(report["message"], "feature X");
    assert_eq!(report["display"], "Not implemented: feature X");

    let plain = stdout_of(
        harness()
            .args(["inspect", "--format", "plain", "--input"])
            .arg(&record),
    );
    assert!(plain.contains("display: Not implemented: feature X"));
}

#[test]
fn encode_refuses_ok() {
    let dir = unique_tmp_dir("status-harness-encode-ok");
    let output = harness()
        .args(["encode", "--code", "ok", "--output"])
        .arg(dir.join("never.bin"))
        .output()
        .expect("run status-harness");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no packed form"));
}

#[test]
fn inspect_reports_malformed_record() {
    let dir = unique_tmp_dir("status-harness-malformed");
    let record = dir.join("bad.bin");
    let mut bytes = 9_u32.to_ne_bytes().to_vec();
    bytes.extend_from_slice(&[4, 0, 0, b'x']);
    std::fs::write(&record, bytes).expect("write record");

    let json = stdout_of(harness().args(["inspect", "--input"]).arg(&record));
    let report: serde_json::Value = serde_json::from_str(&json).expect("json report");
    assert_eq!(report["status"]["kind"], "Rejected");
    assert!(report["error"].as_str().unwrap().contains("declares a 9-byte message"));
}

#[test]
fn inspect_reports_empty_file_as_truncated() {
    let dir = unique_tmp_dir("status-harness-empty");
    let record = dir.join("empty.bin");
    std::fs::write(&record, b"").expect("write record");

    let json = stdout_of(harness().args(["inspect", "--input"]).arg(&record));
    let report: serde_json::Value = serde_json::from_str(&json).expect("json report");
    assert_eq!(report["status"]["kind"], "Rejected");
    assert_eq!(report["input_len"], 0);
    assert_eq!(
        report["error"],
        "packed status is 0 bytes, shorter than the 7-byte header"
    );
}

#[test]
fn failed_command_is_logged_as_error() {
    let dir = unique_tmp_dir("status-harness-fail");
    let log = dir.join("run.jsonl");
    let output = harness()
        .args(["inspect", "--input"])
        .arg(dir.join("missing.bin"))
        .arg("--log")
        .arg(&log)
        .output()
        .expect("run status-harness");
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());

    let text = std::fs::read_to_string(&log).expect("read log");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    let entry = validate_log_line(lines[0], 1).expect("schema-valid log line");
    assert_eq!(entry.event, "inspect");
    assert_eq!(entry.level, LogLevel::Error);
    assert_eq!(entry.outcome, Some(Outcome::Error));
    let details = entry.details.expect("error details");
    assert!(details["error"].as_str().unwrap().starts_with("io:"));
}

#[test]
fn log_flag_writes_valid_jsonl() {
    let dir = unique_tmp_dir("status-harness-log");
    let log = dir.join("logs").join("run.jsonl");
    stdout_of(
        harness()
            .args(["render", "--code", "io_error", "--aux", "28", "--log"])
            .arg(&log),
    );

    let text = std::fs::read_to_string(&log).expect("read log");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    let entry = validate_log_line(lines[0], 1).expect("schema-valid log line");
    assert_eq!(entry.event, "render");
    assert_eq!(entry.errno, Some(28));
    assert_eq!(entry.label_style.as_deref(), Some("compat"));
    assert!(entry.trace_id.ends_with("::001"));
}
