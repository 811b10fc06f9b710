//! Integration tests for input that is not a valid event.

use predicates::prelude::*;

use crate::jsonlayout;

const GOOD: &str = r#"{"loggerName":"ok","level":"INFO","timestampMillis":0,"threadName":"t","message":"kept"}"#;

#[test]
fn undecodable_lines_are_skipped() {
    let input = format!("not json\n{GOOD}\n{{\"level\":\"INFO\"}}\n[1,2,3]\n");
    let output = jsonlayout().write_stdin(input).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains(r#""message":"kept""#));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipping undecodable event"));
}

#[test]
fn unencodable_event_is_dropped() {
    let far_future = r#"{"loggerName":"bad","level":"INFO","timestampMillis":9223372036854775807,"threadName":"t","message":"lost"}"#;
    let input = format!("{far_future}\n{GOOD}\n");
    jsonlayout()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("kept"))
        .stdout(predicate::str::contains("lost").not())
        .stderr(predicate::str::contains("dropping event"));
}

#[test]
fn diagnostics_never_reach_stdout() {
    let input = format!("garbage\n{GOOD}\n");
    let output = jsonlayout().arg("--verbose").write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        assert!(line.starts_with("{\"logger\":"), "unexpected stdout line: {line}");
    }
}

#[test]
fn invalid_utf8_lines_are_skipped() {
    let mut input = b"\xff\xfe not utf-8 \xc3\x28\n".to_vec();
    input.extend_from_slice(GOOD.as_bytes());
    input.push(b'\n');

    let output = jsonlayout().write_stdin(input).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains(r#""message":"kept""#));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid UTF-8"));
}
