//! Integration tests for basic stdin->stdout encoding.

use predicates::prelude::*;

use crate::jsonlayout;

const HELLO: &str = r#"{"loggerName":"org.example","level":"INFO","timestampMillis":0,"threadName":"main","message":"Hello World"}"#;

#[test]
fn empty_stdin_exits_zero() {
    jsonlayout().write_stdin("").assert().success().stdout("");
}

#[test]
fn single_event_encoded_exactly() {
    jsonlayout()
        .write_stdin(HELLO)
        .assert()
        .success()
        .stdout(
            "{\"logger\":\"org.example\",\"level\":\"INFO\",\"date\":\"1970-01-01 12:00:00\",\
             \"timestamp\":0,\"threadName\":\"main\",\"message\":\"Hello World\"}\n",
        );
}

#[test]
fn one_output_line_per_event() {
    let input = format!("{HELLO}\n{HELLO}\n{HELLO}\n");
    let output = jsonlayout().write_stdin(input).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.ends_with("}\n"));
}

#[test]
fn blank_lines_ignored() {
    let input = format!("\n{HELLO}\n   \n");
    let output = jsonlayout().write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn context_keys_flag_selects_mdc() {
    let input = r#"{"loggerName":"a","level":"INFO","timestampMillis":0,"threadName":"t","message":"m","contextMap":{"UserId":"U1","ProjectId":"P1","Other":"x"}}"#;
    jsonlayout()
        .arg("--context-keys=UserId,ProjectId")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""MDC":{"UserId":"U1","ProjectId":"P1"}"#))
        .stdout(predicate::str::contains("Other").not());
}

#[test]
fn no_context_keys_no_mdc() {
    let input = r#"{"loggerName":"a","level":"INFO","timestampMillis":0,"threadName":"t","message":"m","contextMap":{"UserId":"U1"}}"#;
    jsonlayout()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("MDC").not());
}

#[test]
fn throwable_and_ndc_rendered() {
    let input = r#"{"loggerName":"a","level":"ERROR","timestampMillis":0,"threadName":"t","message":"m","nestedContext":"NDC1 NDC2","throwableTrace":["java.lang.IllegalArgumentException: Test Exception in event","\tat x.y(Z.java:1)"]}"#;
    jsonlayout()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""throwable":"java.lang.IllegalArgumentException: Test Exception in event\n\tat x.y(Z.java:1)\n""#,
        ))
        .stdout(predicate::str::ends_with("\"NDC\":\"NDC1 NDC2\"}\n"));
}

#[test]
fn null_message_rendered_as_null_string() {
    let input = r#"{"loggerName":"a","level":"INFO","timestampMillis":0,"threadName":"t","message":null}"#;
    jsonlayout()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""message":"null""#));
}

#[test]
fn date_follows_tz_env() {
    // 2026-01-15T10:30:00Z is 12:30 in a UTC+2 zone (POSIX TZ string).
    let input = r#"{"loggerName":"a","level":"INFO","timestampMillis":1768473000123,"threadName":"t","message":"m"}"#;
    jsonlayout()
        .env("TZ", "XXX-2")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""date":"2026-01-15 12:30:00""#))
        .stdout(predicate::str::contains(r#""timestamp":1768473000123"#));
}
