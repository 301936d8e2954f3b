//! Tests for `fatal`/`fatalf`.
//!
//! A fatal call ends the process, so each case re-runs this test binary
//! filtered down to `fatal_child`, which performs the call selected by
//! `LEVLOG_FATAL_CHILD` and writes to stderr.

use levlog::{Level, Logger, Sink};
use regex::Regex;
use std::process::{Command, Output};

const CHILD_ENV: &str = "LEVLOG_FATAL_CHILD";
const TIMESTAMP: &str = r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}";

#[test]
fn fatal_child() {
    let Ok(mode) = std::env::var(CHILD_ENV) else {
        return;
    };

    let logger = Logger::new("doomed");
    logger.set_sink(Sink::Stderr);
    logger.set_colored(false);
    logger.disable_caller_source();

    match mode.as_str() {
        "plain" => logger.fatal("goodbye"),
        "formatted" => levlog::fatal!(logger, "exit code {}", 1),
        "disabled" => {
            logger.disable();
            logger.set_level(Level::Error);
            logger.fatal("written anyway")
        }
        other => panic!("unknown child mode {other:?}"),
    }
}

fn run_child(mode: &str) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args(["fatal_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, mode)
        .output()
        .expect("spawn child test process")
}

fn fatal_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|line| line.starts_with("[ doomed ]"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_fatal_writes_once_then_exits_nonzero() {
    let output = run_child("plain");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let lines = fatal_lines(&output);
    assert_eq!(lines.len(), 1, "stderr: {lines:?}");
    let pattern = Regex::new(&format!(r"^\[ doomed \] ERROR {TIMESTAMP} goodbye$")).unwrap();
    assert!(pattern.is_match(&lines[0]), "{:?}", lines[0]);
}

#[test]
fn test_fatalf_formats_message() {
    let output = run_child("formatted");
    assert_eq!(output.status.code(), Some(1));
    let lines = fatal_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" exit code 1"));
}

#[test]
fn test_fatal_ignores_enabled_flag() {
    let output = run_child("disabled");
    assert_eq!(output.status.code(), Some(1));
    let lines = fatal_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" written anyway"));
}
