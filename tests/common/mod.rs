//! Shared integration test helpers for levlog.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` keeps files that only use some helpers warning-free.

#![allow(dead_code)]

use levlog::{Logger, Registry};
use parking_lot::Mutex;
use regex::Regex;
use std::sync::Arc;

/// Regex fragment matching a header timestamp.
pub const TIMESTAMP: &str = r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}";

/// In-memory sink whose contents a test can inspect.
pub type Buffer = Arc<Mutex<Vec<u8>>>;

/// Point `logger` at a fresh buffer, with colors and caller source off so
/// lines are easy to match.
pub fn capture(logger: &Logger) -> Buffer {
    let buf: Buffer = Arc::new(Mutex::new(Vec::new()));
    logger.set_writer(buf.clone());
    logger.set_colored(false);
    logger.disable_caller_source();
    buf
}

/// Drain the buffer and return its lines.
pub fn drain_lines(buf: &Buffer) -> Vec<String> {
    let bytes = std::mem::take(&mut *buf.lock());
    String::from_utf8(bytes)
        .expect("log output is UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Regex for a full uncolored line with no source segment.
pub fn plain_line(name: &str, level: &str, message: &str) -> Regex {
    Regex::new(&format!(
        r"^\[ {} \] {:<5} {TIMESTAMP} {}$",
        regex::escape(name),
        level,
        regex::escape(message)
    ))
    .expect("valid line pattern")
}

/// A registry isolated from the process-wide one, plus one captured logger.
pub fn isolated(name: &str) -> (Registry, Arc<Logger>, Buffer) {
    let registry = Registry::new();
    let logger = registry.get(name);
    let buf = capture(&logger);
    (registry, logger, buf)
}
