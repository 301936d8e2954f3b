//! Output destinations.
//!
//! A logger writes each line with exactly one `write_all` call so concurrent
//! emitters can interleave whole lines but never bytes within a line.

use crate::config::Target;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// A writer shared between a logger and the code that created it.
///
/// The logger only holds a clone of the `Arc`; the caller keeps its own handle
/// and can inspect or swap out what was written.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Wrap a writer so it can be handed to [`Logger::set_writer`](crate::Logger::set_writer).
pub fn shared<W>(writer: W) -> SharedWriter
where
    W: Write + Send + 'static,
{
    Arc::new(Mutex::new(writer))
}

/// Where a logger sends its lines.
#[derive(Clone, Default)]
pub enum Sink {
    /// Process standard output
    #[default]
    Stdout,
    /// Process standard error
    Stderr,
    /// A caller-provided writer
    Writer(SharedWriter),
}

impl Sink {
    /// Write one complete line.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            Sink::Stderr => io::stderr().lock().write_all(line.as_bytes()),
            Sink::Writer(writer) => writer.lock().write_all(line.as_bytes()),
        }
    }

    /// Flush the underlying stream.
    pub fn flush(&self) -> io::Result<()> {
        match self {
            Sink::Stdout => io::stdout().flush(),
            Sink::Stderr => io::stderr().flush(),
            Sink::Writer(writer) => writer.lock().flush(),
        }
    }
}

impl From<Target> for Sink {
    fn from(target: Target) -> Self {
        match target {
            Target::Stdout => Sink::Stdout,
            Target::Stderr => Sink::Stderr,
        }
    }
}

impl From<SharedWriter> for Sink {
    fn from(writer: SharedWriter) -> Self {
        Sink::Writer(writer)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("Stdout"),
            Sink::Stderr => f.write_str("Stderr"),
            Sink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingWriter {
        buf: Vec<u8>,
        writes: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_receives_line() {
        let writer = Arc::new(Mutex::new(CountingWriter {
            buf: Vec::new(),
            writes: 0,
        }));
        let sink = Sink::Writer(writer.clone());
        sink.write_line("hello\n").unwrap();
        sink.flush().unwrap();

        let guard = writer.lock();
        assert_eq!(guard.buf, b"hello\n");
        assert_eq!(guard.writes, 1);
    }

    #[test]
    fn test_sink_from_target() {
        assert!(matches!(Sink::from(Target::Stdout), Sink::Stdout));
        assert!(matches!(Sink::from(Target::Stderr), Sink::Stderr));
        assert_eq!(format!("{:?}", Sink::from(shared(Vec::new()))), "Writer(..)");
    }
}
