//! Named leveled loggers.
//!
//! A [`Logger`] owns a name and a handful of settings (threshold, sink, color,
//! caller annotation, name padding) and turns each leveled call into one
//! output line:
//!
//! ```text
//! [ <name> ] <LEVEL> <YYYY-MM-DD HH:MM:SS> <dir>/<file>:<line> <message>
//! ```
//!
//! The `<dir>/<file>:<line>` segment is dropped when caller-source logging is
//! off or the call site cannot be resolved. When colors are on, only the
//! header (everything before the message) is wrapped in the level color.

pub mod core;
mod emit;

pub use self::core::Logger;
pub use emit::TIMESTAMP_FORMAT;
