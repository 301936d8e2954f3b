//! Typed error type for levlog.
//!
//! Filtered-out calls are never errors. The variants below cover sink write
//! failures plus the parse/load failures of the configuration layer.

use std::io;
use thiserror::Error;

/// Errors surfaced by logger emission and configuration.
#[derive(Debug, Error)]
pub enum LogError {
    /// The sink rejected a formatted line.
    #[error("failed to write log line: {0}")]
    Write(#[source] io::Error),

    /// A level name could not be parsed.
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),

    /// A color name could not be parsed.
    #[error("unknown color: {0:?}")]
    UnknownColor(String),

    /// An output target name could not be parsed.
    #[error("unknown output target: {0:?} (expected \"stdout\" or \"stderr\")")]
    UnknownTarget(String),

    /// A config document was not valid YAML for [`LoggerConfig`](crate::LoggerConfig).
    #[error("invalid logger config: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// A config file could not be read.
    #[error("failed to read logger config: {0}")]
    Io(#[source] io::Error),

    /// The `log` facade already has a global logger installed.
    #[error("failed to install log bridge: {0}")]
    BridgeInstall(#[from] log::SetLoggerError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LogError>;
