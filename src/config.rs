//! Logger defaults.
//!
//! A [`LoggerConfig`] describes how a freshly created [`Logger`](crate::Logger)
//! is set up. Registries hold one and apply it to every logger they create.
//! Configs can be written in YAML and adjusted from the environment:
//!
//! - `LEVLOG_LEVEL`: level name (`debug`, `info`, `warn`, `error`) or index
//! - `LEVLOG_COLOR`: `1`/`true`/`always` or `0`/`false`/`never`
//! - `LEVLOG_TARGET`: `stdout` or `stderr`
//!
//! Unparseable environment values are ignored and the previous value kept.

use crate::error::{LogError, Result};
use crate::level::Level;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Environment variable overriding the default level.
pub const ENV_LEVEL: &str = "LEVLOG_LEVEL";
/// Environment variable overriding the default color flag.
pub const ENV_COLOR: &str = "LEVLOG_COLOR";
/// Environment variable overriding the default output stream.
pub const ENV_TARGET: &str = "LEVLOG_TARGET";

/// Standard stream a logger writes to when no custom writer is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Process standard output
    #[default]
    Stdout,
    /// Process standard error
    Stderr,
}

impl FromStr for Target {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(Target::Stdout),
            "stderr" => Ok(Target::Stderr),
            _ => Err(LogError::UnknownTarget(s.to_string())),
        }
    }
}

/// Settings applied to newly created loggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level emitted
    pub level: Level,
    /// Wrap headers in the level color
    pub colored: bool,
    /// Output stream
    pub target: Target,
    /// Pad logger names to this width (0 = no padding)
    pub name_width: usize,
    /// Extra stack frames to skip above the direct caller
    pub caller_depth: usize,
    /// Append `<dir>/<file>:<line>` to headers
    pub caller_source: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            colored: true,
            target: Target::Stdout,
            name_width: 0,
            caller_depth: 0,
            caller_source: true,
        }
    }
}

impl LoggerConfig {
    /// Parse a config from a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(LogError::Io)?;
        let config = Self::from_yaml_str(&contents)?;
        log::debug!("Loaded logger config from {:?}", path);
        Ok(config)
    }

    /// Serialize the config to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Default config with process environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Apply `LEVLOG_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// `lookup` receives the `LEVLOG_*` variable names. This is the seam used by
    /// [`apply_env`](Self::apply_env) and lets callers feed overrides from
    /// somewhere other than the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LEVEL) {
            match value.parse::<Level>() {
                Ok(level) => self.level = level,
                Err(e) => log::warn!("Ignoring {ENV_LEVEL}: {e}"),
            }
        }
        if let Some(value) = lookup(ENV_COLOR) {
            match parse_switch(&value) {
                Some(colored) => self.colored = colored,
                None => log::warn!("Ignoring {ENV_COLOR}: unrecognised value {value:?}"),
            }
        }
        if let Some(value) = lookup(ENV_TARGET) {
            match value.parse::<Target>() {
                Ok(target) => self.target = target,
                Err(e) => log::warn!("Ignoring {ENV_TARGET}: {e}"),
            }
        }
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "always" => Some(true),
        "0" | "false" | "no" | "off" | "never" => Some(false),
        _ => None,
    }
}
