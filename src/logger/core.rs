//! [`Logger`] struct and its configuration surface.
//!
//! Settings sit behind a read/write lock so a logger shared through an `Arc`
//! can be reconfigured at any time. Emission only holds the read lock long
//! enough to copy the settings out.

use crate::config::LoggerConfig;
use crate::level::Level;
use crate::sink::{SharedWriter, Sink};
use parking_lot::RwLock;

/// Mutable per-logger settings.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) level: Level,
    pub(crate) colored: bool,
    pub(crate) sink: Sink,
    pub(crate) name_width: usize,
    pub(crate) caller_depth: usize,
    pub(crate) caller_source: bool,
    pub(crate) enabled: bool,
}

impl From<&LoggerConfig> for Settings {
    fn from(config: &LoggerConfig) -> Self {
        Self {
            level: config.level,
            colored: config.colored,
            sink: Sink::from(config.target),
            name_width: config.name_width,
            caller_depth: config.caller_depth,
            caller_source: config.caller_source,
            enabled: true,
        }
    }
}

/// A named, leveled logger.
///
/// Obtain shared instances from a [`Registry`](crate::Registry) (or
/// [`crate::get`]) so every part of a program logging under one name shares
/// one configuration. Standalone loggers can be built with [`Logger::new`].
#[derive(Debug)]
pub struct Logger {
    pub(crate) name: String,
    pub(crate) settings: RwLock<Settings>,
}

impl Logger {
    /// Create a logger with default settings: INFO threshold, stdout, colors
    /// on, caller source on, no name padding.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, &LoggerConfig::default())
    }

    /// Create a logger from an explicit config.
    pub fn with_config(name: impl Into<String>, config: &LoggerConfig) -> Self {
        Self {
            name: name.into(),
            settings: RwLock::new(Settings::from(config)),
        }
    }

    /// Name this logger was created under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overwrite every setting from `config`.
    ///
    /// The enabled flag is left alone since configs do not carry it.
    pub fn apply_config(&self, config: &LoggerConfig) {
        let mut settings = self.settings.write();
        let enabled = settings.enabled;
        *settings = Settings::from(config);
        settings.enabled = enabled;
    }

    pub(crate) fn snapshot(&self) -> Settings {
        self.settings.read().clone()
    }

    // ========================================================================
    // Threshold
    // ========================================================================

    /// Set the minimum level that gets written.
    pub fn set_level(&self, level: Level) {
        self.settings.write().level = level;
    }

    /// Set the threshold from a raw index, wrapping modulo the number of levels.
    pub fn set_level_index(&self, index: usize) {
        self.set_level(Level::from_index(index));
    }

    /// Current threshold.
    pub fn level(&self) -> Level {
        self.settings.read().level
    }

    /// Whether a call at `level` would currently be written.
    pub fn is_level_enabled(&self, level: Level) -> bool {
        let settings = self.settings.read();
        settings.enabled && level >= settings.level
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Turn ANSI colors on the header on or off.
    pub fn set_colored(&self, colored: bool) {
        self.settings.write().colored = colored;
    }

    /// Whether headers are colored.
    pub fn is_colored(&self) -> bool {
        self.settings.read().colored
    }

    /// Route output to a caller-shared writer.
    ///
    /// The logger keeps a clone of the handle; the caller still owns the writer.
    pub fn set_writer(&self, writer: SharedWriter) {
        self.set_sink(Sink::Writer(writer));
    }

    /// Route output to stdout, stderr, or a shared writer.
    pub fn set_sink(&self, sink: Sink) {
        self.settings.write().sink = sink;
    }

    /// Handle to the current destination.
    pub fn sink(&self) -> Sink {
        self.settings.read().sink.clone()
    }

    // ========================================================================
    // Header layout
    // ========================================================================

    /// Pad the name in the header to `width` characters (0 disables padding).
    pub fn set_name_width(&self, width: usize) {
        self.settings.write().name_width = width;
    }

    /// Configured name padding width.
    pub fn name_width(&self) -> usize {
        self.settings.read().name_width
    }

    /// Number of extra frames above the direct caller to report as the source.
    ///
    /// Useful when every call goes through a wrapper function of your own.
    pub fn set_caller_depth(&self, depth: usize) {
        self.settings.write().caller_depth = depth;
    }

    /// Configured caller depth. Kept while caller source is disabled.
    pub fn caller_depth(&self) -> usize {
        self.settings.read().caller_depth
    }

    /// Stop appending `<dir>/<file>:<line>` to headers.
    pub fn disable_caller_source(&self) {
        self.settings.write().caller_source = false;
    }

    /// Resume appending `<dir>/<file>:<line>` to headers.
    pub fn enable_caller_source(&self) {
        self.settings.write().caller_source = true;
    }

    /// Whether headers carry the caller's location.
    pub fn caller_source_enabled(&self) -> bool {
        self.settings.read().caller_source
    }

    // ========================================================================
    // On/off
    // ========================================================================

    /// Drop every call until [`enable`](Self::enable) is called. Fatal calls
    /// are still written.
    pub fn disable(&self) {
        self.settings.write().enabled = false;
    }

    /// Undo [`disable`](Self::disable).
    pub fn enable(&self) {
        self.settings.write().enabled = true;
    }

    /// Whether non-fatal calls are written at all.
    pub fn is_enabled(&self) -> bool {
        self.settings.read().enabled
    }
}
