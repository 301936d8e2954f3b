//! Line formatting and the leveled emission methods.
//!
//! Every call funnels into [`Logger::emit`]: filter on the threshold, resolve
//! the call site, build the header, color it, and write
//! `"<header> <message>\n"` to the sink in a single write.

use super::core::{Logger, Settings};
use crate::caller::{self, CallSite};
use crate::color;
use crate::error::{LogError, Result};
use crate::level::Level;
use chrono::{DateTime, Local};
use std::error::Error;
use std::fmt::{self, Display};
use std::panic::Location;

/// Timestamp layout used in headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width the level name is padded to.
const LEVEL_WIDTH: usize = 5;

/// Build the uncolored header.
///
/// `[ <name> ] <LEVEL> <YYYY-MM-DD HH:MM:SS>[ <dir>/<file>:<line>]`
pub(crate) fn header(
    name: &str,
    name_width: usize,
    level: Level,
    now: &DateTime<Local>,
    site: Option<&CallSite>,
) -> String {
    let mut header = format!(
        "[ {name:<name_width$} ] {level:<LEVEL_WIDTH$} {}",
        now.format(TIMESTAMP_FORMAT)
    );
    if let Some(site) = site {
        header.push(' ');
        header.push_str(&site.to_string());
    }
    header
}

/// Build a full output line, newline included.
pub(crate) fn render_line(
    name: &str,
    settings: &Settings,
    level: Level,
    now: &DateTime<Local>,
    site: Option<&CallSite>,
    message: &dyn Display,
) -> String {
    let header = header(name, settings.name_width, level, now, site);
    let header = color::paint(settings.colored, level.color(), &header);
    format!("{header} {message}\n")
}

impl Logger {
    /// Format a line the way this logger would write it right now, without
    /// writing it.
    pub fn format_line(
        &self,
        level: Level,
        message: &dyn Display,
        site: Option<&CallSite>,
    ) -> String {
        render_line(&self.name, &self.snapshot(), level, &Local::now(), site, message)
    }

    /// Filter, resolve the caller, format, and write.
    pub(crate) fn emit(
        &self,
        level: Level,
        origin: &'static Location<'static>,
        message: &dyn Display,
    ) -> Result<()> {
        let settings = self.snapshot();
        if !settings.enabled || level < settings.level {
            return Ok(());
        }
        let site = if settings.caller_source {
            caller::resolve(origin, settings.caller_depth)
        } else {
            None
        };
        self.write_entry(&settings, level, site.as_ref(), message)
    }

    /// Emit with a call site resolved elsewhere (e.g. a `log::Record`).
    pub(crate) fn emit_at(
        &self,
        level: Level,
        site: Option<CallSite>,
        message: &dyn Display,
    ) -> Result<()> {
        let settings = self.snapshot();
        if !settings.enabled || level < settings.level {
            return Ok(());
        }
        let site = site.filter(|_| settings.caller_source);
        self.write_entry(&settings, level, site.as_ref(), message)
    }

    fn write_entry(
        &self,
        settings: &Settings,
        level: Level,
        site: Option<&CallSite>,
        message: &dyn Display,
    ) -> Result<()> {
        let line = render_line(&self.name, settings, level, &Local::now(), site, message);
        settings.sink.write_line(&line).map_err(LogError::Write)
    }

    // ========================================================================
    // Explicit level
    // ========================================================================

    /// Log `message` at `level`.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Display) -> Result<()> {
        self.emit(level, Location::caller(), &message)
    }

    /// Log pre-formatted arguments at `level`.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(level, Location::caller(), &args)
    }

    // ========================================================================
    // Plain
    // ========================================================================

    #[track_caller]
    pub fn debug(&self, message: impl Display) -> Result<()> {
        self.emit(Level::Debug, Location::caller(), &message)
    }

    #[track_caller]
    pub fn info(&self, message: impl Display) -> Result<()> {
        self.emit(Level::Info, Location::caller(), &message)
    }

    #[track_caller]
    pub fn warn(&self, message: impl Display) -> Result<()> {
        self.emit(Level::Warn, Location::caller(), &message)
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) -> Result<()> {
        self.emit(Level::Error, Location::caller(), &message)
    }

    // ========================================================================
    // Formatted
    // ========================================================================

    /// `logger.debugf(format_args!("x={}", x))`; see also [`debug!`](crate::debug!).
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Debug, Location::caller(), &args)
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Info, Location::caller(), &args)
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Warn, Location::caller(), &args)
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Error, Location::caller(), &args)
    }

    // ========================================================================
    // Fatal
    // ========================================================================

    /// Write `message` at ERROR, then exit the process with status 1.
    ///
    /// The threshold and the enabled flag are ignored. A write failure is
    /// ignored too; the process exits either way.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> ! {
        self.die(Location::caller(), &message)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.die(Location::caller(), &args)
    }

    fn die(&self, origin: &'static Location<'static>, message: &dyn Display) -> ! {
        let settings = self.snapshot();
        let site = if settings.caller_source {
            caller::resolve(origin, settings.caller_depth)
        } else {
            None
        };
        let _ = self.write_entry(&settings, Level::Error, site.as_ref(), message);
        let _ = settings.sink.flush();
        std::process::exit(1)
    }

    // ========================================================================
    // Smart
    // ========================================================================

    /// Log at INFO when `error` is `None`, at ERROR otherwise.
    ///
    /// Only `message` is written; the error value just picks the level.
    #[track_caller]
    pub fn smart(&self, error: Option<&dyn Error>, message: impl Display) -> Result<()> {
        self.emit(smart_level(error), Location::caller(), &message)
    }

    #[track_caller]
    pub fn smartf(&self, error: Option<&dyn Error>, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(smart_level(error), Location::caller(), &args)
    }

    /// [`smart`](Self::smart) keyed on the outcome of a `Result`.
    #[track_caller]
    pub fn smart_result<T, E>(
        &self,
        result: &std::result::Result<T, E>,
        message: impl Display,
    ) -> Result<()>
    where
        E: Error,
    {
        let error = result.as_ref().err().map(|e| e as &dyn Error);
        self.emit(smart_level(error), Location::caller(), &message)
    }
}

fn smart_level(error: Option<&dyn Error>) -> Level {
    if error.is_some() {
        Level::Error
    } else {
        Level::Info
    }
}
