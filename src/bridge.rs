//! Bridge from the `log` facade into a levlog [`Logger`].
//!
//! Libraries that log through `log::info!` and friends can be routed into a
//! levlog logger with [`init`]. `TRACE` records are written as `DEBUG`. The
//! record's own file and line become the header's source segment.

use crate::caller::CallSite;
use crate::error::Result;
use crate::level::Level;
use crate::logger::Logger;
use std::sync::Arc;

/// [`log::Log`] implementation writing through a shared [`Logger`].
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.is_level_enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let site = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(CallSite::new(file.to_string(), line)),
            _ => None,
        };
        // `log::Log::log` cannot report failures.
        let _ = self
            .logger
            .emit_at(Level::from(record.level()), site, record.args());
    }

    fn flush(&self) {
        let _ = self.logger.sink().flush();
    }
}

/// Install `logger` as the global `log` backend.
///
/// Filtering is left to the logger so later threshold changes take effect;
/// the facade's max level is opened up to `Trace`. Fails if another backend
/// was installed first.
pub fn init(logger: Arc<Logger>) -> Result<()> {
    let name = logger.name().to_string();
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(log::LevelFilter::Trace);
    log::debug!("log bridge installed for logger {:?}", name);
    Ok(())
}
