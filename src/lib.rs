// Library exports for levlog
//
// # Lock Usage Policy
//
// All locks are `parking_lot` locks and none are held across a sink write:
//
//   - registry map     : `Mutex`, held only for the get-or-insert. Creation
//                        is logged after the guard drops.
//
//   - logger settings  : `RwLock`, read-locked just long enough to copy the
//                        settings for one call.
//
//   - shared writers   : `Arc<Mutex<dyn Write + Send>>`, locked for exactly
//                        one `write_all` per line.

//! Minimal leveled logging.
//!
//! levlog hands out named [`Logger`]s from a [`Registry`], filters calls
//! against a per-logger threshold, and writes one line per call:
//!
//! ```text
//! [ <name> ] <LEVEL> <YYYY-MM-DD HH:MM:SS> <dir>/<file>:<line> <message>
//! ```
//!
//! ```no_run
//! use levlog::Level;
//!
//! let log = levlog::get("http");
//! log.set_level(Level::Debug);
//! levlog::info!(log, "listening on {}", 8080)?;
//! levlog::debug!(log; "peer=", "10.0.0.7", " bytes=", 512)?;
//! # Ok::<(), levlog::LogError>(())
//! ```

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod macros;

pub mod bridge;
pub mod caller;
pub mod color;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod registry;
pub mod sink;

pub use caller::CallSite;
pub use color::{Color, colored, paint};
pub use config::{LoggerConfig, Target};
pub use error::{LogError, Result};
pub use level::Level;
pub use logger::Logger;
pub use registry::{DEFAULT_LOGGER_NAME, Registry, default_logger, get, global};
pub use sink::{SharedWriter, Sink, shared};
