//! Name → logger registry.
//!
//! A [`Registry`] hands out one shared [`Logger`] per name, creating it on
//! first lookup. The lookup and insert happen under a single lock, so
//! concurrent first calls for the same name all receive the same instance.
//!
//! Most programs use the process-wide registry through [`get`] and
//! [`default_logger`]. Tests and embedders that want isolation create their
//! own `Registry` and pass it around.

use crate::config::LoggerConfig;
use crate::logger::Logger;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Name of the logger returned by [`default_logger`].
pub const DEFAULT_LOGGER_NAME: &str = "default";

/// Get-or-create store of named loggers.
#[derive(Debug, Default)]
pub struct Registry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    config: LoggerConfig,
    created: AtomicUsize,
}

impl Registry {
    /// Empty registry creating loggers with [`LoggerConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry creating loggers from `config`.
    pub fn with_config(config: LoggerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Config applied to loggers this registry creates.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Return the logger registered under `name`, creating it if needed.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        let (logger, created) = {
            let mut loggers = self.loggers.lock();
            if let Some(existing) = loggers.get(name) {
                (Arc::clone(existing), false)
            } else {
                let logger = Arc::new(Logger::with_config(name, &self.config));
                loggers.insert(name.to_string(), Arc::clone(&logger));
                self.created.fetch_add(1, Ordering::Relaxed);
                (logger, true)
            }
        };

        // Outside the lock: a log bridge may route this record back here.
        if created {
            log::debug!("Created logger {:?}", name);
        }
        logger
    }

    /// Snapshot of every registered logger.
    ///
    /// The returned map is a copy; inserting into or removing from it does not
    /// touch the registry. The loggers themselves are shared.
    pub fn list_all(&self) -> HashMap<String, Arc<Logger>> {
        self.loggers.lock().clone()
    }

    /// Whether a logger named `name` exists yet.
    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many loggers this registry has ever constructed.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry.
///
/// Initialized on first use with [`LoggerConfig::from_env`], so `LEVLOG_*`
/// environment variables set before the first lookup take effect.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(|| Registry::with_config(LoggerConfig::from_env()))
}

/// Logger `name` from the process-wide registry.
pub fn get(name: &str) -> Arc<Logger> {
    global().get(name)
}

/// The process-wide logger named [`DEFAULT_LOGGER_NAME`].
pub fn default_logger() -> Arc<Logger> {
    get(DEFAULT_LOGGER_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_same_name_same_instance() {
        let registry = Registry::new();
        let first = registry.get("svc");
        let second = registry.get("svc");
        assert!(Arc::ptr_eq(&first, &second));

        first.set_level(Level::Error);
        assert_eq!(second.level(), Level::Error);
        assert_eq!(registry.created(), 1);
    }

    #[test]
    fn test_distinct_names_distinct_instances() {
        let registry = Registry::new();
        let a = registry.get("a");
        let b = registry.get("b");
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.name(), "a");
        assert_eq!(b.name(), "b");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_first_lookup_creates_one_logger() {
        const THREADS: usize = 32;
        let registry = Arc::new(Registry::new());
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.get("X")
                })
            })
            .collect();

        let loggers: Vec<Arc<Logger>> = handles
            .into_iter()
            .map(|h| h.join().expect("lookup thread panicked"))
            .collect();

        assert_eq!(registry.created(), 1);
        assert_eq!(registry.len(), 1);
        assert!(loggers.iter().all(|l| Arc::ptr_eq(l, &loggers[0])));
    }

    #[test]
    fn test_list_all_is_a_snapshot() {
        let registry = Registry::new();
        registry.get("one");
        registry.get("two");

        let mut snapshot = registry.list_all();
        assert_eq!(snapshot.len(), 2);
        snapshot.remove("one");
        snapshot.insert("three".to_string(), Arc::new(Logger::new("three")));

        assert!(registry.contains("one"));
        assert!(!registry.contains("three"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_config_applies_to_new_loggers() {
        let registry = Registry::with_config(LoggerConfig {
            level: Level::Debug,
            colored: false,
            name_width: 10,
            ..LoggerConfig::default()
        });
        let logger = registry.get("configured");
        assert_eq!(logger.level(), Level::Debug);
        assert!(!logger.is_colored());
        assert_eq!(logger.name_width(), 10);
        assert_eq!(registry.config().name_width, 10);
    }

    #[test]
    fn test_global_default_logger() {
        let a = default_logger();
        let b = get(DEFAULT_LOGGER_NAME);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(global().contains(DEFAULT_LOGGER_NAME));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.created(), 0);
        assert!(registry.list_all().is_empty());
    }
}
