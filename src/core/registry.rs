//! Registry of named loggers sharing one configuration

use super::config::{Config, SharedConfig};
use super::logger::Logger;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Owns the loggers of an application and the configuration they share.
///
/// Create it once at startup and pass it (or an `Arc` of it) to the code
/// that needs loggers. There is one logger per name; asking again for the
/// same name returns the same instance.
///
/// # Example
/// ```
/// use glog::prelude::*;
///
/// let sink = MemorySink::new();
/// let registry = Registry::with_config(
///     Config::builder().format("%(n)s: %(m)s").handler(sink.clone()).build(),
/// );
///
/// let log = glog::get_log!(registry);
/// glog::info!(log, "ready").unwrap();
///
/// assert!(registry.fetch_log(log.name()).is_some());
/// assert!(registry.fetch_log("elsewhere").is_none());
/// assert!(sink.contents().ends_with(": ready\n"));
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    config: SharedConfig,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    /// A registry with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::with_shared(SharedConfig::new(config))
    }

    /// A registry whose loggers read an existing configuration handle
    #[must_use]
    pub fn with_shared(config: SharedConfig) -> Self {
        Self {
            config,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Obtain or create the logger of the source file at `path`.
    ///
    /// The logger is named after the file, without directory or extension:
    /// `src/net/server.rs` yields `server`. Use [`get_log!`](crate::get_log)
    /// to pass the calling file automatically.
    pub fn get_log(&self, path: &str) -> Arc<Logger> {
        self.logger(logger_name(path))
    }

    /// Obtain or create the logger called `name`
    pub fn logger(&self, name: &str) -> Arc<Logger> {
        let mut loggers = self.loggers.lock();
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name, self.config.clone()))),
        )
    }

    /// An existing logger, or `None` if `name` was never created
    pub fn fetch_log(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.lock().get(name).cloned()
    }

    /// Names of all loggers, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Replace the configuration of every logger, existing and future
    pub fn configure(&self, config: Config) {
        self.config.configure(config);
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }
}

/// File name of `path` up to its first `.`
#[must_use]
pub fn logger_name(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file.split('.').next().unwrap_or(file)
}
