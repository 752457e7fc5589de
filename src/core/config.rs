//! Logger configuration and the live handle shared by loggers

use super::error::Result;
use super::log_level::LogLevel;
use super::sink::{SharedSink, Sink};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Layout used when none is configured
pub const DEFAULT_FORMAT: &str = "%(t)s | %(n)20s | %(f)30s() | %(l)8s | %(m)s";

/// Date format used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%b %d %H:%M:%S";

/// The textual part of a configuration, loadable from JSON
///
/// # Examples
///
/// ```
/// use glog::{LogLevel, Settings};
///
/// let settings = Settings::from_json(r#"{"level": "warning"}"#).unwrap();
/// assert_eq!(settings.level, LogLevel::WARNING);
/// assert_eq!(settings.date_fmt, glog::DEFAULT_DATE_FORMAT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub format: String,
    pub date_fmt: String,
    pub level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            date_fmt: DEFAULT_DATE_FORMAT.to_string(),
            level: LogLevel::NOTSET,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Everything a log call needs: layout, date format, threshold and sinks.
///
/// `handlers` receive every level unless a more specific list applies:
/// WARNING goes to `warning_handlers` and anything above WARNING goes to
/// `error_handlers`, each only when that list is non-empty.
#[derive(Clone)]
pub struct Config {
    pub format: String,
    pub date_fmt: String,
    pub level: LogLevel,
    pub handlers: Vec<SharedSink>,
    pub warning_handlers: Vec<SharedSink>,
    pub error_handlers: Vec<SharedSink>,
}

impl Config {
    /// Create a builder with default settings and no sinks
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// A configuration with the given settings and no sinks
    #[must_use]
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            format: settings.format,
            date_fmt: settings.date_fmt,
            level: settings.level,
            handlers: Vec::new(),
            warning_handlers: Vec::new(),
            error_handlers: Vec::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            format: self.format.clone(),
            date_fmt: self.date_fmt.clone(),
            level: self.level,
        }
    }

    /// Replace the textual settings, keeping the sinks
    pub fn apply(&mut self, settings: Settings) {
        self.format = settings.format;
        self.date_fmt = settings.date_fmt;
        self.level = settings.level;
    }

    /// Sinks that receive a line logged at `level`
    #[must_use]
    pub fn sinks_for(&self, level: LogLevel) -> &[SharedSink] {
        if level == LogLevel::WARNING && !self.warning_handlers.is_empty() {
            &self.warning_handlers
        } else if level > LogLevel::WARNING && !self.error_handlers.is_empty() {
            &self.error_handlers
        } else {
            &self.handlers
        }
    }
}

impl Default for Config {
    /// Default settings writing every level to standard output
    fn default() -> Self {
        let mut config = Self::from_settings(Settings::default());
        #[cfg(feature = "console")]
        config
            .handlers
            .push(Arc::new(crate::sinks::ConsoleSink::stdout()));
        config
    }
}

fn sink_names(sinks: &[SharedSink]) -> Vec<&str> {
    sinks.iter().map(|sink| sink.name()).collect()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("format", &self.format)
            .field("date_fmt", &self.date_fmt)
            .field("level", &self.level)
            .field("handlers", &sink_names(&self.handlers))
            .field("warning_handlers", &sink_names(&self.warning_handlers))
            .field("error_handlers", &sink_names(&self.error_handlers))
            .finish()
    }
}

/// Builder for constructing a [`Config`] with a fluent API
///
/// # Example
/// ```
/// use glog::prelude::*;
/// use std::sync::Arc;
///
/// let errors = Arc::new(MemorySink::new());
/// let config = Config::builder()
///     .format("%(l)s: %(m)s")
///     .level(LogLevel::INFO)
///     .handler(ConsoleSink::stdout())
///     .error_handler_shared(errors.clone())
///     .build();
///
/// assert_eq!(config.sinks_for(LogLevel::CRITICAL).len(), 1);
/// ```
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::from_settings(Settings::default()),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn date_format(mut self, date_fmt: impl Into<String>) -> Self {
        self.config.date_fmt = date_fmt.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.config.apply(settings);
        self
    }

    /// Add a general sink
    #[must_use = "builder methods return a new value"]
    pub fn handler<S: Sink + 'static>(self, sink: S) -> Self {
        self.handler_shared(Arc::new(sink))
    }

    /// Add a general sink that is also used elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn handler_shared(mut self, sink: SharedSink) -> Self {
        self.config.handlers.push(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn warning_handler<S: Sink + 'static>(self, sink: S) -> Self {
        self.warning_handler_shared(Arc::new(sink))
    }

    #[must_use = "builder methods return a new value"]
    pub fn warning_handler_shared(mut self, sink: SharedSink) -> Self {
        self.config.warning_handlers.push(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_handler<S: Sink + 'static>(self, sink: S) -> Self {
        self.error_handler_shared(Arc::new(sink))
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_handler_shared(mut self, sink: SharedSink) -> Self {
        self.config.error_handlers.push(sink);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A live configuration shared by every logger of a registry.
///
/// Cloning the handle shares the same configuration. [`configure`] swaps it
/// wholesale for all holders; each log call works on the [`snapshot`] taken
/// when it starts, so a concurrent swap never mixes two configurations in
/// one line.
///
/// [`configure`]: SharedConfig::configure
/// [`snapshot`]: SharedConfig::snapshot
#[derive(Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<Arc<Config>>>,
}

impl SharedConfig {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    /// Replace the configuration for every holder of this handle
    pub fn configure(&self, config: Config) {
        *self.inner.write() = Arc::new(config);
    }

    /// Edit a copy of the current configuration and install it
    pub fn update(&self, edit: impl FnOnce(&mut Config)) {
        let mut guard = self.inner.write();
        let mut config = Config::clone(&guard);
        edit(&mut config);
        *guard = Arc::new(config);
    }

    /// The configuration in effect right now
    #[must_use]
    pub fn snapshot(&self) -> Arc<Config> {
        self.inner.read().clone()
    }
}

impl fmt::Debug for SharedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedConfig").field(&*self.snapshot()).finish()
    }
}

impl From<Config> for SharedConfig {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}
