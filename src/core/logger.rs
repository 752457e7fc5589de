//! Named loggers and the dispatch of a single log call

use super::{
    caller::CallerResolver,
    config::{Config, SharedConfig},
    error::Result,
    layout::{Layout, Record},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::SharedSink,
    timestamp::Timestamp,
};
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};

/// A named logger bound to a live configuration.
///
/// Loggers are usually obtained from a [`Registry`](crate::Registry) and
/// shared behind an `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct Logger {
    name: String,
    silenced: AtomicBool,
    config: SharedConfig,
    /// Counters for written, suppressed and failed calls
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>, config: SharedConfig) -> Self {
        Self {
            name: name.into(),
            silenced: AtomicBool::new(false),
            config,
            metrics: LoggerMetrics::new(),
        }
    }

    /// A standalone logger with its own configuration
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: Config) -> Self {
        Self::new(name, SharedConfig::new(config))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Suppress (or re-enable) every level for this logger
    pub fn silence(&self, silenced: bool) {
        self.silenced.store(silenced, Ordering::Relaxed);
    }

    pub fn is_silenced(&self) -> bool {
        self.silenced.load(Ordering::Relaxed)
    }

    /// The configuration handle this logger reads on every call
    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log `message` at `level`, naming the caller through `caller`.
    ///
    /// Returns the first sink write failure, if any.
    pub fn log<C>(&self, level: LogLevel, caller: &C, message: impl Into<String>) -> Result<()>
    where
        C: CallerResolver + ?Sized,
    {
        self.log_at(level, caller, message, &Timestamp::now())
    }

    /// Log with an explicit timestamp instead of the current time
    pub fn log_at<C>(
        &self,
        level: LogLevel,
        caller: &C,
        message: impl Into<String>,
        timestamp: &Timestamp,
    ) -> Result<()>
    where
        C: CallerResolver + ?Sized,
    {
        if self.is_silenced() {
            self.metrics.record_suppressed();
            return Ok(());
        }

        let config = self.config.snapshot();
        if level < config.level {
            self.metrics.record_suppressed();
            return Ok(());
        }

        let mut message = message.into();
        ensure_newline(&mut message);

        let record = Record {
            name: &self.name,
            level,
            message: &message,
            timestamp,
        };
        let line = Layout::parse(&config.format).render(&record, &config.date_fmt, caller);

        match write_to_sinks(config.sinks_for(level), line.as_bytes()) {
            Ok(()) => {
                self.metrics.record_logged();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed();
                Err(e)
            }
        }
    }

    /// Log at DEBUG.
    ///
    /// The per-level methods identify the caller by `file:line` of the call,
    /// not by function name, so `%(f)` renders e.g. `src/main.rs:12`. Use
    /// the [`debug!`](crate::debug) family of macros to get the enclosing
    /// function's path instead.
    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::DEBUG, Location::caller(), message)
    }

    /// Log at INFO; `%(f)` gets `file:line`, see [`info!`](crate::info) for
    /// the function name.
    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::INFO, Location::caller(), message)
    }

    /// Log at WARNING; `%(f)` gets `file:line`, see [`warn!`](crate::warn) for
    /// the function name.
    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::WARNING, Location::caller(), message)
    }

    /// Log at ERROR; `%(f)` gets `file:line`, see [`error!`](crate::error) for
    /// the function name.
    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::ERROR, Location::caller(), message)
    }

    /// Log at CRITICAL; `%(f)` gets `file:line`, see [`critical!`](crate::critical) for
    /// the function name.
    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::CRITICAL, Location::caller(), message)
    }
}

/// Terminate `message` with exactly one `\n` unless it already ends in one
fn ensure_newline(message: &mut String) {
    if !message.ends_with('\n') {
        message.push('\n');
    }
}

/// Write `line` to each sink in order, stopping at the first failure
fn write_to_sinks(sinks: &[SharedSink], line: &[u8]) -> Result<()> {
    for sink in sinks {
        sink.write(line)?;
    }
    Ok(())
}
