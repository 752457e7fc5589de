//! # glog
//!
//! A lightweight, leveled logging library with a Python-style API.
//!
//! ## Features
//!
//! - **Named loggers**: one logger per source file, kept in a [`Registry`]
//! - **Thresholds**: NOTSET, DEBUG, INFO, WARNING, ERROR and CRITICAL
//! - **Sinks**: general, warning and error destinations chosen per level
//! - **Layouts**: printf-style templates over time, name, function, level
//!   and message fields
//! - **Dates**: a strftime-like formatter with its own directive set
//!
//! ```
//! use glog::prelude::*;
//!
//! let sink = MemorySink::new();
//! let registry = Registry::with_config(
//!     Config::builder()
//!         .format("%(n)s | %(l)8s | %(m)s")
//!         .level(LogLevel::INFO)
//!         .handler(sink.clone())
//!         .build(),
//! );
//!
//! let log = registry.logger("server");
//! glog::debug!(log, "not shown").unwrap();
//! glog::info!(log, "listening on {}", 8080).unwrap();
//!
//! assert_eq!(sink.contents(), "server |     INFO | listening on 8080\n");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, CallerResolver, Config, ConfigBuilder, Field, Layout, LogLevel, Logger,
        LoggerError, LoggerMetrics, Registry, Result, Settings, SharedConfig, SharedSink, Sink,
        Timestamp,
    };
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{MemorySink, WriterSink};
}

pub use self::core::{
    CallSite, CallerResolver, Config, ConfigBuilder, Field, Layout, LogLevel, Logger, LoggerError,
    LoggerMetrics, Record, Registry, Result, Settings, SharedConfig, SharedSink, Sink, Timestamp,
    UnknownCaller, CALL_SITE_SKIP, DEFAULT_DATE_FORMAT, DEFAULT_FORMAT,
};
#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{MemorySink, WriterSink};
