//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod error;
pub mod layout;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod printf;
pub mod registry;
pub mod sink;
pub mod timestamp;

pub use caller::{CallSite, CallerResolver, UnknownCaller, CALL_SITE_SKIP};
pub use config::{Config, ConfigBuilder, Settings, SharedConfig, DEFAULT_DATE_FORMAT, DEFAULT_FORMAT};
pub use error::{LoggerError, Result};
pub use layout::{Field, Layout, Record};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use registry::Registry;
pub use sink::{SharedSink, Sink};
pub use timestamp::Timestamp;
