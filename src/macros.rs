//! Logging macros for ergonomic log message formatting.
//!
//! These macros render their arguments with `format!` and capture the
//! calling function, so the `%(f)` layout field names the function the
//! macro was written in.
//!
//! # Examples
//!
//! ```
//! use glog::prelude::*;
//! use glog::info;
//!
//! let registry = Registry::new();
//! let logger = glog::get_log!(registry);
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Fully qualified path of the enclosing function, followed by a marker frame.
///
/// Resolve it through a [`CallSite`](crate::CallSite) with
/// [`CALL_SITE_SKIP`](crate::CALL_SITE_SKIP) to drop the marker.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __glog_marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        type_name_of(__glog_marker)
    }};
}

/// Capture the current call site as a [`CallSite`](crate::CallSite).
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            $crate::function_name!(),
            ::std::file!(),
            ::std::line!(),
            ::std::module_path!(),
        )
    };
}

/// Obtain or create the logger named after the calling source file.
///
/// # Examples
///
/// ```
/// # use glog::prelude::*;
/// let registry = Registry::new();
/// let logger = glog::get_log!(registry);
/// assert!(registry.fetch_log(logger.name()).is_some());
/// ```
#[macro_export]
macro_rules! get_log {
    ($registry:expr) => {
        $registry.get_log(::std::file!())
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use glog::prelude::*;
/// # let logger = Logger::with_config("app", Config::builder().build());
/// use glog::log;
/// log!(logger, LogLevel::INFO, "Simple message").unwrap();
/// log!(logger, LogLevel::ERROR, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &$crate::call_site!(), ::std::format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use glog::prelude::*;
/// # let logger = Logger::with_config("app", Config::builder().build());
/// use glog::debug;
/// debug!(logger, "Debug information").unwrap();
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use glog::prelude::*;
/// # let logger = Logger::with_config("app", Config::builder().build());
/// use glog::info;
/// info!(logger, "Application started").unwrap();
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use glog::prelude::*;
/// # let logger = Logger::with_config("app", Config::builder().build());
/// use glog::warn;
/// warn!(logger, "Low disk space").unwrap();
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::WARNING, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use glog::prelude::*;
/// # let logger = Logger::with_config("app", Config::builder().build());
/// use glog::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::ERROR, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use glog::prelude::*;
/// # let logger = Logger::with_config("app", Config::builder().build());
/// use glog::critical;
/// critical!(logger, "Critical system failure").unwrap();
/// critical!(logger, "Unable to recover from error: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::CRITICAL, $($arg)+)
    };
}
