//! Basic logger usage example
//!
//! Demonstrates a registry with a console sink, per-file loggers and the
//! level threshold.
//!
//! Run with: cargo run --example basic_usage

use glog::prelude::*;
use glog::{critical, debug, error, info, warn};

fn process(log: &Logger, item: u32) -> Result<()> {
    info!(log, "processing item {}", item)?;
    if item == 3 {
        warn!(log, "item {} took longer than expected", item)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("=== glog - Basic Usage Example ===\n");

    let registry = Registry::with_config(
        Config::builder()
            .level(LogLevel::DEBUG)
            .handler(ConsoleSink::stdout())
            .build(),
    );

    // Named after this file: "basic_usage"
    let log = glog::get_log!(registry);

    println!("1. Logging at different levels:");
    debug!(log, "This is a debug message")?;
    info!(log, "This is an info message")?;
    warn!(log, "This is a warning message")?;
    error!(log, "This is an error message")?;
    critical!(log, "This is a critical message")?;

    println!("\n2. The function field names the caller:");
    for item in 1..=4 {
        process(&log, item)?;
    }

    println!("\n3. Raising the threshold to WARNING:");
    registry.config().update(|config| config.level = LogLevel::WARNING);
    debug!(log, "Debug message (hidden)")?;
    info!(log, "Info message (hidden)")?;
    warn!(log, "Warning message (visible)")?;

    println!("\n4. A compact layout:");
    registry.config().update(|config| {
        config.format = "[%(l)s] %(n)s: %(m)s".to_string();
        config.level = LogLevel::NOTSET;
    });
    info!(log, "Layout changed at runtime")?;

    println!("\n5. Silencing one logger:");
    let noisy = registry.logger("noisy");
    noisy.silence(true);
    critical!(noisy, "never shown")?;
    info!(log, "{} line(s) suppressed by 'noisy'", noisy.metrics().suppressed_count())?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
