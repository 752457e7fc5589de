//! File logging example
//!
//! Demonstrates routing: everything goes to the console, warnings also go
//! to a warning file and errors to an error file.
//!
//! Run with: cargo run --example file_logging

use glog::prelude::*;
use glog::{debug, error, info, warn};

fn main() -> Result<()> {
    println!("=== glog - File Logging Example ===\n");

    let dir = std::env::temp_dir().join("glog-file-logging");
    std::fs::create_dir_all(&dir)?;
    let warnings = dir.join("warnings.log");
    let errors = dir.join("errors.log");

    let console: SharedSink = std::sync::Arc::new(ConsoleSink::stdout());
    let settings = Settings::from_json(
        r#"{ "format": "%(t)s %(l)-8s %(f)s: %(m)s", "date_fmt": "%Y-%m-%d %H:%M:%S.%f", "level": "DEBUG" }"#,
    )?;

    let registry = Registry::with_config(
        Config::builder()
            .settings(settings)
            .handler_shared(console.clone())
            .warning_handler_shared(console.clone())
            .warning_handler(FileSink::new(&warnings)?)
            .error_handler_shared(console)
            .error_handler(FileSink::new(&errors)?)
            .build(),
    );
    let log = glog::get_log!(registry);

    println!("1. Logging to console and files:");
    info!(log, "Application started")?;
    debug!(log, "Loading configuration...")?;
    warn!(log, "Using default settings for some options")?;
    info!(log, "Connecting to database...")?;
    error!(log, "Failed to load optional plugin")?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        info!(log, "Processing item {}/5", i)?;
        if i == 3 {
            warn!(log, "Item 3 took longer than expected")?;
        }
    }
    info!(log, "All operations completed")?;

    drop(log);
    drop(registry);

    println!("\n=== Example completed successfully! ===");
    println!("Warnings: {}", warnings.display());
    println!("Errors:   {}", errors.display());

    Ok(())
}
