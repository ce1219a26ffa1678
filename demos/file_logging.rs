//! File logging example
//!
//! Demonstrates the startup sequence of a daemon: log to stdout while
//! starting, switch to the configured file sinks, then reopen the files
//! after an external tool has rotated them.
//!
//! Run with: cargo run --example file_logging

use sink_logger::prelude::*;
use sink_logger::{info, notice, warn};
use std::fs;

fn main() -> Result<()> {
    println!("=== Sink Logger - File Logging Example ===\n");

    let dir = std::env::temp_dir().join("sink_logger_demo");
    let log_file = dir.join("notices.log");
    let _ = fs::remove_dir_all(&dir);

    // Temporary stdout sink until the configuration is known
    let mut logger = Logger::builder()
        .program("file_logging", "0.1.0")
        .bootstrap(true)
        .build();

    println!("1. Logging before configuration:");
    info!(logger, "Reading configuration...");

    let json = serde_json::json!({
        "program": "file_logging",
        "version": "0.1.0",
        "sinks": [
            { "kind": "stdout", "band": "warn" },
            { "kind": "file", "band": "info-err", "path": log_file }
        ]
    });
    let config = LoggerConfig::from_json_str(&json.to_string())?;

    println!("\n2. Applying configuration (bootstrap sink is retired):");
    logger.apply_config(&config)?;
    for sink in logger.sinks() {
        println!("   {} {} {}", sink.id, sink.kind, sink.band);
    }

    for i in 1..=5 {
        info!(logger, "Processing item {}/5", i);
        if i == 3 {
            warn!(logger, "Item 3 took longer than expected");
        }
    }

    println!("\n3. Rotating the log file:");
    fs::rename(&log_file, dir.join("notices.log.1"))?;
    let dropped = logger.rotate_all();
    println!("   Reopened file sinks, {} dropped", dropped);
    notice!(logger, "Logging to a fresh file");

    logger.shutdown_all();

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' for the file log output", dir.display());

    Ok(())
}
