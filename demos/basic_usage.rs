//! Basic logger usage example
//!
//! Demonstrates severity bands with two stream sinks and the logging macros.
//!
//! Run with: cargo run --example basic_usage

use sink_logger::prelude::*;
use sink_logger::{debug, error, info, log_tagged, notice, warn};
use std::io;

fn main() -> Result<()> {
    println!("=== Sink Logger - Basic Usage Example ===\n");

    let mut logger = Logger::builder().program("basic_usage", "0.1.0").build();

    // Routine messages to stdout, problems to stderr
    logger.add_stream_sink(Severity::Debug, Severity::Notice, "<stdout>", io::stdout())?;
    logger.add_stream_sink(Severity::Warn, Severity::Error, "<stderr>", io::stderr())?;

    println!("1. Logging at different severities:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    notice!(logger, "This is a notice message");
    warn!(logger, "This is a warning message (stderr)");
    error!(logger, "This is an error message (stderr)");

    println!("\n2. Tagged messages:");
    log_tagged!(logger, Severity::Notice, "main", "listening on port {}", 9050);

    println!("\n3. Narrowing the bands:");
    logger.shutdown_all();
    logger.add_stream_sink(Severity::Notice, Severity::Error, "<stdout>", io::stdout())?;
    println!(
        "   Minimum configured severity is now {}",
        logger.minimum_configured_severity()
    );
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (hidden)");
    notice!(logger, "Notice message (visible)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
