//! Basic logger usage example
//!
//! Demonstrates levels, fields, attached errors, custom levels and the
//! process-wide default logger.
//!
//! Run with: cargo run --example basic_usage

use logos::prelude::*;
use logos::{defaults, info, remove_level_color, set_level_color, set_level_name, Color};

const LEVEL_AUDIT: Level = Level::new(10);

fn main() -> Result<()> {
    println!("=== logos - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .level(Level::DEBUG)
        .format(Format::Console)
        .field("service", "demo")
        .build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.print("Print messages are always shown");

    println!("\n2. Raising the threshold on a derived logger:");
    let quiet = logger.with_level(Level::WARN);
    quiet.debug("Debug message (hidden)");
    quiet.info("Info message (hidden)");
    quiet.warn("Warning message (visible)");

    println!("\n3. Fields, errors and formatted messages:");
    let request = logger.with_field("request_id", "r-1001").with_field("user", "alice");
    info!(request, "handled in {} ms", 12);
    request
        .with_error(std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out"))
        .error("request failed");

    println!("\n4. JSON and text output:");
    for format in [Format::Json, Format::Text] {
        Logger::builder()
            .format(format)
            .build()
            .with_field("format", format.to_string())
            .info("same entry, different layout");
    }

    println!("\n5. A custom level:");
    set_level_name(LEVEL_AUDIT, "audit");
    set_level_color(LEVEL_AUDIT, Color::Cyan);
    logger.log(LEVEL_AUDIT, "Custom levels sort by their integer value");
    set_level_name(LEVEL_AUDIT, "");
    remove_level_color(LEVEL_AUDIT);

    println!("\n6. The default logger (LOGOS_LEVEL / LOGOS_FORMAT):");
    defaults::with_field("source", "defaults").info("Logged through the default logger");

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
