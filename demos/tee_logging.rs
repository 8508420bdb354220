//! Tee logging example
//!
//! Sends every entry to the console and to a JSON file, while a third
//! in-memory destination only keeps errors.
//!
//! Run with: cargo run --example tee_logging

use logos::prelude::*;
use std::fs::File;

fn main() -> Result<()> {
    println!("=== logos - Tee Logging Example ===\n");

    let log_path = std::env::temp_dir().join("logos_tee_example.log");
    let errors = SharedBuffer::new();

    let file_logger = Logger::builder()
        .level(Level::DEBUG)
        .format(Format::Json)
        .sink(File::create(&log_path)?)
        .error_handler(|err| eprintln!("file log write failed: {}", err))
        .build();

    let error_logger = Logger::builder()
        .level(Level::ERROR)
        .format(Format::Text)
        .sink(errors.clone())
        .build();

    let logger = Logger::builder()
        .level(Level::INFO)
        .format(Format::Console)
        .build()
        .tee([&file_logger, &error_logger]);

    logger.debug("Only the file logger keeps debug entries");
    logger.info("Console and file");

    let worker = logger.with_field("worker", 3);
    worker.log_fn(Level::DEBUG, || {
        // Built only because the file destination accepts debug
        format!("queue depth {}", 17)
    });
    worker.with_error("connection refused").error("Every destination gets this");

    logger.flush()?;

    println!("\nFile output written to {}:", log_path.display());
    print!("{}", std::fs::read_to_string(&log_path)?);

    println!("\nError-only destination:");
    print!("{}", errors.contents());

    let outcome = logger.fatal("Shutting down after fatal entry");
    println!("\nFatal outcome returned to the caller: {}", outcome);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
