//! Basic webhook logger usage
//!
//! Demonstrates per-level routing, thresholds, prefixes and error retrieval.
//!
//! Run with: WEBHOOK_URL=https://hooks.slack.com/services/... cargo run --example basic_usage

use webhook_logger::prelude::*;
use webhook_logger::{global, info};

fn main() -> Result<()> {
    println!("=== Webhook Logger - Basic Usage Example ===\n");

    let url = std::env::var("WEBHOOK_URL").unwrap_or_else(|_| "http://127.0.0.1:9/hook".to_string());

    // One URL for every level
    let mut logger = Logger::new(url.clone());
    logger.set_prefix("[demo] ");

    println!("1. Logging at different levels:");
    logger.error("This is an error message");
    logger.warning("This is a warning message");
    logger.infof(format_args!("Processing {} items", 100));
    logger.debugln(&[&"cache", &"miss", &17]);
    logger.trace("This is a trace message");
    report(&logger);

    println!("\n2. Raising the threshold:");
    let quiet = logger.with_level(LogLevel::Warning);
    quiet.info("Info message (filtered)");
    quiet.warning("Warning message (sent)");
    println!("   filtered so far: {}", quiet.metrics().filtered_count());

    println!("\n3. Routing errors to a separate webhook:");
    let routed = Logger::builder()
        .destinations(DestinationSet::new(url.clone()).with_error(url))
        .level(LogLevel::Info)
        .build()?;
    routed.error("Goes to the error webhook");
    report(&routed);

    println!("\n4. Default logger:");
    global::set_default(logger);
    info!("Sent through the default logger");
    if let Some(err) = global::err() {
        println!("   default logger error: {}", err);
    }

    println!("\n=== Example completed ===");

    Ok(())
}

fn report(logger: &Logger) {
    let metrics = logger.metrics();
    println!(
        "   sent={} failed={} filtered={}",
        metrics.sent_count(),
        metrics.failed_count(),
        metrics.filtered_count()
    );
    if let Some(err) = logger.err() {
        println!("   last error: {}", err);
    }
}
