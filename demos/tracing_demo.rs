//! Demonstrates tracing integration with the retry engine
//!
//! Run with: cargo run --example tracing_demo --features tracing

use std::time::Duration;

use steadfast::{Fault, RetryConfig};

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    // A transient failure: two debug events for the failed attempts,
    // a trace event for the success
    let mut attempt = 0u32;
    let result = RetryConfig::new()
        .with_wait(Duration::from_millis(50))
        .with_max_retries(5)
        .invoke(|| {
            attempt += 1;
            if attempt < 3 {
                Err(Fault::new("transient", "connection reset"))
            } else {
                Ok("connected")
            }
        });
    tracing::info!(
        executions = result.info().executions(),
        value = ?result.value(),
        "transient workflow finished"
    );

    // An exhausted budget followed by a fallback: the engine logs the
    // exhaustion, the fallback logs its own disposition
    let result = RetryConfig::new()
        .with_max_retries(2)
        .invoke(|| Err::<&str, _>(Fault::new("http_503", "service unavailable")))
        .with_fallback(|| Ok::<_, Fault>("cached response"));
    tracing::info!(
        successful = result.successful(),
        successful_fallback = result.successful_fallback(),
        value = ?result.value(),
        "exhausted workflow finished"
    );
}
