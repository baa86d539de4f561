//! Retry Patterns Example
//!
//! Demonstrates declarative retries with the retry engine.
//! Shows practical patterns including:
//! - Basic retry for transient failures
//! - Inspecting the execution report after exhaustion
//! - Retry-forever bounded by a timeout
//! - Asynchronous invocation
//! - Bridging an async retry back into synchronous code
//!
//! Run with: cargo run --example retry_patterns --features async

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use steadfast::retry::invoke_async;
use steadfast::{Fault, RetryConfig, WaitForValue};

// ==================== Basic Retry ====================

/// Example 1: Basic retry over a transient failure
///
/// Demonstrates an operation that fails twice before succeeding.
fn example_basic_retry() {
    println!("\n=== Example 1: Basic Retry ===");

    let mut attempt = 0u32;
    let result = RetryConfig::new()
        .with_wait(Duration::from_millis(50))
        .with_max_retries(5)
        .invoke(|| {
            attempt += 1;
            println!("  Attempt {}", attempt);
            if attempt < 3 {
                Err(Fault::new("transient", "connection reset"))
            } else {
                Ok("connected!")
            }
        });

    println!(
        "Success after {} attempts: {}",
        result.info().executions(),
        result.value().unwrap()
    );
}

// ==================== Exhaustion Report ====================

/// Example 2: Reading the report after the budget is spent
///
/// Demonstrates that every fault is captured in attempt order, nothing
/// is thrown, and the caller inspects the result instead.
fn example_exhaustion_report() {
    println!("\n=== Example 2: Exhaustion Report ===");

    let mut attempt = 0u32;
    let result = RetryConfig::new().with_max_retries(2).invoke(|| {
        attempt += 1;
        Err::<i32, _>(Fault::new("http_503", format!("service unavailable (try {})", attempt)))
    });

    println!("Successful: {}", result.successful());
    println!("Executions: {}", result.info().executions());
    for (i, fault) in result.info().faults().iter().enumerate() {
        println!("  fault[{}]: {}", i, fault);
    }
    println!("Last fault: {}", result.info().last_fault().unwrap());
}

// ==================== Retry Forever ====================

/// Example 3: Retry until successful
///
/// The budget is ignored; the loop runs until the operation succeeds.
fn example_retry_forever() {
    println!("\n=== Example 3: Retry Until Successful ===");

    let mut attempt = 0u32;
    let result = RetryConfig::new().retry_until_successful().invoke(|| {
        attempt += 1;
        if attempt < 10 {
            Err(Fault::msg("not yet"))
        } else {
            Ok(1101)
        }
    });

    println!(
        "Got {} on attempt {} ({} faults on record)",
        result.value().unwrap(),
        result.info().executions(),
        result.info().faults().len()
    );
}

// ==================== Timeout ====================

/// Example 4: Bounding an always-failing operation with a timeout
///
/// The retry budget would allow 200 more attempts; the deadline stops
/// the loop near the one-second mark instead.
fn example_timeout() {
    println!("\n=== Example 4: Timeout ===");

    let start = std::time::Instant::now();
    let result = RetryConfig::new()
        .with_wait(Duration::from_millis(500))
        .with_max_retries(200)
        .timeout_after(Duration::from_secs(1))
        .invoke(|| Err::<(), _>(Fault::msg("always down")));

    println!(
        "Stopped after {:?} with {} executions (budget was 200 retries)",
        start.elapsed(),
        result.info().executions()
    );
}

// ==================== Async Invocation ====================

/// Example 5: Retrying an asynchronous operation
///
/// The operation is awaited each attempt and the inter-attempt wait
/// uses the async timer, so the executor is never blocked.
async fn example_async_invocation() {
    println!("\n=== Example 5: Async Invocation ===");

    let attempts = Arc::new(AtomicU32::new(0));
    let result = {
        let attempts = attempts.clone();
        RetryConfig::new()
            .with_wait(Duration::from_millis(50))
            .with_max_retries(5)
            .invoke_async(move || {
                let attempts = attempts.clone();
                async move {
                    let n = attempts.fetch_add(1, Ordering::SeqCst);
                    println!("  Attempt {}", n + 1);
                    if n < 2 {
                        Err(Fault::new("transient", "connection timeout"))
                    } else {
                        Ok("fetched remote state")
                    }
                }
            })
            .await
    };

    println!(
        "Success after {} attempts: {}",
        result.info().executions(),
        result.value().unwrap()
    );
}

// ==================== Sync Bridge ====================

/// Example 6: Unwrapping an async retry synchronously
///
/// `wait_for_value` drives the pending future to completion, so the
/// async engine can be used from code with no async context of its own.
fn example_sync_bridge() {
    println!("\n=== Example 6: Synchronous Bridge ===");

    let config = RetryConfig::new().with_max_retries(1);
    let result = invoke_async(&config, || async { Ok::<_, Fault>(7 * 6) }).wait_for_value();

    println!("Bridged value: {}", result.value().unwrap());
}

#[tokio::main]
async fn main() {
    println!("======================================");
    println!("       Retry Patterns Example         ");
    println!("======================================");

    example_basic_retry();
    example_exhaustion_report();
    example_retry_forever();
    example_timeout();
    example_async_invocation().await;
    tokio::task::spawn_blocking(example_sync_bridge)
        .await
        .unwrap();

    println!("\n======================================");
    println!("           Examples Complete           ");
    println!("======================================");
}
