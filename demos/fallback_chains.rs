//! Fallback Chains Example
//!
//! Demonstrates attaching fallbacks to retry results.
//! Shows practical patterns including:
//! - Fixed fallback values after exhaustion
//! - Computed fallbacks (secondary service, cache)
//! - Failing fallbacks and the fallback fault
//! - Why attaching a fallback to a successful result is safe
//! - Layering a second fallback over a failed first one

use steadfast::{Fault, RetryConfig};

// ==================== Fixed Value ====================

/// Example 1: Substituting a default after exhaustion
///
/// The primary operation never succeeds; the fallback value fills in.
fn example_fallback_value() {
    println!("\n=== Example 1: Fallback Value ===");

    let result = RetryConfig::new()
        .with_max_retries(2)
        .invoke(|| Err::<u32, _>(Fault::new("http_503", "service unavailable")))
        .with_fallback_value(0);

    println!("Primary successful: {}", result.successful());
    println!("Fallback executed:  {}", result.executed_fallback());
    println!("Value: {:?}", result.value());
}

// ==================== Computed Fallback ====================

/// Example 2: Falling back to a secondary source
///
/// Demonstrates a computed fallback, here a stale cache read standing
/// in for a dead primary service.
fn example_computed_fallback() {
    println!("\n=== Example 2: Computed Fallback ===");

    fn fetch_primary() -> Result<String, Fault> {
        println!("  Primary service...");
        Err(Fault::new("connect", "connection refused"))
    }

    fn read_stale_cache() -> Result<String, Fault> {
        println!("  Stale cache...");
        Ok("cached profile".to_string())
    }

    let result = RetryConfig::new()
        .with_max_retries(1)
        .invoke(fetch_primary)
        .with_fallback(read_stale_cache);

    // The primary failure stays on the record even though a value arrived
    println!("Value: {:?}", result.value());
    println!("Primary successful:  {}", result.successful());
    println!("Fallback successful: {}", result.successful_fallback());
}

// ==================== Failing Fallback ====================

/// Example 3: When the fallback fails too
///
/// The fallback fault is captured separately from the attempt faults;
/// nothing is thrown.
fn example_failing_fallback() {
    println!("\n=== Example 3: Failing Fallback ===");

    let result = RetryConfig::new()
        .with_max_retries(1)
        .invoke(|| Err::<String, _>(Fault::new("primary", "service down")))
        .with_fallback(|| Err::<String, _>(Fault::new("cache", "cache also down")));

    println!("Value: {:?}", result.value());
    println!("Attempt faults: {}", result.info().faults().len());
    println!("Fallback fault: {}", result.fallback_fault().unwrap());
}

// ==================== No-Op on Success ====================

/// Example 4: Fallbacks never run against a success
///
/// This guarantee is what makes unconditional `.with_fallback(...)`
/// chaining safe: the expensive fallback path is only taken on failure.
fn example_noop_on_success() {
    println!("\n=== Example 4: No-Op on Success ===");

    let mut fallback_calls = 0u32;
    let result = RetryConfig::new()
        .invoke(|| Ok::<_, Fault>(10 / 2))
        .with_fallback(|| {
            fallback_calls += 1;
            Ok::<_, Fault>(999)
        });

    println!("Value: {:?}", result.value());
    println!("Fallback executed: {}", result.executed_fallback());
    println!("Fallback calls:    {}", fallback_calls);
}

// ==================== Layered Fallbacks ====================

/// Example 5: A second fallback behind a failed first one
///
/// Each attachment re-checks the disposition, so fallbacks layer
/// naturally: primary -> replica -> hardcoded default.
fn example_layered_fallbacks() {
    println!("\n=== Example 5: Layered Fallbacks ===");

    let result = RetryConfig::new()
        .with_max_retries(0)
        .invoke(|| Err::<&str, _>(Fault::new("primary", "primary down")))
        .with_fallback(|| {
            println!("  Replica...");
            Err::<&str, _>(Fault::new("replica", "replica down"))
        })
        .with_fallback(|| {
            println!("  Hardcoded default...");
            Ok::<_, Fault>("default")
        });

    println!("Value: {:?}", result.value());
    println!("Fallback successful: {}", result.successful_fallback());
}

// ==================== Outcome Bridge ====================

/// Example 6: Collapsing a report into an Outcome
///
/// Call-sites that only care about the final disposition can drop the
/// counters and chain on the outcome instead.
fn example_outcome_bridge() {
    println!("\n=== Example 6: Outcome Bridge ===");

    let outcome = RetryConfig::new()
        .with_max_retries(1)
        .invoke(|| Ok::<_, Fault>(21))
        .into_outcome()
        .and_then(|n| steadfast::Outcome::ok(n * 2));

    println!("Outcome value: {:?}", outcome.value());
}

fn main() {
    println!("======================================");
    println!("      Fallback Chains Example         ");
    println!("======================================");

    example_fallback_value();
    example_computed_fallback();
    example_failing_fallback();
    example_noop_on_success();
    example_layered_fallbacks();
    example_outcome_bridge();

    println!("\n======================================");
    println!("           Examples Complete           ");
    println!("======================================");
}
