//! Outcome Pipeline Example
//!
//! Demonstrates exception-free control flow with the outcome model.
//! Shows practical patterns including:
//! - Capturing a fallible call as an Outcome
//! - Chaining steps with and_then (failure short-circuits)
//! - Void successes and the value-free `then` chain
//! - Safe vs unwrapping extraction
//! - Recovering the concrete error type from a fault
//! - The Maybe visitor

use steadfast::{Fault, Maybe, Outcome};

// ==================== Capture ====================

/// Example 1: Wrapping a fallible call
///
/// `capture` runs a Result-returning closure and records its
/// disposition: no unwinding, no `?` escaping the boundary.
fn example_capture() {
    println!("\n=== Example 1: Capture ===");

    let good = Outcome::capture(|| "1101".parse::<i32>());
    let bad = Outcome::capture(|| "eleven".parse::<i32>());

    println!("good.is_ok():  {}", good.is_ok());
    println!("bad.is_err():  {}", bad.is_err());
    println!("bad fault:     {}", bad.unwrap_fault());
}

// ==================== Chaining ====================

/// Example 2: A three-step pipeline
///
/// Each step returns an Outcome; the first fault flows through the
/// remaining steps untouched without invoking them.
fn example_chaining() {
    println!("\n=== Example 2: Chaining ===");

    fn parse(s: &str) -> Outcome<i32> {
        println!("  parse({:?})", s);
        Outcome::capture(|| s.parse::<i32>())
    }

    fn validate(n: i32) -> Outcome<i32> {
        println!("  validate({})", n);
        if (1..=100).contains(&n) {
            Outcome::ok(n)
        } else {
            Outcome::err(Fault::new("range", format!("{} is out of range", n)))
        }
    }

    fn apply_discount(n: i32) -> Outcome<i32> {
        println!("  apply_discount({})", n);
        Outcome::ok(n - 5)
    }

    let result = parse("42").and_then(validate).and_then(apply_discount);
    println!("Pipeline result: {:?}", result.value());

    println!("\nAnd with a failing middle step:");
    let result = parse("9000").and_then(validate).and_then(apply_discount);
    println!("Pipeline fault: {}", result.unwrap_fault());
}

// ==================== Void Successes ====================

/// Example 3: Operations with nothing to return
///
/// A side-effecting step succeeds as `Void`; `then` continues the chain
/// without a value to hand over.
fn example_void() {
    println!("\n=== Example 3: Void Successes ===");

    fn flush_buffers() -> Outcome<()> {
        println!("  flushing...");
        Outcome::void()
    }

    let outcome = flush_buffers().then(|| {
        println!("  reporting...");
        Outcome::ok("2 buffers flushed")
    });

    println!("Report: {:?}", outcome.value());
}

// ==================== Extraction ====================

/// Example 4: Safe and unwrapping extraction
///
/// `try_value` captures a variant mismatch as an AccessError; the
/// unwrapping form panics and is reserved for impossible states.
fn example_extraction() {
    println!("\n=== Example 4: Extraction ===");

    let err: Outcome<i32> = Outcome::err(Fault::new("io", "disk gone"));

    match err.clone().try_value() {
        Ok(v) => println!("value: {}", v),
        Err(access) => println!("mismatch captured: {}", access),
    }

    // fold collapses both sides at once
    let label = err.fold(
        |v| format!("success: {:?}", v),
        |fault| format!("failure: {}", fault),
    );
    println!("fold: {}", label);
}

// ==================== Fault Narrowing ====================

/// Example 5: Recovering the concrete error type
///
/// Faults converted from a real error keep it; `downcast_ref` narrows
/// back for error-specific handling.
fn example_fault_narrowing() {
    println!("\n=== Example 5: Fault Narrowing ===");

    let fault = Fault::from("eleven".parse::<i32>().unwrap_err());

    println!("kind: {}", fault.kind());
    if let Some(parse_err) = fault.downcast_ref::<std::num::ParseIntError>() {
        println!("narrowed: {:?}", parse_err.kind());
    }
}

// ==================== Maybe ====================

/// Example 6: The Maybe visitor
///
/// `map` hands the whole Maybe to the continuation; presence and
/// absence are both just shapes to branch on.
fn example_maybe() {
    println!("\n=== Example 6: Maybe ===");

    fn find_user(id: u32) -> Maybe<&'static str> {
        if id == 1 {
            Maybe::some("alice")
        } else {
            Maybe::none()
        }
    }

    for id in [1, 2] {
        let greeting = find_user(id).map(|m| match m {
            Maybe::Some(name) => format!("hello, {}", name),
            Maybe::None => format!("no user {}", id),
        });
        println!("{}", greeting);
    }
}

fn main() {
    println!("======================================");
    println!("      Outcome Pipeline Example        ");
    println!("======================================");

    example_capture();
    example_chaining();
    example_void();
    example_extraction();
    example_fault_narrowing();
    example_maybe();

    println!("\n======================================");
    println!("           Examples Complete           ");
    println!("======================================");
}
