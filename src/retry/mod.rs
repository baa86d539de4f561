//! Declarative retries for fallible operations.
//!
//! The engine separates *what* retry behavior you want from *how* it
//! runs:
//!
//! - **Policy**: [`RetryConfig`] is pure data (wait interval, retry
//!   budget, retry-forever, total timeout), built fluently and easy to
//!   share, inspect, or (with the `serde` feature) load from config.
//! - **Execution**: [`invoke`] and its async mirror run the attempt loop
//!   on the caller's thread or task, capturing every fault into a report
//!   instead of propagating it.
//! - **Report**: [`RetryResult`] carries the value, the
//!   [`RetryInfo`] counters, and the fallback disposition; fallbacks
//!   ([`with_fallback`](RetryResult::with_fallback) and friends) chain
//!   onto it fluently and only run when the primary operation failed.
//!
//! # Quick Start
//!
//! ```rust
//! use steadfast::{Fault, RetryConfig};
//! use std::time::Duration;
//!
//! let result = RetryConfig::new()
//!     .with_wait(Duration::from_millis(0))
//!     .with_max_retries(2)
//!     .invoke(|| Ok::<_, Fault>(10 / 2))
//!     .with_fallback_value(0);
//!
//! assert_eq!(result.value(), Some(&5));
//! assert!(result.successful());
//! assert_eq!(result.info().executions(), 1);
//! ```
//!
//! # Termination
//!
//! The loop stops on the first success, when the retry budget is spent,
//! or when the total timeout expires, whichever comes first.
//! [`retry_until_successful`](RetryConfig::retry_until_successful)
//! removes the budget bound; pair it with
//! [`timeout_after`](RetryConfig::timeout_after) unless the operation is
//! known to eventually succeed.

mod config;
mod invoke;
mod report;

#[cfg(feature = "serde")]
mod serde_impl;

pub use config::{RetryConfig, DEFAULT_MAX_RETRIES};
pub use invoke::invoke;
#[cfg(feature = "async")]
pub use invoke::{invoke_async, WaitForValue};
pub use report::{RetryInfo, RetryResult};
