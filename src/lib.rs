//! # Steadfast
//!
//! > *"Fail plainly, retry deliberately"*
//!
//! A Rust library for explicit outcomes and declarative retries.
//!
//! ## Philosophy
//!
//! **Steadfast** replaces exception-style control flow with values you
//! can inspect:
//! - **Outcomes**: a fallible call returns an [`Outcome`] (or a
//!   [`Maybe`] for presence/absence) instead of unwinding; faults are
//!   data, chaining short-circuits them for you.
//! - **Retries**: a [`RetryConfig`] describes *what* persistence you
//!   want (wait, budget, forever, timeout); the engine loops for you and
//!   hands back a full report, captured faults and fallback disposition
//!   included, instead of throwing.
//!
//! ## Quick Example
//!
//! ```rust
//! use steadfast::{Fault, RetryConfig};
//! use std::time::Duration;
//!
//! fn flaky() -> Result<u32, Fault> {
//!     Err(Fault::new("connect", "connection refused"))
//! }
//!
//! let result = RetryConfig::new()
//!     .with_wait(Duration::from_millis(0))
//!     .with_max_retries(2)
//!     .invoke(flaky)
//!     .with_fallback_value(7);
//!
//! // Three attempts failed, the fallback stepped in
//! assert!(!result.successful());
//! assert_eq!(result.info().executions(), 3);
//! assert_eq!(result.info().faults().len(), 3);
//! assert!(result.successful_fallback());
//! assert_eq!(result.into_value(), Some(7));
//! ```
//!
//! For more examples, see the [demos](https://github.com/iepathos/steadfast/tree/master/demos) directory.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod fault;
pub mod maybe;
pub mod outcome;
pub mod retry;
pub mod testing;

// Re-exports
pub use fault::Fault;
pub use maybe::Maybe;
pub use outcome::{AccessError, Outcome};
pub use retry::{RetryConfig, RetryInfo, RetryResult, DEFAULT_MAX_RETRIES};

#[cfg(feature = "async")]
pub use retry::WaitForValue;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fault::Fault;
    pub use crate::maybe::Maybe;
    pub use crate::outcome::{AccessError, Outcome};
    pub use crate::retry::{RetryConfig, RetryInfo, RetryResult};

    #[cfg(feature = "async")]
    pub use crate::retry::WaitForValue;
}
