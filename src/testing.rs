//! Testing utilities for outcome- and retry-based code
//!
//! Assertion macros for the common dispositions, and property-based
//! testing support behind the `proptest` feature.
//!
//! # Assertion Macros
//!
//! ```rust
//! use steadfast::{assert_fault, assert_success, Fault, Outcome};
//!
//! let ok = Outcome::ok(42);
//! assert_success!(ok);
//!
//! let err: Outcome<i32> = Outcome::err(Fault::new("io", "disk gone"));
//! assert_fault!(err, "io");
//! ```

/// Assert that an [`Outcome`](crate::Outcome) is success-shaped (`Ok` or
/// `Void`).
///
/// Panics with the captured fault otherwise.
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(_) | $crate::Outcome::Void => {}
            $crate::Outcome::Err(fault) => {
                panic!("Expected a success, got a fault: {}", fault);
            }
        }
    };
}

/// Assert that an [`Outcome`](crate::Outcome) is a fault, optionally with
/// a specific kind tag.
///
/// ```rust
/// use steadfast::{assert_fault, Fault, Outcome};
///
/// let err: Outcome<i32> = Outcome::err(Fault::new("timeout", "too slow"));
/// assert_fault!(err);
///
/// let err: Outcome<i32> = Outcome::err(Fault::new("timeout", "too slow"));
/// assert_fault!(err, "timeout");
/// ```
#[macro_export]
macro_rules! assert_fault {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Err(_) => {}
            other => {
                panic!("Expected a fault, got a success: {:?}", other);
            }
        }
    };
    ($outcome:expr, $kind:expr) => {
        match $outcome {
            $crate::Outcome::Err(fault) => {
                assert_eq!(fault.kind(), $kind);
            }
            other => {
                panic!("Expected a fault, got a success: {:?}", other);
            }
        }
    };
}

/// Assert that a [`RetryResult`](crate::RetryResult) exhausted its budget
/// after the given number of attempts.
///
/// ```rust
/// use steadfast::{assert_exhausted, Fault, RetryConfig};
///
/// let result = RetryConfig::new()
///     .with_max_retries(2)
///     .invoke(|| Err::<i32, Fault>(Fault::msg("down")));
///
/// assert_exhausted!(result, 3);
/// ```
#[macro_export]
macro_rules! assert_exhausted {
    ($result:expr, $attempts:expr) => {{
        let result = &$result;
        assert!(
            !result.successful(),
            "Expected an unsuccessful result, got a success after {} attempts",
            result.info().executions()
        );
        assert_eq!(result.info().executions(), $attempts);
        assert_eq!(result.info().faults().len() as u32, $attempts);
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Fault, Maybe, Outcome, RetryConfig};

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Maybe::some),
            proptest::strategy::LazyJust::new(Maybe::none),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Outcome<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Outcome::ok),
            proptest::strategy::LazyJust::new(Outcome::void),
            any::<String>().prop_map(|m| Outcome::err(Fault::msg(m))),
        ]
        .boxed()
    }
}

/// Generated policies always terminate: waits stay in single-digit
/// milliseconds, the budget stays small, and retry-forever only appears
/// together with a timeout.
#[cfg(feature = "proptest")]
impl Arbitrary for RetryConfig {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use std::time::Duration;

        (
            0u64..4,
            0u32..8,
            any::<bool>(),
            proptest::option::of(5u64..50),
        )
            .prop_map(|(wait_ms, retries, forever, timeout_ms)| {
                let config = RetryConfig::new()
                    .with_wait_ms(wait_ms)
                    .with_max_retries(retries);
                if forever {
                    config
                        .retry_until_successful()
                        .timeout_after(Duration::from_millis(timeout_ms.unwrap_or(25)))
                } else {
                    match timeout_ms {
                        Some(ms) => config.timeout_after(Duration::from_millis(ms)),
                        None => config,
                    }
                }
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Fault, Outcome, RetryConfig};

    #[test]
    fn assert_success_macro() {
        assert_success!(Outcome::ok(42));
        assert_success!(Outcome::<i32>::void());
    }

    #[test]
    #[should_panic(expected = "Expected a success")]
    fn assert_success_panics_on_fault() {
        assert_success!(Outcome::<i32>::err(Fault::msg("boom")));
    }

    #[test]
    fn assert_fault_macro() {
        assert_fault!(Outcome::<i32>::err(Fault::msg("boom")));
        assert_fault!(Outcome::<i32>::err(Fault::new("io", "gone")), "io");
    }

    #[test]
    #[should_panic(expected = "Expected a fault")]
    fn assert_fault_panics_on_success() {
        assert_fault!(Outcome::ok(1));
    }

    #[test]
    fn assert_exhausted_macro() {
        let result = RetryConfig::new()
            .with_max_retries(1)
            .invoke(|| Err::<i32, _>(Fault::msg("down")));
        assert_exhausted!(result, 2);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{Maybe, Outcome, RetryConfig};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn maybe_arbitrary_is_well_formed(maybe in any::<Maybe<i32>>()) {
                prop_assert_ne!(maybe.is_some(), maybe.is_none());
            }

            #[test]
            fn outcome_arbitrary_is_well_formed(outcome in any::<Outcome<i32>>()) {
                prop_assert_ne!(outcome.is_ok(), outcome.is_err());
            }

            #[test]
            fn generated_policies_terminate(config in any::<RetryConfig>()) {
                if config.retry_forever() {
                    prop_assert!(config.total_timeout().is_some());
                } else {
                    prop_assert!(config.max_retries() < 8);
                }
            }
        }
    }
}
