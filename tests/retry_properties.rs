//! Property-based tests for the retry engine's counting laws.

use proptest::prelude::*;
use steadfast::{Fault, RetryConfig};

proptest! {
    /// An always-failing operation runs exactly budget + 1 times.
    #[test]
    fn prop_always_failing_runs_budget_plus_one(n in 0u32..8) {
        let result = RetryConfig::new()
            .with_max_retries(n)
            .invoke(|| Err::<i32, _>(Fault::msg("always failing")));

        prop_assert_eq!(result.info().executions(), n + 1);
        prop_assert_eq!(result.info().faults().len(), (n + 1) as usize);
        prop_assert!(!result.successful());
    }

    /// An operation failing k times inside the budget succeeds with
    /// k + 1 executions and k captured faults.
    #[test]
    fn prop_eventual_success_counts(k in 0u32..6, slack in 0u32..4) {
        let mut i = 0u32;
        let result = RetryConfig::new()
            .with_max_retries(k + slack)
            .invoke(|| {
                i += 1;
                if i > k {
                    Ok(i)
                } else {
                    Err(Fault::msg("transient"))
                }
            });

        prop_assert!(result.successful());
        prop_assert_eq!(result.info().executions(), k + 1);
        prop_assert_eq!(result.info().faults().len(), k as usize);
        prop_assert_eq!(result.into_value(), Some(k + 1));
    }

    /// A zero-retry budget always yields exactly one attempt.
    #[test]
    fn prop_zero_retries_single_attempt(succeed: bool) {
        let mut calls = 0u32;
        let result = RetryConfig::new()
            .with_max_retries(0)
            .invoke(|| {
                calls += 1;
                if succeed {
                    Ok(1)
                } else {
                    Err(Fault::msg("failing"))
                }
            });

        prop_assert_eq!(calls, 1);
        prop_assert_eq!(result.info().executions(), 1);
        prop_assert_eq!(result.successful(), succeed);
    }

    /// Fallbacks never run against a successful result.
    #[test]
    fn prop_fallback_noop_on_success(v in any::<i32>()) {
        let mut fallback_calls = 0u32;
        let result = RetryConfig::new()
            .invoke(|| Ok::<_, Fault>(v))
            .with_fallback(|| {
                fallback_calls += 1;
                Ok::<_, Fault>(0)
            });

        prop_assert_eq!(fallback_calls, 0);
        prop_assert!(!result.executed_fallback());
        prop_assert_eq!(result.into_value(), Some(v));
    }

    /// A fallback value replaces the missing value of a failed result
    /// without rewriting the failure itself.
    #[test]
    fn prop_fallback_value_replaces_on_failure(v in any::<i32>()) {
        let result = RetryConfig::new()
            .with_max_retries(1)
            .invoke(|| Err::<i32, _>(Fault::msg("down")))
            .with_fallback_value(v);

        prop_assert!(result.executed_fallback());
        prop_assert!(result.successful_fallback());
        prop_assert!(!result.successful());
        prop_assert_eq!(result.info().executions(), 2);
        prop_assert_eq!(result.into_value(), Some(v));
    }
}
