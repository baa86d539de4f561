//! The execution report produced by one retry invocation.

use crate::fault::Fault;
use crate::outcome::Outcome;

/// Counters populated by the engine during a single invocation.
///
/// `executions` is incremented once per attempt before the attempt body
/// runs; `faults` records every captured failure in attempt order and
/// never shrinks. A `RetryInfo` is owned exclusively by the
/// [`RetryResult`] it is embedded in.
#[derive(Debug, Clone, Default)]
pub struct RetryInfo {
    executions: u32,
    faults: Vec<Fault>,
}

impl RetryInfo {
    /// Attempts actually made.
    pub fn executions(&self) -> u32 {
        self.executions
    }

    /// Every fault captured during the invocation, one per failed
    /// attempt, in attempt order.
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    /// The most recent fault, if any attempt failed.
    pub fn last_fault(&self) -> Option<&Fault> {
        self.faults.last()
    }

    pub(crate) fn record_attempt(&mut self) {
        self.executions += 1;
    }

    pub(crate) fn record_fault(&mut self, fault: Fault) {
        self.faults.push(fault);
    }
}

/// The outcome of one retry invocation: the value (if any attempt
/// succeeded), the attempt report, and the fallback disposition.
///
/// The void/action form is simply `RetryResult<()>`. Fallback methods
/// consume the result and return it, so a fallback can be attached
/// unconditionally after [`invoke`](crate::retry::invoke):
///
/// ```rust
/// use steadfast::{Fault, RetryConfig};
///
/// let result = RetryConfig::new()
///     .with_max_retries(1)
///     .invoke(|| Err::<i32, Fault>(Fault::msg("service down")))
///     .with_fallback_value(42);
///
/// assert!(!result.successful());
/// assert!(result.executed_fallback());
/// assert_eq!(result.into_value(), Some(42));
/// ```
///
/// # Success flags
///
/// [`successful`](RetryResult::successful) reports whether the primary
/// operation eventually succeeded (and no fallback has since failed). A
/// fallback that produces a value does **not** flip it back to `true`:
/// the primary failure is permanent history; the fallback's own
/// disposition is reported by
/// [`successful_fallback`](RetryResult::successful_fallback).
#[derive(Debug, Clone)]
pub struct RetryResult<T> {
    value: Option<T>,
    info: RetryInfo,
    succeeded: bool,
    executed_fallback: bool,
    fallback_fault: Option<Fault>,
}

impl<T> RetryResult<T> {
    pub(crate) fn new() -> Self {
        Self {
            value: None,
            info: RetryInfo::default(),
            succeeded: false,
            executed_fallback: false,
            fallback_fault: None,
        }
    }

    pub(crate) fn record_attempt(&mut self) {
        self.info.record_attempt();
    }

    pub(crate) fn record_fault(&mut self, fault: Fault) {
        self.info.record_fault(fault);
    }

    pub(crate) fn record_success(&mut self, value: T) {
        self.value = Some(value);
        self.succeeded = true;
    }

    // ========== Read accessors ==========

    /// The last successful value (primary or fallback), if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the result, yielding the value if any.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Consume the result, yielding the value or the type's default.
    pub fn into_value_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// The attempt report.
    pub fn info(&self) -> &RetryInfo {
        &self.info
    }

    /// Whether the primary operation eventually succeeded and no
    /// fallback has since failed.
    pub fn successful(&self) -> bool {
        self.succeeded && self.fallback_fault.is_none()
    }

    /// Whether a fallback was applied to this result.
    pub fn executed_fallback(&self) -> bool {
        self.executed_fallback
    }

    /// The fault from a failed fallback, if any.
    pub fn fallback_fault(&self) -> Option<&Fault> {
        self.fallback_fault.as_ref()
    }

    /// Whether the fallback chain is fault-free (vacuously `true` when no
    /// fallback was applied).
    pub fn successful_fallback(&self) -> bool {
        self.fallback_fault.is_none()
    }

    /// Collapse the result into an [`Outcome`].
    ///
    /// A value (primary or fallback-supplied) becomes `Outcome::Ok`;
    /// otherwise the most relevant fault (the fallback's if it failed,
    /// else the last attempt's) becomes `Outcome::Err`.
    pub fn into_outcome(self) -> Outcome<T> {
        match self.value {
            Some(value) => Outcome::Ok(value),
            None => {
                let fault = self
                    .fallback_fault
                    .or_else(|| self.info.faults.last().cloned())
                    .unwrap_or_else(|| Fault::new("retry", "no attempt was recorded"));
                Outcome::Err(fault)
            }
        }
    }

    // ========== Fallback composition ==========

    /// Apply a fallback operation if the result is unsuccessful.
    ///
    /// A no-op on a successful result: the fallback is never invoked. On
    /// an unsuccessful result the fallback runs once; its value
    /// overwrites the result's value on success, its fault is captured
    /// into [`fallback_fault`](RetryResult::fallback_fault) on failure
    /// (leaving the value unchanged). The fallback run does not count
    /// toward [`RetryInfo::executions`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::{Fault, RetryConfig};
    ///
    /// let result = RetryConfig::new()
    ///     .with_max_retries(1)
    ///     .invoke(|| Err::<i32, Fault>(Fault::msg("down")))
    ///     .with_fallback(|| Ok::<_, Fault>(2 * 2));
    ///
    /// assert_eq!(result.value(), Some(&4));
    /// assert!(result.successful_fallback());
    /// assert!(!result.successful());
    /// ```
    pub fn with_fallback<E, F>(mut self, fallback: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Fault>,
    {
        if self.successful() {
            return self;
        }
        self.executed_fallback = true;
        self.fallback_fault = None;
        match fallback() {
            Ok(value) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("fallback supplied a value");
                self.value = Some(value);
            }
            Err(e) => {
                let fault = e.into();
                #[cfg(feature = "tracing")]
                tracing::debug!(fault = %fault, "fallback failed");
                self.fallback_fault = Some(fault);
            }
        }
        self
    }

    /// Substitute a fixed value if the result is unsuccessful.
    ///
    /// A no-op on a successful result.
    pub fn with_fallback_value(mut self, value: T) -> Self {
        if self.successful() {
            return self;
        }
        self.executed_fallback = true;
        self.fallback_fault = None;
        self.value = Some(value);
        self
    }

    /// Apply an asynchronous fallback operation if the result is
    /// unsuccessful.
    ///
    /// Semantics match [`with_fallback`](RetryResult::with_fallback); the
    /// fallback future is awaited on the caller's task.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::{Fault, RetryConfig};
    ///
    /// # tokio_test::block_on(async {
    /// let result = RetryConfig::new()
    ///     .with_max_retries(0)
    ///     .invoke(|| Err::<i32, Fault>(Fault::msg("down")))
    ///     .with_fallback_async(|| async { Ok::<_, Fault>(1) })
    ///     .await;
    ///
    /// assert_eq!(result.value(), Some(&1));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn with_fallback_async<E, F, Fut>(mut self, fallback: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        E: Into<Fault>,
    {
        if self.successful() {
            return self;
        }
        self.executed_fallback = true;
        self.fallback_fault = None;
        match fallback().await {
            Ok(value) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("async fallback supplied a value");
                self.value = Some(value);
            }
            Err(e) => {
                let fault = e.into();
                #[cfg(feature = "tracing")]
                tracing::debug!(fault = %fault, "async fallback failed");
                self.fallback_fault = Some(fault);
            }
        }
        self
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use std::cell::Cell;

    fn failed_result(faults: u32) -> RetryResult<i32> {
        let mut result = RetryResult::new();
        for i in 0..faults {
            result.record_attempt();
            result.record_fault(Fault::new("attempt", format!("failure {}", i)));
        }
        result
    }

    fn successful_result(value: i32) -> RetryResult<i32> {
        let mut result = RetryResult::new();
        result.record_attempt();
        result.record_success(value);
        result
    }

    #[test]
    fn test_info_records_in_order() {
        let result = failed_result(3);
        assert_eq!(result.info().executions(), 3);
        assert_eq!(result.info().faults().len(), 3);
        assert_eq!(result.info().faults()[0].message(), "failure 0");
        assert_eq!(result.info().last_fault().unwrap().message(), "failure 2");
    }

    #[test]
    fn test_fallback_is_noop_on_success() {
        let calls = Cell::new(0u32);
        let result = successful_result(5).with_fallback(|| {
            calls.set(calls.get() + 1);
            Ok::<_, Fault>(99)
        });

        assert_eq!(calls.get(), 0);
        assert!(!result.executed_fallback());
        assert!(result.successful());
        assert_eq!(result.into_value(), Some(5));
    }

    #[test]
    fn test_fallback_value_is_noop_on_success() {
        let result = successful_result(5).with_fallback_value(1000);
        assert!(!result.executed_fallback());
        assert_eq!(result.into_value(), Some(5));
    }

    #[test]
    fn test_successful_fallback_supplies_value() {
        let result = failed_result(2).with_fallback(|| Ok::<_, Fault>(4));

        assert!(result.executed_fallback());
        assert!(result.successful_fallback());
        assert!(result.fallback_fault().is_none());
        // The primary failure stays on the record
        assert!(!result.successful());
        assert_eq!(result.into_value(), Some(4));
    }

    #[test]
    fn test_failed_fallback_captures_fault_and_keeps_value() {
        let result =
            failed_result(2).with_fallback(|| Err::<i32, _>(Fault::new("fallback", "also down")));

        assert!(result.executed_fallback());
        assert!(!result.successful_fallback());
        assert!(!result.successful());
        assert_eq!(result.fallback_fault().unwrap().kind(), "fallback");
        assert_eq!(result.into_value(), None);
    }

    #[test]
    fn test_fallback_value_always_succeeds() {
        let result = failed_result(1).with_fallback_value(33);
        assert!(result.executed_fallback());
        assert!(result.successful_fallback());
        assert_eq!(result.into_value(), Some(33));
    }

    #[test]
    fn test_second_fallback_replaces_first_fault() {
        let result = failed_result(1)
            .with_fallback(|| Err::<i32, _>(Fault::msg("first fallback down")))
            .with_fallback(|| Ok::<_, Fault>(7));

        assert!(result.successful_fallback());
        assert!(result.fallback_fault().is_none());
        assert_eq!(result.into_value(), Some(7));
    }

    #[test]
    fn test_into_value_or_default() {
        assert_eq!(failed_result(1).into_value_or_default(), 0);
        assert_eq!(successful_result(5).into_value_or_default(), 5);
    }

    #[test]
    fn test_into_outcome_prefers_value() {
        assert_eq!(successful_result(5).into_outcome().try_value().unwrap(), 5);
    }

    #[test]
    fn test_into_outcome_carries_last_fault() {
        let fault = failed_result(2).into_outcome().unwrap_fault();
        assert_eq!(fault.message(), "failure 1");
    }

    #[test]
    fn test_into_outcome_prefers_fallback_fault() {
        let result = failed_result(1).with_fallback(|| Err::<i32, _>(Fault::new("fb", "nope")));
        assert_eq!(result.into_outcome().unwrap_fault().kind(), "fb");
    }

    #[test]
    fn test_void_form_uses_unit() {
        let mut result: RetryResult<()> = RetryResult::new();
        result.record_attempt();
        result.record_success(());
        assert!(result.successful());
        assert_eq!(result.into_value(), Some(()));
    }
}
