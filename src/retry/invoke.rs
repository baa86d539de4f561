//! The retry execution loop.
//!
//! The engine runs entirely on the caller's thread (or task, for
//! [`invoke_async`]): attempts execute strictly sequentially, faults are
//! captured in attempt order, and the only suspension points are the
//! operation itself and the inter-attempt wait. Operational faults are
//! never rethrown; the caller inspects the returned
//! [`RetryResult`] instead of catching anything.

use std::time::Instant;

use crate::fault::Fault;
use crate::retry::config::RetryConfig;
use crate::retry::report::RetryResult;

/// Invoke an operation under a retry policy, blocking the calling thread.
///
/// The operation is any `FnMut() -> Result<T, E>` whose error converts
/// into a [`Fault`]; an action (no meaningful value) is the same shape
/// with `T = ()`. Every failure is captured into the report; the wait
/// interval is slept between attempts only, never after the final
/// failure.
///
/// # Example
///
/// ```rust
/// use steadfast::{Fault, RetryConfig};
/// use steadfast::retry::invoke;
///
/// let result = invoke(&RetryConfig::new(), || Ok::<_, Fault>(2 + 2));
///
/// assert_eq!(result.value(), Some(&4));
/// assert_eq!(result.info().executions(), 1);
/// assert!(result.successful());
/// ```
///
/// An exhausted budget surfaces as an unsuccessful result, not an error:
///
/// ```rust
/// use steadfast::{Fault, RetryConfig};
/// use steadfast::retry::invoke;
///
/// let config = RetryConfig::new().with_max_retries(2);
/// let result = invoke(&config, || Err::<i32, Fault>(Fault::msg("down")));
///
/// assert!(!result.successful());
/// assert_eq!(result.info().executions(), 3);
/// assert_eq!(result.info().faults().len(), 3);
/// ```
pub fn invoke<T, E, F>(config: &RetryConfig, mut operation: F) -> RetryResult<T>
where
    F: FnMut() -> Result<T, E>,
    E: Into<Fault>,
{
    let mut result = RetryResult::new();
    let deadline = deadline_for(config);
    let mut remaining = i64::from(config.max_retries());

    loop {
        result.record_attempt();
        match operation() {
            Ok(value) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    executions = result.info().executions(),
                    "operation succeeded"
                );
                result.record_success(value);
                break;
            }
            Err(e) => {
                let fault = e.into();
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    attempt = result.info().executions(),
                    fault = %fault,
                    "attempt failed"
                );
                result.record_fault(fault);
            }
        }

        remaining -= 1;
        if !config.retry_forever() && remaining < 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                executions = result.info().executions(),
                "retry budget exhausted"
            );
            break;
        }

        let wait = config.wait_between_retries();
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }

        if past(deadline) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                executions = result.info().executions(),
                "total timeout expired"
            );
            break;
        }
    }

    result
}

/// Invoke an asynchronous operation under a retry policy.
///
/// Mirrors [`invoke`] with the operation awaited each attempt; the
/// inter-attempt wait uses the async timer, so the executor is never
/// blocked. The returned future can be awaited directly or bridged
/// synchronously with [`WaitForValue::wait_for_value`].
///
/// # Example
///
/// ```rust
/// use steadfast::{Fault, RetryConfig};
/// use steadfast::retry::invoke_async;
///
/// # tokio_test::block_on(async {
/// let config = RetryConfig::new().with_max_retries(1);
/// let result = invoke_async(&config, || async { Ok::<_, Fault>("hello") }).await;
///
/// assert_eq!(result.value(), Some(&"hello"));
/// assert_eq!(result.info().executions(), 1);
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn invoke_async<T, E, F, Fut>(config: &RetryConfig, mut operation: F) -> RetryResult<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    let mut result = RetryResult::new();
    let deadline = deadline_for(config);
    let mut remaining = i64::from(config.max_retries());

    loop {
        result.record_attempt();
        match operation().await {
            Ok(value) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    executions = result.info().executions(),
                    "operation succeeded"
                );
                result.record_success(value);
                break;
            }
            Err(e) => {
                let fault = e.into();
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    attempt = result.info().executions(),
                    fault = %fault,
                    "attempt failed"
                );
                result.record_fault(fault);
            }
        }

        remaining -= 1;
        if !config.retry_forever() && remaining < 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                executions = result.info().executions(),
                "retry budget exhausted"
            );
            break;
        }

        let wait = config.wait_between_retries();
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }

        if past(deadline) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                executions = result.info().executions(),
                "total timeout expired"
            );
            break;
        }
    }

    result
}

/// The absolute deadline for an invocation, if the config enables one.
fn deadline_for(config: &RetryConfig) -> Option<Instant> {
    config
        .total_timeout()
        .and_then(|timeout| Instant::now().checked_add(timeout))
}

fn past(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

impl RetryConfig {
    /// Invoke an operation under this policy. See [`invoke`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::{Fault, RetryConfig};
    ///
    /// let result = RetryConfig::new()
    ///     .with_wait_ms(0)
    ///     .with_max_retries(2)
    ///     .invoke(|| Ok::<_, Fault>(10 / 2));
    ///
    /// assert_eq!(result.into_value(), Some(5));
    /// ```
    pub fn invoke<T, E, F>(&self, operation: F) -> RetryResult<T>
    where
        F: FnMut() -> Result<T, E>,
        E: Into<Fault>,
    {
        invoke(self, operation)
    }

    /// Invoke an asynchronous operation under this policy. See
    /// [`invoke_async`].
    #[cfg(feature = "async")]
    pub async fn invoke_async<T, E, F, Fut>(&self, operation: F) -> RetryResult<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        E: Into<Fault>,
    {
        invoke_async(self, operation).await
    }
}

/// Blocking bridge from an asynchronous retry chain back to synchronous
/// code.
///
/// `wait_for_value` drives the future to completion on a fresh
/// current-thread runtime, so a pending [`invoke_async`] (or
/// [`with_fallback_async`](RetryResult::with_fallback_async) chain) can
/// be unwrapped without an enclosing `async` context.
///
/// # Panics
///
/// Panics if called from within an async context (a runtime cannot be
/// entered from inside another), or if the bridging runtime cannot be
/// built.
///
/// # Example
///
/// ```rust
/// use steadfast::{Fault, RetryConfig, WaitForValue};
/// use steadfast::retry::invoke_async;
///
/// let config = RetryConfig::new().with_max_retries(1);
/// let result = invoke_async(&config, || async { Ok::<_, Fault>(7) }).wait_for_value();
///
/// assert_eq!(result.into_value(), Some(7));
/// ```
#[cfg(feature = "async")]
pub trait WaitForValue: std::future::Future + Sized {
    /// Block the current thread until the future resolves.
    fn wait_for_value(self) -> Self::Output;
}

#[cfg(feature = "async")]
impl<F: std::future::Future> WaitForValue for F {
    fn wait_for_value(self) -> Self::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build the bridging runtime for wait_for_value")
            .block_on(self)
    }
}
