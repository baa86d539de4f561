//! Retry policy configuration.

use std::time::Duration;

/// Attempts made when no explicit budget is set: 1 initial + 3 retries.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// A declarative, fixed-interval retry policy.
///
/// The config is pure data: it describes how the engine should loop but
/// performs no work itself. Each `with_*` method consumes the config and
/// returns the updated value, so a built policy is immutable and safe to
/// share or store:
///
/// ```rust
/// use steadfast::RetryConfig;
/// use std::time::Duration;
///
/// let config = RetryConfig::new()
///     .with_wait(Duration::from_millis(200))
///     .with_max_retries(10);
///
/// assert_eq!(config.wait_between_retries(), Duration::from_millis(200));
/// assert_eq!(config.max_retries(), 10);
/// ```
///
/// # Defaults
///
/// No wait between attempts, a budget of [`DEFAULT_MAX_RETRIES`] retries
/// (up to 4 total attempts), no retry-forever, no total timeout.
///
/// # Bounds
///
/// [`retry_until_successful`](RetryConfig::retry_until_successful) makes
/// the loop ignore the retry budget; an always-failing operation is then
/// bounded only by [`timeout_after`](RetryConfig::timeout_after). With
/// neither bound the loop runs indefinitely; there is no built-in
/// circuit breaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    wait_between_retries: Duration,
    max_retries: u32,
    retry_forever: bool,
    total_timeout: Option<Duration>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            wait_between_retries: Duration::ZERO,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_forever: false,
            total_timeout: None,
        }
    }
}

impl RetryConfig {
    /// Create a policy with the structural defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy with an explicit wait interval and retry budget.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::RetryConfig;
    /// use std::time::Duration;
    ///
    /// let config = RetryConfig::fixed(Duration::from_millis(200), 10);
    /// assert_eq!(config.max_retries(), 10);
    /// ```
    pub fn fixed(wait: Duration, max_retries: u32) -> Self {
        Self::new().with_wait(wait).with_max_retries(max_retries)
    }

    #[cfg(feature = "serde")]
    pub(crate) fn from_parts(
        wait_between_retries: Duration,
        max_retries: u32,
        retry_forever: bool,
        total_timeout: Option<Duration>,
    ) -> Self {
        Self {
            wait_between_retries,
            max_retries,
            retry_forever,
            total_timeout,
        }
    }

    // ========== Fluent configuration ==========

    /// Set the wait between attempts.
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait_between_retries = wait;
        self
    }

    /// Set the wait between attempts in milliseconds.
    pub fn with_wait_ms(self, ms: u64) -> Self {
        self.with_wait(Duration::from_millis(ms))
    }

    /// Set the retry budget.
    ///
    /// This does not include the initial attempt: `with_max_retries(3)`
    /// means up to 4 total attempts, and `with_max_retries(0)` means
    /// exactly one attempt with no retries.
    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Retry until the operation succeeds, ignoring the retry budget.
    ///
    /// The loop is then bounded only by
    /// [`timeout_after`](RetryConfig::timeout_after), if set.
    pub fn retry_until_successful(mut self) -> Self {
        self.retry_forever = true;
        self
    }

    /// Set a total wall-clock timeout for the whole invocation.
    ///
    /// Once the deadline passes the loop stops retrying regardless of the
    /// remaining budget. The deadline is checked between attempts only, so
    /// an attempt already in flight runs to completion. A zero duration
    /// disables the timeout.
    pub fn timeout_after(mut self, timeout: Duration) -> Self {
        self.total_timeout = if timeout.is_zero() {
            None
        } else {
            Some(timeout)
        };
        self
    }

    // ========== Accessors ==========

    /// The wait between attempts.
    pub fn wait_between_retries(&self) -> Duration {
        self.wait_between_retries
    }

    /// The retry budget (retries after the initial attempt).
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Whether the loop ignores the retry budget.
    pub fn retry_forever(&self) -> bool {
        self.retry_forever
    }

    /// The total timeout, if enabled.
    pub fn total_timeout(&self) -> Option<Duration> {
        self.total_timeout
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RetryConfig::new();
        assert_eq!(config.wait_between_retries(), Duration::ZERO);
        assert_eq!(config.max_retries(), 3);
        assert!(!config.retry_forever());
        assert_eq!(config.total_timeout(), None);
    }

    #[test]
    fn test_fixed_constructor() {
        let config = RetryConfig::fixed(Duration::from_millis(200), 10);
        assert_eq!(config.wait_between_retries(), Duration::from_millis(200));
        assert_eq!(config.max_retries(), 10);
    }

    #[test]
    fn test_fluent_chain() {
        let config = RetryConfig::new()
            .with_wait_ms(1000)
            .with_max_retries(10)
            .retry_until_successful()
            .timeout_after(Duration::from_secs(5));

        assert_eq!(config.wait_between_retries(), Duration::from_secs(1));
        assert_eq!(config.max_retries(), 10);
        assert!(config.retry_forever());
        assert_eq!(config.total_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = RetryConfig::new()
            .timeout_after(Duration::from_secs(5))
            .timeout_after(Duration::ZERO);
        assert_eq!(config.total_timeout(), None);
    }

    #[test]
    fn test_zero_retries_is_allowed() {
        let config = RetryConfig::new().with_max_retries(0);
        assert_eq!(config.max_retries(), 0);
    }

    #[test]
    fn test_config_is_value_like() {
        let base = RetryConfig::new().with_max_retries(5);
        let derived = base.clone().retry_until_successful();

        // Deriving a new policy leaves the original untouched
        assert!(!base.retry_forever());
        assert!(derived.retry_forever());
        assert_eq!(base, base.clone());
    }
}
