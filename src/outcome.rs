//! The Outcome sum type: a fallible operation's disposition as a value.
//!
//! # Outcome vs Result
//!
//! [`Outcome<T>`] stands in for a function's result without throwing or
//! propagating: the caller receives a `Ok`/`Void`/`Err` value and decides
//! what to do with it. Unlike `Result` it has a dedicated `Void` variant
//! for operations that succeed without producing a value, so one type
//! covers both value-returning and unit operations.
//!
//! Use `Outcome` when:
//! - A failure is data to inspect, not an early return
//! - You want to chain fallible steps with [`and_then`](Outcome::and_then)
//!   and have the first fault flow through untouched
//! - One call site handles both void and value-producing operations
//!
//! Use `Result` when you want `?` and the std ecosystem; [`Outcome`]
//! converts from and into it freely.
//!
//! # Examples
//!
//! ```rust
//! use steadfast::{Fault, Outcome};
//!
//! fn parse(s: &str) -> Outcome<i32> {
//!     Outcome::capture(|| s.parse::<i32>())
//! }
//!
//! // Chain steps; the first fault short-circuits the rest
//! let doubled = parse("21").and_then(|n| Outcome::ok(n * 2));
//! assert_eq!(doubled.try_value().unwrap(), 42);
//!
//! let failed = parse("oops").and_then(|n| Outcome::ok(n * 2));
//! assert!(failed.is_err());
//! ```

use crate::fault::Fault;
use std::error::Error;
use std::fmt;

/// A completed operation's disposition: a value, a void success, or a fault.
///
/// Exactly one variant holds at any time and values are immutable once
/// constructed. `Ok` and `Void` are both success-shaped
/// ([`is_ok`](Outcome::is_ok) is true for either); only `Void` is
/// [`is_void`](Outcome::is_void).
///
/// # Example
///
/// ```rust
/// use steadfast::{Fault, Outcome};
///
/// let ok: Outcome<i32> = Outcome::ok(5);
/// let err: Outcome<i32> = Outcome::err(Fault::msg("boom"));
///
/// assert!(ok.is_ok());
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// A successful operation carrying its value.
    Ok(T),
    /// A successful operation with no value to carry.
    Void,
    /// A failed operation carrying the captured fault.
    Err(Fault),
}

/// Error produced by extracting the wrong variant out of an [`Outcome`]
/// or [`Maybe`](crate::Maybe).
///
/// The safe extractors ([`Outcome::try_value`], [`Outcome::try_fault`])
/// return this instead of panicking; the unwrapping extractors panic with
/// its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError {
    expected: &'static str,
    found: &'static str,
}

impl AccessError {
    pub(crate) fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }

    /// What the extraction was looking for.
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// What the value actually was.
    pub fn found(&self) -> &'static str {
        self.found
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl Error for AccessError {}

impl<T> Outcome<T> {
    // ========== Constructors ==========

    /// Create a success carrying a value.
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Create a void success.
    #[inline]
    pub fn void() -> Self {
        Outcome::Void
    }

    /// Create a failure from a fault (or anything convertible into one).
    #[inline]
    pub fn err(fault: impl Into<Fault>) -> Self {
        Outcome::Err(fault.into())
    }

    /// Run a fallible closure and wrap its disposition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::Outcome;
    ///
    /// let ok = Outcome::capture(|| "42".parse::<i32>());
    /// assert_eq!(ok.try_value().unwrap(), 42);
    ///
    /// let err = Outcome::capture(|| "nope".parse::<i32>());
    /// assert!(err.is_err());
    /// ```
    pub fn capture<E, F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Fault>,
    {
        match f() {
            Ok(value) => Outcome::Ok(value),
            Err(e) => Outcome::Err(e.into()),
        }
    }

    /// Run a fallible unit closure and wrap its disposition as `Void`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::{Fault, Outcome};
    ///
    /// let done: Outcome<()> = Outcome::capture_void(|| Ok::<_, Fault>(()));
    /// assert!(done.is_void());
    /// ```
    pub fn capture_void<E, F>(f: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<Fault>,
    {
        match f() {
            Ok(()) => Outcome::Void,
            Err(e) => Outcome::Err(e.into()),
        }
    }

    // ========== Discriminants ==========

    /// Returns `true` for either success shape (`Ok` or `Void`).
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_) | Outcome::Void)
    }

    /// Returns `true` if this is a fault.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns `true` if this is a valueless success.
    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Outcome::Void)
    }

    fn describe(&self) -> &'static str {
        match self {
            Outcome::Ok(_) => "a success value",
            Outcome::Void => "a void success",
            Outcome::Err(_) => "a fault",
        }
    }

    // ========== Safe extraction ==========

    /// Extract the success value, or describe why there isn't one.
    ///
    /// Exactly one side of the returned `Result` is ever populated: the
    /// value on `Ok`, the capture of the mismatch on anything else.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::{Fault, Outcome};
    ///
    /// assert_eq!(Outcome::ok(7).try_value().unwrap(), 7);
    ///
    /// let err: Outcome<i32> = Outcome::err(Fault::msg("down"));
    /// let access = err.try_value().unwrap_err();
    /// assert_eq!(access.found(), "a fault");
    /// ```
    pub fn try_value(self) -> Result<T, AccessError> {
        let found = self.describe();
        match self {
            Outcome::Ok(value) => Ok(value),
            _ => Err(AccessError::new("a success value", found)),
        }
    }

    /// Extract the fault, or describe why there isn't one.
    pub fn try_fault(self) -> Result<Fault, AccessError> {
        let found = self.describe();
        match self {
            Outcome::Err(fault) => Ok(fault),
            _ => Err(AccessError::new("a fault", found)),
        }
    }

    // ========== Unwrapping extraction ==========

    /// Extract the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Ok`, the value-level analogue of an
    /// invalid cast. Use [`try_value`](Outcome::try_value) to capture the
    /// mismatch instead.
    #[track_caller]
    pub fn unwrap_value(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            other => panic!(
                "called `Outcome::unwrap_value()` on {}",
                other.describe()
            ),
        }
    }

    /// Extract the fault.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Err`. Use
    /// [`try_fault`](Outcome::try_fault) to capture the mismatch instead.
    #[track_caller]
    pub fn unwrap_fault(self) -> Fault {
        match self {
            Outcome::Err(fault) => fault,
            other => panic!(
                "called `Outcome::unwrap_fault()` on {}",
                other.describe()
            ),
        }
    }

    /// The success value as an `Option`, discarding any fault.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// The fault as an `Option`, discarding any value.
    #[inline]
    pub fn fault(self) -> Option<Fault> {
        match self {
            Outcome::Err(fault) => Some(fault),
            _ => None,
        }
    }

    /// A reference to the success value, if any.
    #[inline]
    pub fn value_ref(&self) -> Option<&T> {
        match self {
            Outcome::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// A reference to the fault, if any.
    #[inline]
    pub fn fault_ref(&self) -> Option<&Fault> {
        match self {
            Outcome::Err(fault) => Some(fault),
            _ => None,
        }
    }

    // ========== Chaining ==========

    /// Chain a continuation over the success value.
    ///
    /// On `Ok(v)` runs `f(v)` and returns its outcome. On `Err` the fault
    /// flows through untouched and `f` is never invoked. On `Void` the
    /// success passes through as `Void`, since there is no value to hand
    /// over; use [`then`](Outcome::then) to continue after a void success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::{Fault, Outcome};
    ///
    /// fn half(n: i32) -> Outcome<i32> {
    ///     if n % 2 == 0 {
    ///         Outcome::ok(n / 2)
    ///     } else {
    ///         Outcome::err(Fault::new("odd", format!("{} is odd", n)))
    ///     }
    /// }
    ///
    /// let out = Outcome::ok(20).and_then(half).and_then(half);
    /// assert_eq!(out.try_value().unwrap(), 5);
    ///
    /// // 5 is odd: the fault from the third step short-circuits a fourth
    /// let out = Outcome::ok(20).and_then(half).and_then(half).and_then(half);
    /// assert_eq!(out.unwrap_fault().kind(), "odd");
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Void => Outcome::Void,
            Outcome::Err(fault) => Outcome::Err(fault),
        }
    }

    /// Chain a value-free continuation after any success shape.
    ///
    /// Runs `f` on `Ok` (discarding the value) or `Void`; short-circuits
    /// on `Err` without invoking `f`.
    pub fn then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce() -> Outcome<U>,
    {
        match self {
            Outcome::Ok(_) | Outcome::Void => f(),
            Outcome::Err(fault) => Outcome::Err(fault),
        }
    }

    /// Transform the success value, leaving `Void` and faults untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Void => Outcome::Void,
            Outcome::Err(fault) => Outcome::Err(fault),
        }
    }

    /// Collapse the outcome into a single value.
    ///
    /// The success handler receives `Some(value)` for `Ok` and `None` for
    /// `Void`; the fault handler receives the captured fault.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::{Fault, Outcome};
    ///
    /// let label = Outcome::ok(3).fold(
    ///     |v| format!("got {:?}", v),
    ///     |fault| format!("failed: {}", fault),
    /// );
    /// assert_eq!(label, "got Some(3)");
    /// ```
    pub fn fold<U, S, F>(self, success_fn: S, fault_fn: F) -> U
    where
        S: FnOnce(Option<T>) -> U,
        F: FnOnce(Fault) -> U,
    {
        match self {
            Outcome::Ok(value) => success_fn(Some(value)),
            Outcome::Void => success_fn(None),
            Outcome::Err(fault) => fault_fn(fault),
        }
    }
}

impl<T, E: Into<Fault>> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(e) => Outcome::Err(e.into()),
        }
    }
}
