//! The captured-failure value used throughout the crate.
//!
//! A [`Fault`] is an opaque record of something that went wrong: a short
//! kind tag, a human-readable message, and (when the fault was converted
//! from a concrete error type) the boxed source error. Faults are what the
//! retry engine stores in its report and what [`Outcome::Err`](crate::Outcome)
//! carries, replacing a thrown-exception channel with a plain value.
//!
//! # Examples
//!
//! ```rust
//! use steadfast::Fault;
//!
//! // Ad-hoc fault with an explicit kind
//! let fault = Fault::new("parse", "expected a number");
//! assert_eq!(fault.kind(), "parse");
//!
//! // Converted from any std error; the concrete type stays recoverable
//! let parse_err = "abc".parse::<i32>().unwrap_err();
//! let fault = Fault::from(parse_err);
//! assert!(fault.is::<std::num::ParseIntError>());
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// An opaque captured failure: a kind tag, a message, and an optional
/// boxed source error.
///
/// `Fault` is cheap to clone (the source is shared) and deliberately does
/// **not** implement [`std::error::Error`] itself, so that any error type
/// can convert into it via the blanket `From` impl, the same trade-off
/// `anyhow::Error` makes.
///
/// # Example
///
/// ```rust
/// use steadfast::Fault;
///
/// fn divide(x: i32, y: i32) -> Result<i32, Fault> {
///     if y == 0 {
///         Err(Fault::new("divide_by_zero", "attempt to divide by zero"))
///     } else {
///         Ok(x / y)
///     }
/// }
///
/// let fault = divide(2, 0).unwrap_err();
/// assert_eq!(fault.kind(), "divide_by_zero");
/// assert_eq!(fault.to_string(), "divide_by_zero: attempt to divide by zero");
/// ```
#[derive(Debug, Clone)]
pub struct Fault {
    kind: &'static str,
    message: String,
    source: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl Fault {
    /// Create a fault with an explicit kind tag and message.
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a fault from a bare message, with the generic `"fault"` kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::Fault;
    ///
    /// let fault = Fault::msg("connection refused");
    /// assert_eq!(fault.kind(), "fault");
    /// ```
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new("fault", message)
    }

    /// The short tag naming this fault's class.
    ///
    /// For faults converted from an error type this is the unqualified
    /// type name (e.g. `"ParseIntError"`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The captured source error, if this fault was converted from one.
    pub fn source(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Returns `true` if the source error is of type `E`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::Fault;
    /// use std::num::ParseIntError;
    ///
    /// let fault = Fault::from("x".parse::<i32>().unwrap_err());
    /// assert!(fault.is::<ParseIntError>());
    /// assert!(!fault.is::<std::io::Error>());
    /// ```
    pub fn is<E: Error + 'static>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }

    /// Narrow the source error back to its concrete type.
    ///
    /// Covers the typed-error access of the outcome model: a fault tagged
    /// with error-kind `E` yields `Some(&E)`, anything else `None`.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.source.as_deref().and_then(|s| s.downcast_ref::<E>())
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl<E: Error + Send + Sync + 'static> From<E> for Fault {
    fn from(error: E) -> Self {
        Self {
            kind: short_type_name::<E>(),
            message: error.to_string(),
            source: Some(Arc::new(error)),
        }
    }
}

/// Last path segment of a type name: `core::num::ParseIntError` -> `ParseIntError`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod fault_tests {
    use super::*;
    use std::num::ParseIntError;

    fn parse_fault() -> Fault {
        Fault::from("not a number".parse::<i32>().unwrap_err())
    }

    #[test]
    fn test_new_sets_kind_and_message() {
        let fault = Fault::new("timeout", "deadline exceeded");
        assert_eq!(fault.kind(), "timeout");
        assert_eq!(fault.message(), "deadline exceeded");
        assert!(fault.source().is_none());
    }

    #[test]
    fn test_msg_uses_generic_kind() {
        let fault = Fault::msg("boom");
        assert_eq!(fault.kind(), "fault");
    }

    #[test]
    fn test_from_error_captures_source() {
        let fault = parse_fault();
        assert_eq!(fault.kind(), "ParseIntError");
        assert!(fault.source().is_some());
    }

    #[test]
    fn test_downcast_recovers_concrete_type() {
        let fault = parse_fault();
        assert!(fault.is::<ParseIntError>());
        assert!(fault.downcast_ref::<ParseIntError>().is_some());
        assert!(fault.downcast_ref::<std::io::Error>().is_none());
    }

    #[test]
    fn test_downcast_on_ad_hoc_fault_is_none() {
        let fault = Fault::new("custom", "no source here");
        assert!(!fault.is::<ParseIntError>());
    }

    #[test]
    fn test_display_includes_kind() {
        let fault = Fault::new("io", "file missing");
        assert_eq!(format!("{}", fault), "io: file missing");
    }

    #[test]
    fn test_clone_shares_source() {
        let fault = parse_fault();
        let cloned = fault.clone();
        assert!(cloned.is::<ParseIntError>());
        assert_eq!(cloned.message(), fault.message());
    }

    #[test]
    fn test_short_type_name_trims_path() {
        assert_eq!(short_type_name::<ParseIntError>(), "ParseIntError");
    }
}
