//! An optional value with explicit, visible unwrapping.
//!
//! [`Maybe<T>`] is the outcome model's presence/absence counterpart:
//! `Some` always holds a present value, `None` is a stateless marker.
//! Unlike `std::option::Option` its [`map`](Maybe::map) is a structural
//! visitor (the function receives the whole `Maybe` and is responsible
//! for branching), and extraction is always an explicit call, never an
//! implicit conversion.

use crate::outcome::AccessError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// Constructed by producers, consumed by pattern matching or
/// [`map`](Maybe::map); never mutated.
///
/// # Example
///
/// ```rust
/// use steadfast::Maybe;
///
/// fn lookup(id: u32) -> Maybe<&'static str> {
///     if id == 1 {
///         Maybe::some("alice")
///     } else {
///         Maybe::none()
///     }
/// }
///
/// assert_eq!(lookup(1).unwrap(), "alice");
/// assert!(lookup(2).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// The absence of a value.
    None,
}

impl<T> Maybe<T> {
    /// Create a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// Create an absent value.
    #[inline]
    pub fn none() -> Self {
        Maybe::None
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Apply a function to the whole `Maybe` and return its output.
    ///
    /// This is a structural visitor, not a safe unwrap: the function is
    /// always invoked, `None` included, and the continuation does the
    /// branching.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steadfast::Maybe;
    ///
    /// let label = Maybe::some(3).map(|m| match m {
    ///     Maybe::Some(n) => format!("got {}", n),
    ///     Maybe::None => "nothing".to_string(),
    /// });
    /// assert_eq!(label, "got 3");
    ///
    /// let label = Maybe::<i32>::none().map(|m| match m {
    ///     Maybe::Some(n) => format!("got {}", n),
    ///     Maybe::None => "nothing".to_string(),
    /// });
    /// assert_eq!(label, "nothing");
    /// ```
    pub fn map<U, F>(self, f: F) -> U
    where
        F: FnOnce(Maybe<T>) -> U,
    {
        f(self)
    }

    /// Extract the value.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent. Use [`try_value`](Maybe::try_value)
    /// to capture the mismatch instead.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Extract the value, or a default when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    /// Extract the value, or describe the absence.
    pub fn try_value(self) -> Result<T, AccessError> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(AccessError::new("a present value", "none")),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

#[cfg(test)]
mod maybe_tests {
    use super::*;

    #[test]
    fn test_discriminants() {
        assert!(Maybe::some(1).is_some());
        assert!(!Maybe::some(1).is_none());
        assert!(Maybe::<i32>::none().is_none());
    }

    #[test]
    fn test_map_visits_some_and_none() {
        let on_some = Maybe::some(2).map(|m| match m {
            Maybe::Some(n) => n * 10,
            Maybe::None => -1,
        });
        assert_eq!(on_some, 20);

        let on_none = Maybe::<i32>::none().map(|m| match m {
            Maybe::Some(n) => n * 10,
            Maybe::None => -1,
        });
        assert_eq!(on_none, -1);
    }

    #[test]
    fn test_map_always_invokes_the_function() {
        let mut calls = 0;
        Maybe::<i32>::none().map(|_| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_unwrap_some() {
        assert_eq!(Maybe::some("v").unwrap(), "v");
    }

    #[test]
    #[should_panic(expected = "`Maybe::unwrap()`")]
    fn test_unwrap_none_panics() {
        Maybe::<i32>::none().unwrap();
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(Maybe::some(1).unwrap_or(9), 1);
        assert_eq!(Maybe::<i32>::none().unwrap_or(9), 9);
    }

    #[test]
    fn test_try_value() {
        assert_eq!(Maybe::some(5).try_value().unwrap(), 5);
        let access = Maybe::<i32>::none().try_value().unwrap_err();
        assert_eq!(access.found(), "none");
    }

    #[test]
    fn test_option_round_trip() {
        let maybe: Maybe<i32> = Some(3).into();
        assert_eq!(maybe, Maybe::Some(3));

        let option: Option<i32> = Maybe::some(3).into();
        assert_eq!(option, Some(3));

        let absent: Maybe<i32> = None.into();
        assert!(absent.is_none());
    }
}
