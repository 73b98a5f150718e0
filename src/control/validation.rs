//! Validation type - a success value or an accumulated sequence of errors.
//!
//! `Validation` differs from [`Union`](super::Union) in how it sequences:
//! chaining two failures concatenates their error lists instead of stopping
//! at the first one.
//!
//! # Examples
//!
//! ```rust
//! use liftkit::control::{Validation, fail, succeed};
//!
//! fn has_length(name: &str, min: usize, value: &str) -> Validation<String, String> {
//!     if value.len() > min {
//!         succeed(value.to_string())
//!     } else {
//!         fail([format!("\"{name}\" must have length > {min}")])
//!     }
//! }
//!
//! let first = has_length("First", 5, "Remy");
//! let last = has_length("Last", 2, "D");
//! let both = first.zip(last);
//! assert_eq!(
//!     both.errors(),
//!     ["\"First\" must have length > 5", "\"Last\" must have length > 2"]
//! );
//! ```

use crate::typeclass::Semigroup;

/// Either a success value or the errors that prevented one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, T> {
    /// A validated value.
    Success(T),
    /// The accumulated errors.
    Failure(Vec<E>),
}

/// Creates a successful validation.
#[inline]
pub const fn succeed<E, T>(value: T) -> Validation<E, T> {
    Validation::Success(value)
}

/// Creates a failed validation from a sequence of errors.
#[inline]
pub fn fail<E, T>(errors: impl IntoIterator<Item = E>) -> Validation<E, T> {
    Validation::Failure(errors.into_iter().collect())
}

impl<E, T> Validation<E, T> {
    // =========================================================================
    // Construction and Inspection
    // =========================================================================

    /// Creates a successful validation.
    #[inline]
    pub const fn succeed(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed validation from a sequence of errors.
    #[inline]
    pub fn fail(errors: impl IntoIterator<Item = E>) -> Self {
        Self::Failure(errors.into_iter().collect())
    }

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the accumulated errors; empty for a success.
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors,
        }
    }

    /// Returns a reference to the value of a success.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a success value; a failure passes through.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Sequences `function` after `self`, accumulating errors from both.
    ///
    /// The continuation always runs: with `Some(value)` for a success and
    /// `None` for a failure, so that the errors it produces can still be
    /// collected.
    ///
    /// | `self` | `function(..)` | result |
    /// |---|---|---|
    /// | success | any | `function(Some(value))` |
    /// | failure | success | `self` |
    /// | failure | failure | errors of `self` followed by errors of the continuation |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::control::{Validation, fail};
    ///
    /// let first: Validation<&str, i32> = fail(["A"]);
    /// let merged = first.chain(|_| fail::<&str, i32>(["B"]));
    /// assert_eq!(merged, fail(["A", "B"]));
    /// ```
    pub fn chain<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(Option<T>) -> Validation<E, U>,
    {
        match self {
            Self::Success(value) => function(Some(value)),
            Self::Failure(errors) => match function(None) {
                Validation::Success(_) => Validation::Failure(errors),
                Validation::Failure(more) => Validation::Failure(errors.combine(more)),
            },
        }
    }

    /// Short-circuiting sequence: a failure skips `function` entirely.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Pairs two validations, accumulating the errors of both.
    pub fn zip<U>(self, other: Validation<E, U>) -> Validation<E, (T, U)> {
        match (self, other) {
            (Self::Success(left), Validation::Success(right)) => Validation::Success((left, right)),
            (Self::Success(_), Validation::Failure(errors))
            | (Self::Failure(errors), Validation::Success(_)) => Validation::Failure(errors),
            (Self::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
        }
    }

    /// Calls `on_failure` with the errors or `on_success` with the value.
    #[inline]
    pub fn bimap<C, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> C
    where
        OnFailure: FnOnce(Vec<E>) -> C,
        OnSuccess: FnOnce(T) -> C,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }
}

impl<E, T, X> Validation<E, Result<T, X>> {
    /// Moves a `Result` inside a success to the outside.
    ///
    /// # Errors
    ///
    /// Returns the error carried by a success value.
    #[inline]
    pub fn transpose(self) -> Result<Validation<E, T>, X> {
        match self {
            Self::Success(Ok(value)) => Ok(Validation::Success(value)),
            Self::Success(Err(error)) => Err(error),
            Self::Failure(errors) => Ok(Validation::Failure(errors)),
        }
    }
}

impl<E, T> From<Result<T, E>> for Validation<E, T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(vec![error]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn chain_success_returns_continuation() {
        let value: Validation<&str, i32> = succeed(2);
        let result = value.chain(|n| match n {
            Some(n) => succeed(n * 2),
            None => fail(["unreachable"]),
        });
        assert_eq!(result, succeed(4));
    }

    #[rstest]
    fn chain_success_into_failure() {
        let value: Validation<&str, i32> = succeed(2);
        let result = value.chain(|_| fail::<&str, i32>(["B"]));
        assert_eq!(result, fail(["B"]));
    }

    #[rstest]
    fn chain_failure_then_success_keeps_self() {
        let value: Validation<&str, i32> = fail(["A"]);
        let result = value.chain(|_| succeed::<&str, i32>(1));
        assert_eq!(result, fail(["A"]));
    }

    #[rstest]
    fn chain_failure_runs_continuation_without_value() {
        let value: Validation<&str, i32> = fail(["A"]);
        let mut seen = Some(0);
        let _ = value.chain(|n| {
            seen = n;
            succeed::<&str, i32>(0)
        });
        assert_eq!(seen, None);
    }

    #[rstest]
    fn and_then_failure_skips_continuation() {
        let value: Validation<&str, i32> = fail(["A"]);
        assert_eq!(value.and_then(|_| fail::<&str, i32>(["B"])), fail(["A"]));
    }

    #[rstest]
    fn zip_two_successes() {
        let left: Validation<&str, i32> = succeed(1);
        assert_eq!(left.zip(succeed("x")), succeed((1, "x")));
    }

    #[rstest]
    fn success_has_no_errors() {
        let value: Validation<&str, i32> = succeed(1);
        assert!(value.errors().is_empty());
    }
}
