//! Bimap type class - eliminating a two-case container.
//!
//! `bimap(on_a, on_b)` collapses a container with a "failure" case and a
//! "success" case into a single value by calling exactly one handler.
//! Unlike a structure-preserving bifunctor, the result is whatever the
//! handlers return.
//!
//! | Type | `on_a` receives | `on_b` receives |
//! |---|---|---|
//! | `Optional<T>` | `()` (absent) | `T` |
//! | `Union<L, R>` | `L` | `R` |
//! | `Validation<E, T>` | `Vec<E>` | `T` |
//!
//! # Examples
//!
//! ```rust
//! use liftkit::control::Union;
//! use liftkit::typeclass::Bimap;
//!
//! let found: Union<String, &str> = Union::of_right("Samson");
//! let message = found.bimap(|error| format!("err {error}"), |name| format!("ok {name}"));
//! assert_eq!(message, "ok Samson");
//! ```

use super::higher::TypeConstructor;
use crate::control::{Optional, Union, Validation};

/// A type class for two-case containers that can be eliminated.
pub trait Bimap: TypeConstructor {
    /// The payload of the failure case.
    type Other;

    /// Calls `on_a` with the failure payload or `on_b` with the success payload.
    fn bimap<C, OnA, OnB>(self, on_a: OnA, on_b: OnB) -> C
    where
        OnA: FnOnce(Self::Other) -> C,
        OnB: FnOnce(Self::Inner) -> C;
}

impl<A> Bimap for Optional<A> {
    type Other = ();

    #[inline]
    fn bimap<C, OnA, OnB>(self, on_a: OnA, on_b: OnB) -> C
    where
        OnA: FnOnce(()) -> C,
        OnB: FnOnce(A) -> C,
    {
        match self {
            Self::Present(value) => on_b(value),
            Self::Absent => on_a(()),
        }
    }
}

impl<L, R> Bimap for Union<L, R> {
    type Other = L;

    #[inline]
    fn bimap<C, OnA, OnB>(self, on_a: OnA, on_b: OnB) -> C
    where
        OnA: FnOnce(L) -> C,
        OnB: FnOnce(R) -> C,
    {
        match self {
            Self::Right(value) => on_b(value),
            Self::Left(value) => on_a(value),
        }
    }
}

impl<E, T> Bimap for Validation<E, T> {
    type Other = Vec<E>;

    #[inline]
    fn bimap<C, OnA, OnB>(self, on_a: OnA, on_b: OnB) -> C
    where
        OnA: FnOnce(Vec<E>) -> C,
        OnB: FnOnce(T) -> C,
    {
        match self {
            Self::Success(value) => on_b(value),
            Self::Failure(errors) => on_a(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_bimap_absent_calls_on_a() {
        let value: Optional<i32> = Optional::absent();
        assert_eq!(Bimap::bimap(value, |()| -1, |n| n * 2), -1);
    }

    #[rstest]
    fn optional_bimap_present_calls_on_b() {
        assert_eq!(Bimap::bimap(Optional::present(21), |()| -1, |n| n * 2), 42);
    }

    #[rstest]
    fn validation_bimap_failure_receives_all_errors() {
        let value: Validation<&str, i32> = Validation::fail(["a", "b"]);
        let joined = Bimap::bimap(value, |errors: Vec<&str>| errors.join(","), |n| n.to_string());
        assert_eq!(joined, "a,b");
    }
}
