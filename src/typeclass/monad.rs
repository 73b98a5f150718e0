//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Optional::present(a).flat_map(f) == f(a)
//! Union::of_right(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Optional::present) == m
//! u.flat_map(Union::of_right) == u
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use liftkit::control::Optional;
//! use liftkit::typeclass::Monad;
//!
//! fn halve_even(n: i32) -> Optional<i32> {
//!     if n % 2 == 0 { Optional::present(n / 2) } else { Optional::absent() }
//! }
//!
//! let result = Optional::present(120).flat_map(halve_even).flat_map(halve_even);
//! assert_eq!(result, Optional::present(30));
//! ```
//!
//! `Validation` has no instance: its `chain` accumulates errors from both
//! sides, which requires running the continuation even when there is no
//! value to hand it.

use super::functor::Functor;
use crate::control::{Optional, Union};

/// A type class for types that support sequencing of computations.
pub trait Monad: Functor {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::control::Optional;
    /// use liftkit::typeclass::Monad;
    ///
    /// assert_eq!(Optional::present(5).then(Optional::present("hello")), Optional::present("hello"));
    /// assert_eq!(Optional::<i32>::absent().then(Optional::present("hello")), Optional::absent());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::chain(self, function)
    }
}

impl<L, R> Monad for Union<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Union<L, B>
    where
        F: FnOnce(R) -> Union<L, B>,
    {
        Self::chain(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn find_record(id: u32) -> Union<String, &'static str> {
        match id {
            1 => Union::of_right("Remy"),
            2 => Union::of_right("Billy"),
            5 => Union::of_right("Samson"),
            _ => Union::of_left(format!("Record \"{id}\" could not be found")),
        }
    }

    #[rstest]
    fn union_flat_map_right() {
        let value: Union<String, u32> = Union::of_right(5);
        assert_eq!(value.flat_map(find_record), Union::of_right("Samson"));
    }

    #[rstest]
    fn union_flat_map_left_short_circuits() {
        let value: Union<String, u32> = Union::of_left("upstream".to_string());
        assert_eq!(
            value.flat_map(find_record),
            Union::of_left("upstream".to_string())
        );
    }

    #[rstest]
    fn union_flat_map_into_left() {
        let value: Union<String, u32> = Union::of_right(3);
        assert_eq!(
            value.flat_map(find_record),
            Union::of_left("Record \"3\" could not be found".to_string())
        );
    }

    /// Left identity: of_right(a).flat_map(f) == f(a)
    #[rstest]
    #[case(1)]
    #[case(4)]
    fn union_left_identity_law(#[case] id: u32) {
        let unit: Union<String, u32> = Union::of_right(id);
        assert_eq!(unit.flat_map(find_record), find_record(id));
    }

    /// Right identity: m.flat_map(present) == m
    #[rstest]
    #[case(Optional::present(7))]
    #[case(Optional::absent())]
    fn optional_right_identity_law(#[case] m: Optional<i32>) {
        assert_eq!(m.flat_map(Optional::present), m);
    }

    /// Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[rstest]
    fn optional_associativity_law() {
        let f = |n: i32| Optional::present(n + 1);
        let g = |n: i32| {
            if n > 2 {
                Optional::present(n * 10)
            } else {
                Optional::absent()
            }
        };

        let left = Optional::present(2).flat_map(f).flat_map(g);
        let right = Optional::present(2).flat_map(|x| f(x).flat_map(g));
        assert_eq!(left, right);
        assert_eq!(left, Optional::present(30));
    }
}
