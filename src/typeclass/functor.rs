//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use liftkit::control::{Optional, Union};
//! use liftkit::typeclass::Functor;
//!
//! let present = Optional::present(5).fmap(|n| n.to_string());
//! assert_eq!(present, Optional::present("5".to_string()));
//!
//! let failed: Union<&str, i32> = Union::of_left("missing");
//! assert_eq!(failed.fmap(|n| n + 1), Union::of_left("missing"));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Optional, Union, Validation};

/// A type class for types that can have a function mapped over their contents.
///
/// `fmap` only ever touches the success side of a container; absence, left
/// values and accumulated errors pass through untouched.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::control::Optional;
    /// use liftkit::typeclass::Functor;
    ///
    /// assert_eq!(Optional::present(5).fmap(|n| n * 2), Optional::present(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::control::Optional;
    /// use liftkit::typeclass::Functor;
    ///
    /// assert_eq!(Optional::present(5).replace("replaced"), Optional::present("replaced"));
    /// assert_eq!(Optional::<i32>::absent().replace("replaced"), Optional::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<L, R> Functor for Union<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Union<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }
}

impl<E, T> Functor for Validation<E, T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}
