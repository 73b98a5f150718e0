//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use liftkit::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! assert_eq!(Sum(1.5).combine(Sum(2.0)), Sum(3.5));
//!
//! // Maps merge key-wise; the right operand wins on overlap.
//! let left = BTreeMap::from([("x", 5), ("y", 10)]);
//! let right = BTreeMap::from([("y", 3)]);
//! assert_eq!(left.combine(right), BTreeMap::from([("x", 5), ("y", 3)]));
//! ```

use std::collections::BTreeMap;
use std::ops::Add;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::combine_all(words), Some(String::from("abc")));
    /// assert_eq!(String::combine_all(Vec::<String>::new()), None);
    /// ```
    fn combine_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<K: Ord, V> Semigroup for BTreeMap<K, V> {
    /// Right-biased merge: keys present in `other` replace those in `self`.
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// A wrapper that combines numbers by addition.
///
/// # Examples
///
/// ```rust
/// use liftkit::typeclass::{Semigroup, Sum};
///
/// let total = Sum::combine_all([Sum(1), Sum(2), Sum(3)]);
/// assert_eq!(total, Some(Sum(6)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Unwraps the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_ref_keeps_operands() {
        let a = String::from("Hello, ");
        let b = String::from("World!");
        assert_eq!(a.combine_ref(&b), "Hello, World!");
        assert_eq!(a, "Hello, ");
    }

    #[rstest]
    fn btreemap_combine_later_keys_win() {
        let a = BTreeMap::from([("x", 5), ("y", 10), ("z", 15)]);
        let b = BTreeMap::from([("w", 20)]);
        let c = BTreeMap::from([("y", 3)]);

        let merged = a.combine(b).combine(c);
        assert_eq!(
            merged,
            BTreeMap::from([("w", 20), ("x", 5), ("y", 3), ("z", 15)])
        );
    }

    #[rstest]
    #[case(vec![1], vec![2, 3], vec![4])]
    #[case(vec![], vec![], vec![9])]
    fn vec_combine_is_associative(
        #[case] a: Vec<i32>,
        #[case] b: Vec<i32>,
        #[case] c: Vec<i32>,
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[rstest]
    fn sum_combine_all_empty_is_none() {
        assert_eq!(Sum::<f64>::combine_all(Vec::new()), None);
    }
}
