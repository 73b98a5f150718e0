//! Union type - exactly one of two alternatives.
//!
//! By convention the left side carries a failure payload and the right side
//! carries a success payload. `map` and `chain` are right-biased.
//!
//! # Examples
//!
//! ```rust
//! use liftkit::control::{Union, of_left, of_right};
//!
//! fn find_record(id: u32) -> Union<String, &'static str> {
//!     match id {
//!         5 => of_right("Samson"),
//!         _ => of_left(format!("Record \"{id}\" could not be found")),
//!     }
//! }
//!
//! assert_eq!(find_record(5).map(str::to_uppercase), of_right("SAMSON".to_string()));
//! assert!(find_record(3).is_left());
//! ```

/// A value that is either a `Left(L)` or a `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Union<L, R> {
    /// The failure alternative.
    Left(L),
    /// The success alternative.
    Right(R),
}

/// Creates a left union.
#[inline]
pub const fn of_left<L, R>(value: L) -> Union<L, R> {
    Union::Left(value)
}

/// Creates a right union.
#[inline]
pub const fn of_right<L, R>(value: R) -> Union<L, R> {
    Union::Right(value)
}

impl<L, R> Union<L, R> {
    // =========================================================================
    // Construction and Inspection
    // =========================================================================

    /// Creates a left union.
    #[inline]
    pub const fn of_left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a right union.
    #[inline]
    pub const fn of_right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a right value; a left value passes through.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Union<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.chain(|value| Union::Right(function(value)))
    }

    /// Applies `function` to a left value; a right value passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::control::Union;
    ///
    /// let failed: Union<&str, i32> = Union::of_left("missing");
    /// assert_eq!(failed.map_left(str::len), Union::of_left(7));
    /// ```
    #[inline]
    pub fn map_left<U, F>(self, function: F) -> Union<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::Left(value) => Union::Left(function(value)),
            Self::Right(value) => Union::Right(value),
        }
    }

    /// Applies `function`, which returns a `Union`, to a right value.
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Union<L, U>
    where
        F: FnOnce(R) -> Union<L, U>,
    {
        match self {
            Self::Right(value) => function(value),
            Self::Left(value) => Union::Left(value),
        }
    }

    /// Calls `on_left` or `on_right` depending on the variant.
    #[inline]
    pub fn bimap<C, OnLeft, OnRight>(self, on_left: OnLeft, on_right: OnRight) -> C
    where
        OnLeft: FnOnce(L) -> C,
        OnRight: FnOnce(R) -> C,
    {
        match self {
            Self::Right(value) => on_right(value),
            Self::Left(value) => on_left(value),
        }
    }
}

impl<L, R, E> Union<L, Result<R, E>> {
    /// Moves a `Result` inside the right side to the outside.
    ///
    /// # Errors
    ///
    /// Returns the error carried by a right value.
    #[inline]
    pub fn transpose(self) -> Result<Union<L, R>, E> {
        match self {
            Self::Right(Ok(value)) => Ok(Union::Right(value)),
            Self::Right(Err(error)) => Err(error),
            Self::Left(value) => Ok(Union::Left(value)),
        }
    }
}

impl<R, L> From<Result<R, L>> for Union<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}
