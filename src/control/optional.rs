//! Optional type - presence or absence of a value.
//!
//! # Examples
//!
//! ```rust
//! use liftkit::control::{Optional, absent, present};
//!
//! fn halve_even(n: i32) -> Optional<i32> {
//!     if n % 2 == 0 { present(n / 2) } else { absent() }
//! }
//!
//! assert_eq!(present(120).chain(halve_even).chain(halve_even), present(30));
//! assert_eq!(present(7).chain(halve_even), absent());
//! ```

/// A value that is either present or absent.
///
/// An `Optional` never changes after construction: `map` and `chain` build
/// new instances and leave the receiver's payload alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    #[default]
    Absent,
    /// A value.
    Present(T),
}

/// Creates a present optional.
#[inline]
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Creates an absent optional.
#[inline]
pub const fn absent<T>() -> Optional<T> {
    Optional::Absent
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction and Inspection
    // =========================================================================

    /// Creates a present optional.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent optional.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::control::Optional;
    ///
    /// assert_eq!(Optional::present("hello").map(str::len), Optional::present(5));
    /// assert_eq!(Optional::<&str>::absent().map(str::len), Optional::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.chain(|value| Optional::Present(function(value)))
    }

    /// Applies `function`, which returns an `Optional`, to a present value.
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.bimap(Optional::absent, function)
    }

    /// Calls `on_present` with the value, or `on_absent` when there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::control::Optional;
    ///
    /// let greeting = Optional::present("Remy").bimap(|| "nobody".to_string(), |name| format!("hi {name}"));
    /// assert_eq!(greeting, "hi Remy");
    /// ```
    #[inline]
    pub fn bimap<C, OnAbsent, OnPresent>(self, on_absent: OnAbsent, on_present: OnPresent) -> C
    where
        OnAbsent: FnOnce() -> C,
        OnPresent: FnOnce(T) -> C,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }
}

impl<T, E> Optional<Result<T, E>> {
    /// Moves a `Result` inside the optional to the outside.
    ///
    /// # Errors
    ///
    /// Returns the error carried by a present value.
    #[inline]
    pub fn transpose(self) -> Result<Optional<T>, E> {
        match self {
            Self::Present(Ok(value)) => Ok(Optional::Present(value)),
            Self::Present(Err(error)) => Err(error),
            Self::Absent => Ok(Optional::Absent),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}
