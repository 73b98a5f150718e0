//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>` directly.
//! [`TypeConstructor`] names the constructor's current parameter and lets a
//! trait re-apply the constructor to another type, which is all `Functor`,
//! `Monad` and `Bimap` need from it.
//!
//! # Example
//!
//! ```rust
//! use liftkit::control::Optional;
//! use liftkit::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Optional<String> = reset(Optional::present(42));
//! assert!(absent.is_absent());
//! ```

use crate::control::{Optional, Union, Validation};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<L, R> TypeConstructor for Union<L, R> {
    type Inner = R;
    type WithType<B> = Union<L, B>;
}

impl<E, T> TypeConstructor for Validation<E, T> {
    type Inner = T;
    type WithType<B> = Validation<E, B>;
}
