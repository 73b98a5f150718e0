//! Type class traits shared by the algebraic types.
//!
//! - [`Functor`]: Mapping over the success side of a container
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative binary operations, used by `concat`
//! - [`Bimap`]: Eliminating a two-case container with one handler per case
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT,
//! so the traits above can be stated once for `Optional`, `Union` and
//! `Validation`.
//!
//! # Examples
//!
//! ```rust
//! use liftkit::control::{Optional, Validation};
//! use liftkit::typeclass::{Bimap, Functor, Monad};
//!
//! let shouted = Optional::present("hello").fmap(str::to_uppercase);
//! assert_eq!(shouted, Optional::present("HELLO".to_string()));
//!
//! let halved = Optional::present(8).flat_map(|n| Optional::present(n / 2));
//! assert_eq!(halved, Optional::present(4));
//!
//! let checked: Validation<&str, i32> = Validation::fail(["too short"]);
//! assert_eq!(checked.bimap(|errors| errors.len(), |_| 0), 1);
//! ```

mod bimap;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use bimap::Bimap;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::{Semigroup, Sum};
