//! # liftkit
//!
//! Polymorphic `map`, `flat_map`, `fold` and `concat` over heterogeneous
//! containers, a `lift` that adapts ordinary functions to wrapped arguments,
//! and the small algebraic types both are built around.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Monad`, `Semigroup`, `Bimap` over typed containers
//! - **Control Structures**: `Optional`, `Union`, `Validation`, `LazyAsync`
//! - **Dynamic Dispatch**: `Value`, capability probing, and the generic operations
//! - **Lift**: `lift`, `lift_m`, `lift_constructor`, `lift_bimap`
//!
//! ## Feature Flags
//!
//! - `async` (default): tokio adapters for `LazyAsync` (`from_future`, `delayed`, `run`)
//! - `serde`: `Serialize`/`Deserialize` for `Optional`, `Union` and `Validation`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use liftkit::prelude::*;
//!
//! let add = lift(Function::new(|arguments| concat(arguments.to_vec())));
//!
//! let sums = add.call(&[Value::from(vec![1, 2]), Value::from(vec![3, 4])])?;
//! assert_eq!(sums, Value::from(vec![4, 5, 5, 6]));
//!
//! let greeting = add.call(&[Value::present("Hello, "), Value::present("World")])?;
//! assert_eq!(greeting, Value::present("Hello, World"));
//! # Ok::<(), liftkit::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use liftkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::typeclass::*;

    pub use crate::control::*;

    pub use crate::dynamic::*;

    pub use crate::lift::*;

    pub use crate::error::{Error, Result};
}

pub mod control;
pub mod dynamic;
pub mod error;
pub mod lift;
pub mod typeclass;

pub use error::{Error, Result};
