//! Shape-driven dispatch over heterogeneous containers.
//!
//! A [`Value`] is one of a closed set of shapes: primitives, sequences,
//! mappings, functions, the algebraic types from [`control`](crate::control)
//! and user-defined [`Container`]s. The dispatch functions pick an
//! implementation per call:
//!
//! - [`map`] and [`flat_map`]: a value's own capability, then the shape
//!   adapter, then applying the function to the value itself.
//! - [`fold`] and [`concat`]: the shape adapter or a custom implementation;
//!   anything else is an [`Error`](crate::Error).
//!
//! # Examples
//!
//! ```rust
//! use liftkit::dynamic::{Function, Value, concat, map};
//!
//! let halve = Function::unary(|x| Ok(Value::from(x.as_number().unwrap_or(0.0) / 2.0)));
//! let add_five = Function::unary(|x| Ok(Value::from(x.as_number().unwrap_or(0.0) + 5.0)));
//!
//! let pipeline = concat(vec![
//!     Value::Function(halve.clone()),
//!     Value::Function(halve),
//!     Value::Function(add_five),
//! ])?;
//! let Value::Function(pipeline) = pipeline else { unreachable!() };
//! assert_eq!(pipeline.call1(Value::from(40))?, Value::from(15));
//!
//! let doubled = map(&Function::unary(|x| concat(vec![x.clone(), x])), Value::from(vec!["a", "b"]))?;
//! assert_eq!(doubled, Value::from(vec!["aa", "bb"]));
//! # Ok::<(), liftkit::Error>(())
//! ```

mod adapters;
mod capability;
mod dispatch;
mod function;
mod value;

pub(crate) use adapters::{settle, settle_lazy};
pub use capability::{Capability, Container, capabilities_of, has_capability, has_capability_named};
pub use dispatch::{bimap, concat, flat_map, fold, fork, map, mconcat};
pub use function::{ArgumentsExt, Function, compose};
pub use value::{Shape, Value};
