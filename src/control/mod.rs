//! Algebraic container types.
//!
//! - [`Optional`]: presence or absence of a value
//! - [`Union`]: exactly one of a failure (left) or success (right) payload
//! - [`Validation`]: a success value or an accumulated list of errors
//! - [`LazyAsync`]: a deferred, callback-driven asynchronous value
//!
//! Every type is an immutable value: `map`, `chain` and friends build new
//! instances. The synchronous types implement the [`typeclass`](crate::typeclass)
//! traits; all four are understood by the generic dispatch in
//! [`dynamic`](crate::dynamic) and by the [`lift`](crate::lift) engine.
//!
//! # Examples
//!
//! ```rust
//! use liftkit::control::{fail, of_right, present, succeed, Union, Validation};
//!
//! assert_eq!(present("hello").map(str::to_uppercase), present("HELLO".to_string()));
//!
//! let record: Union<String, i32> = of_right(5);
//! assert_eq!(record.map(|n| n * 2).right(), Some(&10));
//!
//! let checked: Validation<&str, i32> = fail(["A"]);
//! assert_eq!(checked.chain(|_| fail::<&str, i32>(["B"])).errors(), ["A", "B"]);
//! assert!(succeed::<&str, i32>(1).is_success());
//! ```

mod lazy_async;
mod optional;
mod union;
mod validation;

pub use lazy_async::{LazyAsync, Resolver, lazy_async, resolved_async};
pub use optional::{Optional, absent, present};
pub use union::{Union, of_left, of_right};
pub use validation::{Validation, fail, succeed};
