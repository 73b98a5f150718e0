//! Lifting ordinary functions over wrapped arguments.
//!
//! [`lift`] turns `f(a, b, ..)` into a function over containers of `a`, `b`,
//! ... by unwrapping the arguments from right to left with the generic
//! dispatch of [`dynamic`](crate::dynamic). The container decides what
//! "unwrapping" means:
//!
//! | arguments | result |
//! |---|---|
//! | sequences | every combination, flattened |
//! | optionals | absent if any argument is absent |
//! | unions | the first left |
//! | validations | the errors of every failing argument |
//! | two or more lazy async values | all started at once, then `f` once |
//! | any `Null` beside them | `Null`, nothing started |

mod concurrent;
mod engine;

pub use engine::{Construct, constructor, lift, lift_bimap, lift_constructor, lift_m};
