//! The concurrent lift over lazy async arguments.
//!
//! Chaining lazy async values one after another would wait for each before
//! starting the next. When at least two arguments are lazy, every argument is
//! instead started through [`LazyAsync::join_all`], and the lifted function
//! runs once with the values in argument order.

use super::engine::Mode;
use crate::control::LazyAsync;
use crate::dynamic::{Function, Value, settle, settle_lazy};

/// Returns `true` when at least two arguments are lazy async values.
pub(super) fn is_concurrent(arguments: &[Value]) -> bool {
    arguments
        .iter()
        .filter(|argument| matches!(argument, Value::Async(_)))
        .nth(1)
        .is_some()
}

/// Joins every argument and applies `function` to the joined values.
///
/// Arguments that are not lazy take part as already-resolved values. A
/// `Null` argument short-circuits to `Null` before anything is started.
pub(super) fn lift_concurrent(function: &Function, mode: Mode, arguments: &[Value]) -> Value {
    if arguments.iter().any(Value::is_null) {
        tracing::debug!(arguments = arguments.len(), "missing argument, skipping join");
        return Value::Null;
    }

    let branches = arguments
        .iter()
        .cloned()
        .map(|argument| match argument {
            Value::Async(lazy) => lazy,
            resolved => LazyAsync::resolved(resolved),
        })
        .collect();
    let joined = LazyAsync::join_all(branches);

    let function = function.clone();
    let lazy = match mode {
        Mode::Map => joined.map(move |values| settle(function.call(&values))),
        Mode::FlatMap => joined.chain(move |values| settle_lazy(function.call(&values))),
    };
    Value::Async(lazy)
}
