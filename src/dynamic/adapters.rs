//! Per-shape implementations of the dispatch operations.
//!
//! Each adapter handles exactly one [`Value`] variant; choosing between them is
//! [`dispatch`](super::dispatch)'s job.

use std::collections::BTreeMap;

use super::function::{Function, compose};
use super::value::{Shape, Value};
use crate::control::{LazyAsync, Optional, Union, Validation};
use crate::error::{Error, Result};
use crate::typeclass::{Bimap, Functor, Semigroup, Sum};

// =============================================================================
// Lazy async failure encoding
// =============================================================================

/// Turns a continuation error into a resolvable value.
///
/// A resolver has no error channel, so a failure becomes `Left(message)`.
pub(crate) fn settle(result: Result<Value>) -> Value {
    result.unwrap_or_else(|error| {
        tracing::warn!(%error, "continuation failed inside a lazy async value");
        Value::left(error.to_string())
    })
}

/// Like [`settle`], for continuations that may return another lazy value.
pub(crate) fn settle_lazy(result: Result<Value>) -> LazyAsync<Value> {
    match result {
        Ok(Value::Async(next)) => next,
        other => LazyAsync::resolved(settle(other)),
    }
}

// =============================================================================
// Algebraic types
// =============================================================================

pub(super) fn map_optional(function: &Function, optional: Optional<Value>) -> Result<Value> {
    let mapped = optional.fmap(|value| function.call1(value)).transpose()?;
    Ok(mapped.into())
}

pub(super) fn map_union(function: &Function, union: Union<Value, Value>) -> Result<Value> {
    let mapped = union.fmap(|value| function.call1(value)).transpose()?;
    Ok(mapped.into())
}

pub(super) fn map_validation(
    function: &Function,
    validation: Validation<Value, Value>,
) -> Result<Value> {
    let mapped = validation.fmap(|value| function.call1(value)).transpose()?;
    Ok(mapped.into())
}

/// The continuation's result is returned as is; it is not re-wrapped.
pub(super) fn flat_map_optional(function: &Function, optional: Optional<Value>) -> Result<Value> {
    Bimap::bimap(optional, |()| Ok(Value::absent()), |value| function.call1(value))
}

pub(super) fn flat_map_union(function: &Function, union: Union<Value, Value>) -> Result<Value> {
    Bimap::bimap(union, |left| Ok(Value::left(left)), |right| function.call1(right))
}

/// Accumulating sequence.
///
/// A failure still runs the continuation, with `Null`, so that a failing
/// continuation can add its own errors. Any other outcome keeps the original
/// failure.
pub(super) fn flat_map_validation(
    function: &Function,
    validation: Validation<Value, Value>,
) -> Result<Value> {
    match validation {
        Validation::Success(value) => function.call1(value),
        Validation::Failure(errors) => {
            let failure: Validation<Value, Value> = Validation::Failure(errors);
            match function.call1(Value::Null) {
                Ok(Value::Validation(next)) => Ok(failure.chain(|_| *next).into()),
                Ok(other) => {
                    tracing::debug!(shape = %other.shape(), "continuation of a failed validation returned a non-validation");
                    Ok(failure.into())
                }
                Err(error) => {
                    tracing::debug!(%error, "continuation of a failed validation failed");
                    Ok(failure.into())
                }
            }
        }
    }
}

pub(super) fn map_async(function: &Function, lazy: &LazyAsync<Value>) -> Value {
    let function = function.clone();
    Value::Async(lazy.map(move |value| settle(function.call1(value))))
}

pub(super) fn flat_map_async(function: &Function, lazy: &LazyAsync<Value>) -> Value {
    let function = function.clone();
    Value::Async(lazy.chain(move |value| settle_lazy(function.call1(value))))
}

// =============================================================================
// Sequences
// =============================================================================

pub(super) fn map_seq(function: &Function, items: Vec<Value>) -> Result<Value> {
    items
        .into_iter()
        .map(|item| function.call1(item))
        .collect::<Result<Vec<_>>>()
        .map(Value::Seq)
}

/// Sequence results are spliced in; any other result is appended as one element.
pub(super) fn flat_map_seq(function: &Function, items: Vec<Value>) -> Result<Value> {
    let mut flattened = Vec::with_capacity(items.len());
    for item in items {
        match function.call1(item)? {
            Value::Seq(inner) => flattened.extend(inner),
            other => flattened.push(other),
        }
    }
    Ok(Value::Seq(flattened))
}

pub(super) fn fold_seq(function: &Function, init: Value, items: &[Value]) -> Result<Value> {
    items
        .iter()
        .try_fold(init, |accumulator, item| function.call(&[accumulator, item.clone()]))
}

// =============================================================================
// Mappings
// =============================================================================

pub(super) fn map_mapping(
    function: &Function,
    entries: BTreeMap<String, Value>,
) -> Result<Value> {
    entries
        .into_iter()
        .map(|(key, value)| Ok((key, function.call1(value)?)))
        .collect::<Result<BTreeMap<_, _>>>()
        .map(Value::Map)
}

/// Each value must map to a mapping; the results are merged key-wise.
pub(super) fn flat_map_mapping(
    function: &Function,
    entries: BTreeMap<String, Value>,
) -> Result<Value> {
    let mut merged = BTreeMap::new();
    for value in entries.into_values() {
        match function.call1(value)? {
            Value::Map(produced) => merged = merged.combine(produced),
            other => {
                return Err(Error::ShapeMismatch {
                    operation: "flat_map",
                    expected: Shape::Map,
                    found: other.shape(),
                });
            }
        }
    }
    Ok(Value::Map(merged))
}

pub(super) fn fold_mapping(
    function: &Function,
    init: Value,
    entries: &BTreeMap<String, Value>,
) -> Result<Value> {
    entries
        .values()
        .try_fold(init, |accumulator, value| function.call(&[accumulator, value.clone()]))
}

// =============================================================================
// Functions
// =============================================================================

pub(super) fn map_function(function: &Function, inner: Function) -> Value {
    Value::Function(compose(vec![function.clone(), inner]))
}

/// Reader-style sequencing: `arguments -> reader(arguments ++ [function(arguments)])`.
pub(super) fn flat_map_function(function: &Function, reader: Function) -> Value {
    let function = function.clone();
    Value::Function(Function::new(move |arguments| {
        let produced = function.call(arguments)?;
        let mut extended = Vec::with_capacity(arguments.len() + 1);
        extended.extend_from_slice(arguments);
        extended.push(produced);
        reader.call(&extended)
    }))
}

// =============================================================================
// Concatenation
// =============================================================================

fn mixed(expected: Shape, found: &Value) -> Error {
    Error::MixedConcat {
        expected,
        found: found.shape(),
    }
}

pub(super) fn concat_seq(first: Vec<Value>, rest: Vec<Value>) -> Result<Value> {
    rest.into_iter()
        .try_fold(first, |accumulator, operand| match operand {
            Value::Seq(items) => Ok(accumulator.combine(items)),
            other => Err(mixed(Shape::Seq, &other)),
        })
        .map(Value::Seq)
}

pub(super) fn concat_str(first: String, rest: Vec<Value>) -> Result<Value> {
    rest.into_iter()
        .try_fold(first, |accumulator, operand| match operand {
            Value::Str(string) => Ok(accumulator.combine(string)),
            other => Err(mixed(Shape::Str, &other)),
        })
        .map(Value::Str)
}

pub(super) fn concat_number(first: f64, rest: Vec<Value>) -> Result<Value> {
    rest.into_iter()
        .try_fold(Sum(first), |accumulator, operand| match operand {
            Value::Number(number) => Ok(accumulator.combine(Sum(number))),
            other => Err(mixed(Shape::Number, &other)),
        })
        .map(|total| Value::Number(total.into_inner()))
}

/// Later operands override earlier keys; no operand is modified.
pub(super) fn concat_mapping(
    first: BTreeMap<String, Value>,
    rest: Vec<Value>,
) -> Result<Value> {
    rest.into_iter()
        .try_fold(first, |accumulator, operand| match operand {
            Value::Map(entries) => Ok(accumulator.combine(entries)),
            other => Err(mixed(Shape::Map, &other)),
        })
        .map(Value::Map)
}

/// `concat(f, g, h)` runs `f` first: the result is `h ∘ g ∘ f`.
pub(super) fn concat_function(first: Function, rest: Vec<Value>) -> Result<Value> {
    let mut functions = Vec::with_capacity(rest.len() + 1);
    functions.push(first);
    for operand in rest {
        match operand {
            Value::Function(function) => functions.push(function),
            other => return Err(mixed(Shape::Function, &other)),
        }
    }
    functions.reverse();
    Ok(Value::Function(compose(functions)))
}
