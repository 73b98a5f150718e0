//! Generic dispatch: `map`, `flat_map`, `fold`, `concat`, `bimap`, `fork`.
//!
//! Every entry point resolves in the same order:
//!
//! 1. `Null` passes through (`map` and `flat_map` only).
//! 2. A value's own capability wins: the algebraic types, lazy async values
//!    and custom containers that list the capability.
//! 3. The structural adapter for the value's shape.
//! 4. For `map` and `flat_map`, the function is applied to the value itself.
//!
//! `fold` and `concat` have no fallback and reject unsupported shapes.

use super::adapters;
use super::capability::{Capability, Container};
use super::function::Function;
use super::value::{Shape, Value};
use crate::error::{Error, Result};
use crate::typeclass::Bimap;

fn missing(capability: Capability, value: &Value) -> Error {
    Error::MissingCapability {
        capability,
        shape: value.shape(),
    }
}

/// Applies `function` inside `container`, preserving its shape.
///
/// # Errors
///
/// Propagates errors returned by `function`. An unrecognised shape is not an
/// error: `function` is applied to the value directly.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{Function, Value, map};
///
/// let increment = Function::unary(|x| Ok(Value::from(x.as_number().unwrap_or(0.0) + 1.0)));
///
/// assert_eq!(map(&increment, Value::from(vec![1, 2]))?, Value::from(vec![2, 3]));
/// assert_eq!(map(&increment, Value::present(1))?, Value::present(2));
/// assert_eq!(map(&increment, Value::absent())?, Value::absent());
/// assert_eq!(map(&increment, Value::from(41))?, Value::from(42));
/// # Ok::<(), liftkit::Error>(())
/// ```
pub fn map(function: &Function, container: Value) -> Result<Value> {
    tracing::trace!(shape = %container.shape(), "map");
    match container {
        Value::Null => Ok(Value::Null),
        Value::Optional(optional) => adapters::map_optional(function, *optional),
        Value::Union(union) => adapters::map_union(function, *union),
        Value::Validation(validation) => adapters::map_validation(function, *validation),
        Value::Async(lazy) => Ok(adapters::map_async(function, &lazy)),
        Value::Custom(container) => map_custom(function, &*container)
            .unwrap_or_else(|| function.call1(Value::Custom(container))),
        Value::Seq(items) => adapters::map_seq(function, items),
        Value::Function(inner) => Ok(adapters::map_function(function, inner)),
        Value::Map(entries) => adapters::map_mapping(function, entries),
        primitive @ (Value::Bool(_) | Value::Number(_) | Value::Str(_)) => function.call1(primitive),
    }
}

fn map_custom(function: &Function, container: &dyn Container) -> Option<Result<Value>> {
    let capabilities = container.capabilities();
    if capabilities.contains(&Capability::Fmap) {
        Some(container.fmap(function))
    } else if capabilities.contains(&Capability::Then) {
        Some(container.then(function))
    } else {
        None
    }
}

/// Applies a container-returning `function` and flattens one level.
///
/// # Errors
///
/// Propagates errors returned by `function`, and returns
/// [`Error::ShapeMismatch`] when a mapping's continuation does not return a
/// mapping.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{Function, Value, flat_map};
///
/// let split = Function::unary(|x| {
///     let text = x.as_str().unwrap_or_default();
///     Ok(Value::from(text.chars().collect::<Vec<_>>()))
/// });
///
/// let letters = flat_map(&split, Value::from(vec!["ab", "c"]))?;
/// assert_eq!(letters, Value::from(vec!["a", "b", "c"]));
/// # Ok::<(), liftkit::Error>(())
/// ```
pub fn flat_map(function: &Function, container: Value) -> Result<Value> {
    tracing::trace!(shape = %container.shape(), "flat_map");
    match container {
        Value::Null => Ok(Value::Null),
        Value::Optional(optional) => adapters::flat_map_optional(function, *optional),
        Value::Union(union) => adapters::flat_map_union(function, *union),
        Value::Validation(validation) => adapters::flat_map_validation(function, *validation),
        Value::Async(lazy) => Ok(adapters::flat_map_async(function, &lazy)),
        Value::Custom(container) => flat_map_custom(function, &*container)
            .unwrap_or_else(|| function.call1(Value::Custom(container))),
        Value::Seq(items) => adapters::flat_map_seq(function, items),
        Value::Function(reader) => Ok(adapters::flat_map_function(function, reader)),
        Value::Map(entries) => adapters::flat_map_mapping(function, entries),
        primitive @ (Value::Bool(_) | Value::Number(_) | Value::Str(_)) => function.call1(primitive),
    }
}

fn flat_map_custom(function: &Function, container: &dyn Container) -> Option<Result<Value>> {
    let capabilities = container.capabilities();
    if capabilities.contains(&Capability::FlatMap) {
        Some(container.flat_map(function))
    } else if capabilities.contains(&Capability::Chain) {
        Some(container.chain(function))
    } else if capabilities.contains(&Capability::Then) {
        Some(container.then(function))
    } else {
        None
    }
}

/// Left-folds `function` over the elements of `container`, starting at `init`.
///
/// `function` receives `[accumulator, element]`. Mappings are folded over their
/// values in key order.
///
/// # Errors
///
/// Returns [`Error::NotFoldable`] for shapes without elements, and propagates
/// errors returned by `function`.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{ArgumentsExt, Function, Value, fold};
///
/// let add = Function::new(|arguments| Ok(Value::from(arguments.number(0)? + arguments.number(1)?)));
/// assert_eq!(fold(&add, Value::from(0), &Value::from(vec![1, 2, 3, 4]))?, Value::from(10));
/// # Ok::<(), liftkit::Error>(())
/// ```
pub fn fold(function: &Function, init: Value, container: &Value) -> Result<Value> {
    tracing::trace!(shape = %container.shape(), "fold");
    match container {
        Value::Seq(items) => adapters::fold_seq(function, init, items),
        Value::Map(entries) => adapters::fold_mapping(function, init, entries),
        Value::Custom(custom) if custom.capabilities().contains(&Capability::Fold) => {
            custom.fold(function, init)
        }
        other => Err(Error::NotFoldable {
            shape: other.shape(),
        }),
    }
}

/// Combines operands that share the first operand's shape.
///
/// | first operand | combination |
/// |---|---|
/// | custom with `concat` | its own `concat`, pairwise left to right |
/// | sequence | concatenation |
/// | string | concatenation |
/// | number | sum |
/// | mapping | key-wise merge, later keys win |
/// | function | backward composition: `concat(f, g)(x) == g(f(x))` |
///
/// A single concatenable operand is returned unchanged.
///
/// # Errors
///
/// - [`Error::EmptyConcat`] without operands.
/// - [`Error::NotConcatenable`] if the first operand's shape has no combination.
/// - [`Error::MixedConcat`] if a later operand has a different shape.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{Value, concat};
///
/// assert_eq!(concat(vec![Value::from(1), Value::from(2), Value::from(3)])?, Value::from(6));
/// assert_eq!(
///     concat(vec![Value::from("Hello"), Value::from(" "), Value::from("World")])?,
///     Value::from("Hello World")
/// );
/// # Ok::<(), liftkit::Error>(())
/// ```
pub fn concat(operands: Vec<Value>) -> Result<Value> {
    let mut operands = operands.into_iter();
    let Some(first) = operands.next() else {
        return Err(Error::EmptyConcat);
    };
    let rest: Vec<Value> = operands.collect();
    tracing::trace!(shape = %first.shape(), operands = rest.len() + 1, "concat");

    match first {
        Value::Custom(container) if container.capabilities().contains(&Capability::Concat) => {
            let expected = Shape::Custom(container.type_name());
            rest.iter().try_fold(Value::Custom(container), |accumulator, operand| {
                match accumulator {
                    Value::Custom(custom) => custom.concat(operand),
                    other => Err(Error::MixedConcat {
                        expected,
                        found: other.shape(),
                    }),
                }
            })
        }
        Value::Seq(items) => adapters::concat_seq(items, rest),
        Value::Str(string) => adapters::concat_str(string, rest),
        Value::Number(number) => adapters::concat_number(number, rest),
        Value::Map(entries) => adapters::concat_mapping(entries, rest),
        Value::Function(function) => adapters::concat_function(function, rest),
        other => Err(Error::NotConcatenable {
            shape: other.shape(),
        }),
    }
}

/// [`concat`] over the elements of a sequence.
///
/// # Errors
///
/// Returns [`Error::ArgumentType`] if `operands` is not a sequence, and any
/// error [`concat`] reports.
pub fn mconcat(operands: Value) -> Result<Value> {
    match operands {
        Value::Seq(items) => concat(items),
        other => Err(Error::ArgumentType {
            index: 0,
            expected: Shape::Seq,
            found: other.shape(),
        }),
    }
}

/// Case elimination: calls exactly one of the handlers.
///
/// | value | handler |
/// |---|---|
/// | absent optional | `on_a()` |
/// | present optional | `on_b(value)` |
/// | left union | `on_a(left)` |
/// | right union | `on_b(right)` |
/// | failed validation | `on_a([errors...])` |
/// | successful validation | `on_b(value)` |
/// | custom with `bimap` | its own `bimap` |
///
/// # Errors
///
/// Returns [`Error::MissingCapability`] for any other value, and propagates
/// errors returned by the handler.
pub fn bimap(on_a: &Function, on_b: &Function, value: Value) -> Result<Value> {
    tracing::trace!(shape = %value.shape(), "bimap");
    match value {
        Value::Optional(optional) => {
            Bimap::bimap(*optional, |()| on_a.call(&[]), |present| on_b.call1(present))
        }
        Value::Union(union) => Bimap::bimap(*union, |left| on_a.call1(left), |right| on_b.call1(right)),
        Value::Validation(validation) => Bimap::bimap(
            *validation,
            |errors| on_a.call1(Value::Seq(errors)),
            |success| on_b.call1(success),
        ),
        Value::Custom(container) if container.capabilities().contains(&Capability::Bimap) => {
            container.bimap(on_a, on_b)
        }
        other => Err(missing(Capability::Bimap, &other)),
    }
}

/// Starts a lazy async value (or a custom container with `fork`), delivering
/// its value to `handler`.
///
/// The handler's own result has nowhere to go; an error is logged.
///
/// # Errors
///
/// Returns [`Error::MissingCapability`] for values that cannot be started.
pub fn fork(value: &Value, handler: Function) -> Result<()> {
    tracing::trace!(shape = %value.shape(), "fork");
    match value {
        Value::Async(lazy) => {
            lazy.fork(move |resolved| {
                if let Err(error) = handler.call1(resolved) {
                    tracing::error!(%error, "fork handler failed");
                }
            });
            Ok(())
        }
        Value::Custom(container) if container.capabilities().contains(&Capability::Fork) => {
            container.fork(handler)
        }
        other => Err(missing(Capability::Fork, other)),
    }
}
