//! The sequential lift: a right-to-left chain of continuations.

use std::sync::Arc;

use super::concurrent;
use crate::dynamic::{ArgumentsExt, Container, Function, Value, bimap, flat_map, map};
use crate::error::{Error, Result};

/// How the innermost argument is unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
    /// `map`: the function's result is re-wrapped.
    Map,
    /// `flat_map`: the function returns a container, which is flattened.
    FlatMap,
}

/// Adapts an N-ary function to wrapped arguments.
///
/// Every argument but the last is unwrapped with [`flat_map`] and the last
/// with [`map`], so the function only runs once every argument has produced a
/// value, and the result is in the shape of the arguments. A `Null` or absent
/// argument short-circuits the whole call.
///
/// When two or more arguments are lazy async values they are started
/// concurrently and the function runs once, after all of them resolve.
///
/// # Errors
///
/// The returned function fails with [`Error::NoArguments`] when called with
/// no arguments, and propagates errors from `function` and from dispatch.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{Function, Value, concat};
/// use liftkit::lift::lift;
///
/// let add = lift(Function::new(|arguments| concat(arguments.to_vec())));
///
/// assert_eq!(add.call(&[Value::from(10), Value::from(5)])?, Value::from(15));
/// assert_eq!(add.call(&[Value::present(1), Value::present(2)])?, Value::present(3));
/// assert_eq!(add.call(&[Value::present(1), Value::absent()])?, Value::absent());
/// assert_eq!(add.call(&[Value::from("a"), Value::Null])?, Value::Null);
/// # Ok::<(), liftkit::Error>(())
/// ```
pub fn lift(function: Function) -> Function {
    lifted(function, Mode::Map)
}

/// Monadic lift: like [`lift`], but `function` returns a container of the same
/// shape as the arguments and the result is flattened one level.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{Function, Value};
/// use liftkit::lift::lift_m;
///
/// let split = lift_m(Function::unary(|x| {
///     let text = x.as_str().unwrap_or_default();
///     Ok(Value::from(text.chars().collect::<Vec<_>>()))
/// }));
///
/// let letters = split.call1(Value::from(vec!["foo", "bar"]))?;
/// assert_eq!(letters, Value::from(vec!["f", "o", "o", "b", "a", "r"]));
/// # Ok::<(), liftkit::Error>(())
/// ```
pub fn lift_m(function: Function) -> Function {
    lifted(function, Mode::FlatMap)
}

fn lifted(function: Function, mode: Mode) -> Function {
    Function::new(move |arguments| {
        if arguments.is_empty() {
            return Err(Error::NoArguments);
        }
        if concurrent::is_concurrent(arguments) {
            tracing::debug!(arguments = arguments.len(), ?mode, "lifting concurrently");
            return Ok(concurrent::lift_concurrent(&function, mode, arguments));
        }

        tracing::debug!(arguments = arguments.len(), ?mode, "lifting sequentially");
        let arguments: Arc<[Value]> = arguments.into();
        unwrap_argument(&function, mode, &arguments, 0, &[])
    })
}

/// Unwraps `arguments[index]`, having already collected the values before it.
fn unwrap_argument(
    function: &Function,
    mode: Mode,
    arguments: &Arc<[Value]>,
    index: usize,
    collected: &[Value],
) -> Result<Value> {
    let argument = arguments.value(index).clone();
    let collected: Arc<[Value]> = collected.into();

    if index + 1 == arguments.len() {
        let function = function.clone();
        let step = Function::unary(move |value| {
            let mut values = collected.to_vec();
            values.push(value);
            function.call(&values)
        });
        return match mode {
            Mode::Map => map(&step, argument),
            Mode::FlatMap => flat_map(&step, argument),
        };
    }

    let function = function.clone();
    let arguments = Arc::clone(arguments);
    let next = Function::unary(move |value| {
        let mut values = collected.to_vec();
        values.push(value);
        unwrap_argument(&function, mode, &arguments, index + 1, &values)
    });
    flat_map(&next, argument)
}

/// A [`Container`] that can be built from an argument list.
pub trait Construct: Container + Sized {
    /// Builds the container.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments do not describe a valid value.
    fn construct(arguments: &[Value]) -> Result<Self>;
}

/// The construction function of `C`, producing [`Value::Custom`].
pub fn constructor<C: Construct>() -> Function {
    Function::new(|arguments| C::construct(arguments).map(Value::custom))
        .named(std::any::type_name::<C>())
}

/// Lifts the construction of `C` over wrapped arguments.
///
/// With validations as arguments, the errors of every failing argument are
/// accumulated in order.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{ArgumentsExt, Container, Value};
/// use liftkit::lift::{Construct, lift_constructor};
///
/// #[derive(Debug)]
/// struct Person {
///     first: String,
///     last: String,
/// }
///
/// impl Container for Person {}
///
/// impl Construct for Person {
///     fn construct(arguments: &[Value]) -> liftkit::Result<Self> {
///         Ok(Self {
///             first: arguments.string(0)?.to_string(),
///             last: arguments.string(1)?.to_string(),
///         })
///     }
/// }
///
/// let person = lift_constructor::<Person>();
/// let both_invalid = person.call(&[Value::fail(["first"]), Value::fail(["last"])])?;
/// assert_eq!(both_invalid, Value::fail(["first", "last"]));
///
/// let Value::Validation(valid) = person.call(&[Value::succeed("Remy"), Value::succeed("Doe")])? else {
///     unreachable!()
/// };
/// let built = valid.value().and_then(Value::downcast_ref::<Person>);
/// assert_eq!(built.map(|person| person.last.as_str()), Some("Doe"));
/// # Ok::<(), liftkit::Error>(())
/// ```
pub fn lift_constructor<C: Construct>() -> Function {
    lift(constructor::<C>())
}

/// Lifts a pair of case handlers over a single argument.
///
/// `Null`, or a missing argument, calls `on_error` with no arguments. Any other
/// value is eliminated with [`bimap`].
///
/// # Errors
///
/// The returned function fails with
/// [`Error::MissingCapability`](crate::Error::MissingCapability) for a value
/// that has no cases.
pub fn lift_bimap(on_error: Function, on_success: Function) -> Function {
    Function::new(move |arguments| match arguments.value(0) {
        Value::Null => on_error.call(&[]),
        value => bimap(&on_error, &on_success, value.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::concat;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn add() -> Function {
        Function::new(|arguments| concat(arguments.to_vec()))
    }

    #[rstest]
    fn lift_without_arguments_fails() {
        assert_eq!(lift(add()).call(&[]), Err(Error::NoArguments));
    }

    #[rstest]
    fn lift_over_sequences_is_cartesian() {
        let result = lift(add()).call(&[Value::from(vec![1, 2]), Value::from(vec![3, 4])]);
        assert_eq!(result, Ok(Value::from(vec![4, 5, 5, 6])));
    }

    #[rstest]
    #[case(Value::absent(), Value::present(2))]
    #[case(Value::present(1), Value::absent())]
    fn lift_over_optionals_short_circuits(#[case] first: Value, #[case] second: Value) {
        assert_eq!(lift(add()).call(&[first, second]), Ok(Value::absent()));
    }

    #[rstest]
    fn lift_over_unions_keeps_first_left() {
        let result = lift(add()).call(&[Value::left("first"), Value::left("second")]);
        assert_eq!(result, Ok(Value::left("first")));
    }

    #[rstest]
    fn lift_single_argument_maps() {
        let result = lift(add()).call(&[Value::right("a")]);
        assert_eq!(result, Ok(Value::right("a")));
    }

    #[rstest]
    fn lift_m_flattens_inner_result() {
        let wrap = lift_m(Function::new(|arguments| Ok(Value::present(concat(arguments.to_vec())?))));
        let result = wrap.call(&[Value::present(1), Value::present(2)]);
        assert_eq!(result, Ok(Value::present(3)));
    }

    #[rstest]
    fn lift_calls_function_once_per_combination() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = lift(Function::new(move |arguments| {
            counter.fetch_add(1, Ordering::SeqCst);
            concat(arguments.to_vec())
        }));
        let _ = counted.call(&[Value::present(1), Value::present(2), Value::present(3)]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn lift_bimap_handles_null_and_cases() {
        let on_error = Function::new(|_| Ok(Value::from("error")));
        let on_success = Function::unary(|x| concat(vec![Value::from("ok "), x]));
        let handle = lift_bimap(on_error, on_success);

        assert_eq!(handle.call(&[Value::Null]), Ok(Value::from("error")));
        assert_eq!(handle.call(&[]), Ok(Value::from("error")));
        assert_eq!(handle.call(&[Value::absent()]), Ok(Value::from("error")));
        assert_eq!(handle.call(&[Value::right("Samson")]), Ok(Value::from("ok Samson")));
        assert!(matches!(
            handle.call(&[Value::from(1)]),
            Err(Error::MissingCapability { .. })
        ));
    }
}
