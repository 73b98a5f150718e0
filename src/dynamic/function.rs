//! Shared functions over argument lists.

use std::fmt;
use std::sync::Arc;

use super::value::{Shape, Value};
use crate::error::{Error, Result};

type Body = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A cheaply clonable function from an argument list to a value.
///
/// Every callable that passes through dispatch or `lift` has this type. The
/// argument list is an ordinary slice, so an N-ary function and a unary one
/// differ only in how many elements they read.
#[derive(Clone)]
pub struct Function {
    name: Option<&'static str>,
    body: Arc<Body>,
}

impl Function {
    /// Wraps a function over the whole argument list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::dynamic::{ArgumentsExt, Function, Value};
    ///
    /// let add = Function::new(|arguments| Ok(Value::from(arguments.number(0)? + arguments.number(1)?)));
    /// assert_eq!(add.call(&[Value::from(2), Value::from(3)]), Ok(Value::from(5)));
    /// ```
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: None,
            body: Arc::new(body),
        }
    }

    /// Wraps a function of the first argument; a missing argument is `Null`.
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(move |arguments| body(arguments.value(0).clone()))
    }

    /// Attaches a name shown in `Debug` output and diagnostics.
    #[must_use]
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// The attached name, if any.
    #[inline]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Calls the function with an argument list.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped function produces.
    #[inline]
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        (self.body)(arguments)
    }

    /// Calls the function with a single argument.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped function produces.
    #[inline]
    pub fn call1(&self, argument: Value) -> Result<Value> {
        self.call(std::slice::from_ref(&argument))
    }

    /// Returns `true` if both handles share the same body.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(formatter, "Function({name})"),
            None => formatter.write_str("Function(<anonymous>)"),
        }
    }
}

static NULL: Value = Value::Null;

/// Typed access to an argument list.
pub trait ArgumentsExt {
    /// The argument at `index`, or `Null` when the list is shorter.
    fn value(&self, index: usize) -> &Value;

    /// The argument at `index` as a number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentType`] if the argument is not a number.
    fn number(&self, index: usize) -> Result<f64>;

    /// The argument at `index` as a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentType`] if the argument is not a string.
    fn string(&self, index: usize) -> Result<&str>;
}

impl ArgumentsExt for [Value] {
    fn value(&self, index: usize) -> &Value {
        self.get(index).unwrap_or(&NULL)
    }

    fn number(&self, index: usize) -> Result<f64> {
        let value = self.value(index);
        value.as_number().ok_or(Error::ArgumentType {
            index,
            expected: Shape::Number,
            found: value.shape(),
        })
    }

    fn string(&self, index: usize) -> Result<&str> {
        let value = self.value(index);
        value.as_str().ok_or(Error::ArgumentType {
            index,
            expected: Shape::Str,
            found: value.shape(),
        })
    }
}

/// Composes functions from right to left.
///
/// The rightmost function receives the full argument list; every other
/// function receives the single result of the one to its right. With no
/// functions the result is the identity over the first argument.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{ArgumentsExt, Function, Value, compose};
///
/// let add = Function::new(|arguments| Ok(Value::from(arguments.number(0)? + arguments.number(1)?)));
/// let double = Function::unary(|x| Ok(Value::from(x.as_number().unwrap_or(0.0) * 2.0)));
///
/// let double_sum = compose(vec![double, add]);
/// assert_eq!(double_sum.call(&[Value::from(1), Value::from(2)]), Ok(Value::from(6)));
/// ```
pub fn compose(functions: Vec<Function>) -> Function {
    let functions: Arc<[Function]> = functions.into();
    Function::new(move |arguments| {
        let Some((innermost, outer)) = functions.split_last() else {
            return Ok(arguments.value(0).clone());
        };
        outer
            .iter()
            .rev()
            .try_fold(innermost.call(arguments)?, |value, function| {
                function.call1(value)
            })
    })
}

/// Composes [`Function`]s from right to left.
///
/// `compose!(f, g, h)` is `compose(vec![f, g, h])`: `h` receives the argument
/// list and `f` produces the result.
///
/// # Examples
///
/// ```rust
/// use liftkit::compose;
/// use liftkit::dynamic::{Function, Value};
///
/// let increment = Function::unary(|x| Ok(Value::from(x.as_number().unwrap_or(0.0) + 1.0)));
/// let square = Function::unary(|x| {
///     let n = x.as_number().unwrap_or(0.0);
///     Ok(Value::from(n * n))
/// });
///
/// let composed = compose!(increment, square);
/// assert_eq!(composed.call1(Value::from(3)), Ok(Value::from(10)));
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::dynamic::compose(::std::vec::Vec::new())
    };
    ($($function:expr),+ $(,)?) => {
        $crate::dynamic::compose(::std::vec![$($function),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add_five() -> Function {
        Function::unary(|x| Ok(Value::from(x.as_number().unwrap_or(0.0) + 5.0)))
    }

    fn halve() -> Function {
        Function::unary(|x| Ok(Value::from(x.as_number().unwrap_or(0.0) / 2.0)))
    }

    #[rstest]
    fn unary_reads_first_argument() {
        let identity = Function::unary(Ok);
        assert_eq!(
            identity.call(&[Value::from(1), Value::from(2)]),
            Ok(Value::from(1))
        );
        assert_eq!(identity.call(&[]), Ok(Value::Null));
    }

    #[rstest]
    fn compose_applies_rightmost_first() {
        let composed = compose(vec![halve(), add_five()]);
        assert_eq!(composed.call1(Value::from(40)), Ok(Value::from(22.5)));
    }

    #[rstest]
    fn compose_of_nothing_is_identity() {
        let composed = compose(Vec::new());
        assert_eq!(composed.call1(Value::from("same")), Ok(Value::from("same")));
    }

    #[rstest]
    fn compose_stops_at_first_error() {
        let failing = Function::unary(|_| Err(Error::custom("boom")));
        let composed = compose(vec![add_five(), failing]);
        assert_eq!(composed.call1(Value::from(1)), Err(Error::custom("boom")));
    }

    #[rstest]
    fn compose_macro_matches_function() {
        let composed = crate::compose!(add_five(), halve());
        assert_eq!(composed.call1(Value::from(10)), Ok(Value::from(10)));
    }

    #[rstest]
    fn argument_type_errors_name_the_index() {
        let arguments = [Value::from(1), Value::from("x")];
        assert_eq!(arguments.number(0), Ok(1.0));
        assert_eq!(
            arguments.number(1),
            Err(Error::ArgumentType {
                index: 1,
                expected: Shape::Number,
                found: Shape::Str,
            })
        );
        assert_eq!(arguments.string(1), Ok("x"));
    }

    #[rstest]
    fn named_function_debug() {
        assert_eq!(format!("{:?}", halve().named("halve")), "Function(halve)");
    }
}
