//! The closed set of container shapes understood by dispatch.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::capability::Container;
use super::function::Function;
use crate::control::{LazyAsync, Optional, Union, Validation};

/// A dynamically shaped value.
///
/// Each variant is one case of the generic dispatch: `map`, `flat_map`, `fold`
/// and `concat` select their behaviour with a single match over `Value`.
/// Argument lists are plain `&[Value]` slices and have no variant of their own.
///
/// Equality is structural for data and by identity for functions, lazy async
/// values and custom containers.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence. `map` and `flat_map` pass it through unchanged.
    #[default]
    Null,
    /// A boolean primitive.
    Bool(bool),
    /// A numeric primitive.
    Number(f64),
    /// A string primitive.
    Str(String),
    /// An ordered sequence.
    Seq(Vec<Value>),
    /// A plain key-value mapping.
    Map(BTreeMap<String, Value>),
    /// A function over argument lists; a reader-style container.
    Function(Function),
    /// An [`Optional`] value.
    Optional(Box<Optional<Value>>),
    /// A [`Union`] value.
    Union(Box<Union<Value, Value>>),
    /// A [`Validation`] value.
    Validation(Box<Validation<Value, Value>>),
    /// A [`LazyAsync`] value.
    Async(LazyAsync<Value>),
    /// A user-defined container.
    Custom(Arc<dyn Container>),
}

static_assertions::assert_impl_all!(Value: Send, Sync);

/// The shape of a [`Value`], used in errors and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Number`]
    Number,
    /// [`Value::Str`]
    Str,
    /// [`Value::Seq`]
    Seq,
    /// [`Value::Map`]
    Map,
    /// [`Value::Function`]
    Function,
    /// [`Value::Optional`]
    Optional,
    /// [`Value::Union`]
    Union,
    /// [`Value::Validation`]
    Validation,
    /// [`Value::Async`]
    Async,
    /// [`Value::Custom`], with the container's type name.
    Custom(&'static str),
}

impl Shape {
    /// Returns the shape of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::Str(_) => Self::Str,
            Value::Seq(_) => Self::Seq,
            Value::Map(_) => Self::Map,
            Value::Function(_) => Self::Function,
            Value::Optional(_) => Self::Optional,
            Value::Union(_) => Self::Union,
            Value::Validation(_) => Self::Validation,
            Value::Async(_) => Self::Async,
            Value::Custom(container) => Self::Custom(container.type_name()),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::Str => "string",
            Self::Seq => "sequence",
            Self::Map => "mapping",
            Self::Function => "function",
            Self::Optional => "optional",
            Self::Union => "union",
            Self::Validation => "validation",
            Self::Async => "lazy-async",
            Self::Custom(name) => *name,
        };
        formatter.write_str(name)
    }
}

impl Value {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present optional.
    pub fn present(value: impl Into<Self>) -> Self {
        Self::Optional(Box::new(Optional::present(value.into())))
    }

    /// An absent optional.
    pub fn absent() -> Self {
        Self::Optional(Box::new(Optional::absent()))
    }

    /// Wraps a left (failure) union.
    pub fn left(value: impl Into<Self>) -> Self {
        Self::Union(Box::new(Union::of_left(value.into())))
    }

    /// Wraps a right (success) union.
    pub fn right(value: impl Into<Self>) -> Self {
        Self::Union(Box::new(Union::of_right(value.into())))
    }

    /// Wraps a successful validation.
    pub fn succeed(value: impl Into<Self>) -> Self {
        Self::Validation(Box::new(Validation::succeed(value.into())))
    }

    /// Wraps a failed validation.
    pub fn fail<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Validation(Box::new(Validation::fail(errors.into_iter().map(Into::into))))
    }

    /// Wraps a user-defined container.
    pub fn custom<C: Container>(container: C) -> Self {
        Self::Custom(Arc::new(container))
    }

    /// Builds a mapping from key-value pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::dynamic::Value;
    ///
    /// let point = Value::mapping([("x", 1), ("y", 2)]);
    /// assert_eq!(point.get("y"), Some(&Value::from(2)));
    /// ```
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the shape of this value.
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::of(self)
    }

    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the number, if this is one.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(string) => Some(string),
            _ => None,
        }
    }

    /// Returns the sequence elements, if this is a sequence.
    #[inline]
    pub fn as_seq(&self) -> Option<&[Self]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a key in a mapping.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Returns the custom container as `C`, if it is one.
    ///
    /// This is the `instanceof` test for values built by
    /// [`lift_constructor`](crate::lift::lift_constructor).
    pub fn downcast_ref<C: Container>(&self) -> Option<&C> {
        match self {
            Self::Custom(container) => {
                let container: &dyn Container = &**container;
                let any: &dyn Any = container;
                any.downcast_ref::<C>()
            }
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Seq(left), Self::Seq(right)) => left == right,
            (Self::Map(left), Self::Map(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (Self::Optional(left), Self::Optional(right)) => left == right,
            (Self::Union(left), Self::Union(right)) => left == right,
            (Self::Validation(left), Self::Validation(right)) => left == right,
            (Self::Async(left), Self::Async(right)) => left.ptr_eq(right),
            (Self::Custom(left), Self::Custom(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("Null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Number(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value:?}"),
            Self::Seq(items) => formatter.debug_list().entries(items).finish(),
            Self::Map(entries) => formatter.debug_map().entries(entries).finish(),
            Self::Function(function) => write!(formatter, "{function:?}"),
            Self::Optional(optional) => write!(formatter, "{optional:?}"),
            Self::Union(union) => write!(formatter, "{union:?}"),
            Self::Validation(validation) => write!(formatter, "{validation:?}"),
            Self::Async(lazy) => write!(formatter, "{lazy:?}"),
            Self::Custom(container) => write!(formatter, "{container:?}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(entries: BTreeMap<String, Self>) -> Self {
        Self::Map(entries)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Optional<Self>> for Value {
    fn from(optional: Optional<Self>) -> Self {
        Self::Optional(Box::new(optional))
    }
}

impl From<Union<Self, Self>> for Value {
    fn from(union: Union<Self, Self>) -> Self {
        Self::Union(Box::new(union))
    }
}

impl From<Validation<Self, Self>> for Value {
    fn from(validation: Validation<Self, Self>) -> Self {
        Self::Validation(Box::new(validation))
    }
}

impl From<LazyAsync<Self>> for Value {
    fn from(lazy: LazyAsync<Self>) -> Self {
        Self::Async(lazy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, Shape::Null)]
    #[case(Value::from(1), Shape::Number)]
    #[case(Value::from("a"), Shape::Str)]
    #[case(Value::from(vec![1, 2]), Shape::Seq)]
    #[case(Value::present(1), Shape::Optional)]
    #[case(Value::fail(["e"]), Shape::Validation)]
    fn shape_of_value(#[case] value: Value, #[case] expected: Shape) {
        assert_eq!(value.shape(), expected);
    }

    #[rstest]
    fn functions_compare_by_identity() {
        let function = Function::unary(Ok);
        let same = Value::from(function.clone());
        assert_eq!(Value::from(function), same);
        assert_ne!(Value::from(Function::unary(Ok)), same);
    }

    #[rstest]
    fn mapping_collects_entries() {
        let value = Value::mapping([("b", 2), ("a", 1)]);
        assert_eq!(value.get("a"), Some(&Value::from(1)));
        assert_eq!(value.get("missing"), None);
    }

    #[rstest]
    fn char_converts_to_string() {
        assert_eq!(Value::from('x'), Value::from("x"));
    }
}
