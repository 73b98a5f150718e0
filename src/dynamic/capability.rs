//! Capability probing and the extension point for user-defined containers.
//!
//! Built-in shapes have a fixed capability set. A user type joins dispatch by
//! implementing [`Container`], listing what it supports in
//! [`Container::capabilities`] and overriding the matching methods.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use super::function::Function;
use super::value::{Shape, Value};
use crate::error::{Error, Result};

/// A named operation a container may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Structure-preserving transformation.
    Fmap,
    /// Transformation whose function returns a container, flattened one level.
    FlatMap,
    /// Alias of `FlatMap` used by the algebraic types.
    Chain,
    /// Promise-style continuation; serves both `map` and `flat_map`.
    Then,
    /// Case elimination with one handler per case.
    Bimap,
    /// Associative combination with another value of the same type.
    Concat,
    /// Left fold over the contained elements.
    Fold,
    /// Starting a deferred computation with a resolver.
    Fork,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Fmap,
        Self::FlatMap,
        Self::Chain,
        Self::Then,
        Self::Bimap,
        Self::Concat,
        Self::Fold,
        Self::Fork,
    ];

    /// The canonical name of the capability.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fmap => "fmap",
            Self::FlatMap => "flatMap",
            Self::Chain => "chain",
            Self::Then => "then",
            Self::Bimap => "bimap",
            Self::Concat => "concat",
            Self::Fold => "fold",
            Self::Fork => "fork",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = Error;

    /// Accepts the canonical name, `flat_map`, and `map` as an alias of `fmap`.
    fn from_str(name: &str) -> Result<Self> {
        match name {
            "fmap" | "map" => Ok(Self::Fmap),
            "flatMap" | "flat_map" => Ok(Self::FlatMap),
            "chain" => Ok(Self::Chain),
            "then" => Ok(Self::Then),
            "bimap" => Ok(Self::Bimap),
            "concat" => Ok(Self::Concat),
            "fold" => Ok(Self::Fold),
            "fork" => Ok(Self::Fork),
            unknown => Err(Error::UnknownCapability(unknown.to_string())),
        }
    }
}

fn missing(capability: Capability, type_name: &'static str) -> Error {
    Error::MissingCapability {
        capability,
        shape: Shape::Custom(type_name),
    }
}

/// A user-defined container that can take part in dispatch.
///
/// Every method defaults to [`Error::MissingCapability`]. Dispatch consults
/// [`capabilities`](Container::capabilities) before calling a method, so a
/// type should list exactly the capabilities it overrides.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{Capability, Container, Function, Value, map};
///
/// #[derive(Debug)]
/// struct Boxed(Value);
///
/// impl Container for Boxed {
///     fn capabilities(&self) -> &'static [Capability] {
///         &[Capability::Fmap]
///     }
///
///     fn fmap(&self, function: &Function) -> liftkit::Result<Value> {
///         Ok(Value::custom(Boxed(function.call1(self.0.clone())?)))
///     }
/// }
///
/// let double = Function::unary(|x| Ok(Value::from(x.as_number().unwrap_or(0.0) * 2.0)));
/// let mapped = map(&double, Value::custom(Boxed(Value::from(4))))?;
/// assert_eq!(mapped.downcast_ref::<Boxed>().map(|boxed| &boxed.0), Some(&Value::from(8)));
/// # Ok::<(), liftkit::Error>(())
/// ```
pub trait Container: Any + fmt::Debug + Send + Sync {
    /// Name used in shapes and diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The capabilities this container implements.
    fn capabilities(&self) -> &'static [Capability] {
        &[]
    }

    /// Applies `function` to the contained value.
    ///
    /// # Errors
    ///
    /// Defaults to [`Error::MissingCapability`].
    fn fmap(&self, function: &Function) -> Result<Value> {
        let _ = function;
        Err(missing(Capability::Fmap, self.type_name()))
    }

    /// Applies a container-returning `function` and flattens the result.
    ///
    /// # Errors
    ///
    /// Defaults to [`Error::MissingCapability`].
    fn flat_map(&self, function: &Function) -> Result<Value> {
        let _ = function;
        Err(missing(Capability::FlatMap, self.type_name()))
    }

    /// Alias of [`flat_map`](Container::flat_map) for chain-style types.
    ///
    /// # Errors
    ///
    /// Defaults to [`Error::MissingCapability`].
    fn chain(&self, function: &Function) -> Result<Value> {
        let _ = function;
        Err(missing(Capability::Chain, self.type_name()))
    }

    /// Promise-style continuation.
    ///
    /// # Errors
    ///
    /// Defaults to [`Error::MissingCapability`].
    fn then(&self, function: &Function) -> Result<Value> {
        let _ = function;
        Err(missing(Capability::Then, self.type_name()))
    }

    /// Calls exactly one of the two handlers.
    ///
    /// # Errors
    ///
    /// Defaults to [`Error::MissingCapability`].
    fn bimap(&self, on_a: &Function, on_b: &Function) -> Result<Value> {
        let _ = (on_a, on_b);
        Err(missing(Capability::Bimap, self.type_name()))
    }

    /// Combines `self` with `other`.
    ///
    /// # Errors
    ///
    /// Defaults to [`Error::MissingCapability`].
    fn concat(&self, other: &Value) -> Result<Value> {
        let _ = other;
        Err(missing(Capability::Concat, self.type_name()))
    }

    /// Folds the contained elements, starting from `init`.
    ///
    /// # Errors
    ///
    /// Defaults to [`Error::MissingCapability`].
    fn fold(&self, function: &Function, init: Value) -> Result<Value> {
        let _ = (function, init);
        Err(missing(Capability::Fold, self.type_name()))
    }

    /// Starts a deferred computation, delivering its value to `handler`.
    ///
    /// # Errors
    ///
    /// Defaults to [`Error::MissingCapability`].
    fn fork(&self, handler: Function) -> Result<()> {
        let _ = handler;
        Err(missing(Capability::Fork, self.type_name()))
    }
}

const OPTIONAL_CAPABILITIES: &[Capability] = &[
    Capability::Fmap,
    Capability::FlatMap,
    Capability::Chain,
    Capability::Bimap,
];

const ASYNC_CAPABILITIES: &[Capability] = &[
    Capability::Fmap,
    Capability::FlatMap,
    Capability::Chain,
    Capability::Fork,
];

const SEMIGROUP_CAPABILITIES: &[Capability] = &[Capability::Concat];

/// Returns the capabilities `value` exposes as its own methods.
///
/// Structural shapes handled by adapters (sequences folded or mapped, mappings,
/// functions) are not listed here: this reports what the value itself
/// implements, not everything dispatch can do with it.
pub fn capabilities_of(value: &Value) -> &'static [Capability] {
    match value {
        Value::Optional(_) | Value::Union(_) | Value::Validation(_) => OPTIONAL_CAPABILITIES,
        Value::Async(_) => ASYNC_CAPABILITIES,
        Value::Seq(_) | Value::Str(_) => SEMIGROUP_CAPABILITIES,
        Value::Custom(container) => container.capabilities(),
        Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::Map(_)
        | Value::Function(_) => &[],
    }
}

/// Returns `true` if `value` exposes `capability`.
///
/// # Examples
///
/// ```rust
/// use liftkit::dynamic::{Capability, Value, has_capability};
///
/// assert!(has_capability(Capability::Bimap, &Value::present(1)));
/// assert!(!has_capability(Capability::Bimap, &Value::from(1)));
/// ```
pub fn has_capability(capability: Capability, value: &Value) -> bool {
    capabilities_of(value).contains(&capability)
}

/// Like [`has_capability`], with the capability given by name.
///
/// Unknown names report `false`.
pub fn has_capability_named(name: &str, value: &Value) -> bool {
    name.parse()
        .is_ok_and(|capability| has_capability(capability, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::LazyAsync;
    use rstest::rstest;

    #[derive(Debug)]
    struct Opaque;

    impl Container for Opaque {}

    #[derive(Debug)]
    struct Foldable;

    impl Container for Foldable {
        fn type_name(&self) -> &'static str {
            "Foldable"
        }

        fn capabilities(&self) -> &'static [Capability] {
            &[Capability::Fold]
        }
    }

    #[rstest]
    #[case("fmap", Capability::Fmap)]
    #[case("map", Capability::Fmap)]
    #[case("flatMap", Capability::FlatMap)]
    #[case("flat_map", Capability::FlatMap)]
    #[case("then", Capability::Then)]
    fn parses_capability_names(#[case] name: &str, #[case] expected: Capability) {
        assert_eq!(name.parse::<Capability>(), Ok(expected));
    }

    #[rstest]
    fn unknown_capability_name_is_rejected() {
        assert_eq!(
            "traverse".parse::<Capability>(),
            Err(Error::UnknownCapability("traverse".to_string()))
        );
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        for capability in Capability::ALL {
            assert_eq!(capability.to_string().parse::<Capability>(), Ok(capability));
        }
    }

    #[rstest]
    #[case(Value::present(1), Capability::Bimap, true)]
    #[case(Value::right(1), Capability::Chain, true)]
    #[case(Value::fail(["e"]), Capability::Fmap, true)]
    #[case(Value::Async(LazyAsync::resolved(Value::Null)), Capability::Fork, true)]
    #[case(Value::Async(LazyAsync::resolved(Value::Null)), Capability::Bimap, false)]
    #[case(Value::from(vec![1]), Capability::Concat, true)]
    #[case(Value::from(1), Capability::Fmap, false)]
    #[case(Value::Null, Capability::Fmap, false)]
    fn reports_builtin_capabilities(
        #[case] value: Value,
        #[case] capability: Capability,
        #[case] expected: bool,
    ) {
        assert_eq!(has_capability(capability, &value), expected);
    }

    #[rstest]
    fn custom_container_reports_its_own_capabilities() {
        let value = Value::custom(Foldable);
        assert!(has_capability(Capability::Fold, &value));
        assert!(!has_capability(Capability::Fmap, &value));
        assert!(has_capability_named("fold", &value));
        assert!(!has_capability_named("nonsense", &value));
    }

    #[rstest]
    fn default_methods_report_missing_capability() {
        let error = Opaque.fmap(&Function::unary(Ok));
        assert!(matches!(
            error,
            Err(Error::MissingCapability {
                capability: Capability::Fmap,
                ..
            })
        ));
    }
}
