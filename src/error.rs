//! Error types for dispatch and lifting.
//!
//! Shape-driven operations report failures through [`Error`] instead of
//! panicking. `map` and `flat_map` never fail on shape alone (they fall back to
//! applying the function directly), while `fold` and `concat` reject values
//! they cannot combine.
//!
//! # Examples
//!
//! ```rust
//! use liftkit::dynamic::{Value, concat};
//! use liftkit::Error;
//!
//! let result = concat(vec![Value::from(true), Value::from(false)]);
//! assert!(matches!(result, Err(Error::NotConcatenable { .. })));
//! ```

use thiserror::Error;

use crate::dynamic::{Capability, Shape};

/// Represents errors that can occur while dispatching over containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `fold` was called on a value that has no fold adapter.
    #[error("cannot fold over a value of shape `{shape}`")]
    NotFoldable {
        /// Shape of the rejected value.
        shape: Shape,
    },

    /// `concat` was called on a value that has no concat adapter.
    #[error("cannot concatenate values of shape `{shape}`")]
    NotConcatenable {
        /// Shape of the rejected value.
        shape: Shape,
    },

    /// `concat` operands do not share the first operand's shape.
    #[error("cannot concatenate `{found}` onto `{expected}`")]
    MixedConcat {
        /// Shape of the first operand.
        expected: Shape,
        /// Shape of the offending operand.
        found: Shape,
    },

    /// `concat` was called without operands.
    #[error("concat requires at least one operand")]
    EmptyConcat,

    /// A value was asked for a capability it does not expose.
    #[error("`{shape}` does not expose the `{capability}` capability")]
    MissingCapability {
        /// The capability that was requested.
        capability: Capability,
        /// Shape of the value that lacks it.
        shape: Shape,
    },

    /// A continuation returned a value of the wrong shape.
    #[error("{operation} expected the function to return `{expected}`, got `{found}`")]
    ShapeMismatch {
        /// The operation that received the result.
        operation: &'static str,
        /// The shape the operation requires.
        expected: Shape,
        /// The shape that was returned.
        found: Shape,
    },

    /// A capability name did not match any known capability.
    #[error("unknown capability `{0}`")]
    UnknownCapability(String),

    /// A lifted function was called without arguments.
    #[error("a lifted function requires at least one argument")]
    NoArguments,

    /// A function received an argument of an unexpected shape.
    #[error("expected argument {index} to be `{expected}`, got `{found}`")]
    ArgumentType {
        /// Position of the argument.
        index: usize,
        /// The shape the function requires.
        expected: Shape,
        /// The shape that was supplied.
        found: Shape,
    },

    /// A lazy async value dropped its resolver without resolving.
    #[error("the lazy async value dropped its resolver without resolving")]
    Abandoned,

    /// A domain error raised by user code.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a [`Error::Custom`] from any displayable message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::Error;
    ///
    /// let error = Error::custom("record not found");
    /// assert_eq!(error.to_string(), "record not found");
    /// ```
    pub fn custom(message: impl std::fmt::Display) -> Self {
        Self::Custom(message.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn mixed_concat_names_both_shapes() {
        let error = Error::MixedConcat {
            expected: Shape::Seq,
            found: Shape::Number,
        };
        assert_eq!(
            error.to_string(),
            "cannot concatenate `number` onto `sequence`"
        );
    }

    #[rstest]
    fn missing_capability_names_capability() {
        let error = Error::MissingCapability {
            capability: Capability::Bimap,
            shape: Shape::Async,
        };
        assert_eq!(
            error.to_string(),
            "`lazy-async` does not expose the `bimap` capability"
        );
    }
}
