//! Error kinds for evaluation.
//!
//! Errors in Lispy are values: every failure becomes a [`Value::Error`]
//! carrying its message, and evaluation continues with that value. Inside
//! the crate, builtins and the application protocol report failures as a
//! typed [`EvalErrorKind`] so they can use `?`; the dispatcher converts the
//! kind into an error value at the call boundary (see [`BuiltinResult`]).
//!
//! The `Display` impl is the canonical message text.

use std::fmt;

use crate::value::Value;

/// Result of a builtin operation.
///
/// `Err` never leaves the interpreter: the caller turns it into a
/// [`Value::Error`]. `Ok` may itself hold an error value produced by a nested
/// evaluation (e.g. the branch chosen by `if`).
pub type BuiltinResult = Result<Value, EvalErrorKind>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    UnboundSymbol {
        name: String,
    },

    // Type/Arity
    NonNumber {
        got: &'static str,
    },
    TypeMismatch {
        func: &'static str,
        index: usize,
        got: &'static str,
        expected: &'static str,
    },
    ArgumentCount {
        func: &'static str,
        got: usize,
        expected: usize,
    },
    /// List builtins embed the printed argument list.
    TooManyArguments {
        func: &'static str,
        args: String,
    },
    IncorrectTypes {
        func: &'static str,
        args: String,
    },
    EmptyList {
        func: &'static str,
    },
    NotAFunction {
        got: &'static str,
    },

    // Arithmetic
    DivisionByZero,
    IntegerOverflow,
    NegativeExponent,

    // Closures
    ClosureArity {
        given: usize,
        expected: usize,
    },
    MalformedVariadic,
    NonSymbolFormal {
        got: &'static str,
    },

    // Definition
    NonSymbolDefinition {
        func: &'static str,
        got: &'static str,
    },
    DefinitionCount {
        func: &'static str,
    },

    // Reading/Loading
    InvalidNumber {
        text: String,
    },
    ParseFailure {
        input: String,
    },
    LoadFailure {
        reason: String,
    },

    // Limits
    StackExhausted {
        depth: usize,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundSymbol { name } => write!(f, "Unbound Symbol: '{name}'"),

            Self::NonNumber { got } => write!(f, "Cannot operate on non-number: {got}"),
            Self::TypeMismatch {
                func,
                index,
                got,
                expected,
            } => write!(
                f,
                "Function '{func}' passed incorrect type for argument {index}. \
                 Got {got}, Expected {expected}."
            ),
            Self::ArgumentCount {
                func,
                got,
                expected,
            } => write!(
                f,
                "Function '{func}' passed incorrect number of arguments. \
                 Got {got}, Expected {expected}."
            ),
            Self::TooManyArguments { func, args } => {
                write!(f, "Function '{func}' passed too many arguments: {args}")
            }
            Self::IncorrectTypes { func, args } => {
                write!(f, "Function '{func}' passed incorrect types: {args}")
            }
            Self::EmptyList { func } => write!(f, "Function '{func}' passed {{}}!"),
            Self::NotAFunction { got } => {
                write!(f, "S-expression does not start with symbol! got: {got}")
            }

            Self::DivisionByZero => write!(f, "Division By Zero!"),
            Self::IntegerOverflow => write!(f, "Integer Overflow!"),
            Self::NegativeExponent => write!(f, "Negative Exponent!"),

            Self::ClosureArity { given, expected } => write!(
                f,
                "Function passed too many arguments. Got {given}, Expected {expected}."
            ),
            Self::MalformedVariadic => write!(
                f,
                "Function format invalid. Symbol '&' not followed by single symbol."
            ),
            Self::NonSymbolFormal { got } => {
                write!(f, "Cannot define non-symbol. Got {got}, Expected Symbol.")
            }

            Self::NonSymbolDefinition { func, got } => write!(
                f,
                "Function '{func}' cannot define non-symbol. Got {got}, Expected Symbol."
            ),
            Self::DefinitionCount { func } => write!(
                f,
                "Function '{func}' cannot define incorrect number of values to symbols"
            ),

            Self::InvalidNumber { text } => write!(f, "Invalid Number: '{text}'"),
            Self::ParseFailure { input } => write!(f, "Failed to parse input: '{input}'"),
            Self::LoadFailure { reason } => write!(f, "Could not load Library {reason}"),

            Self::StackExhausted { depth } => {
                write!(f, "Stack Exhausted! Call depth exceeded {depth}.")
            }
        }
    }
}

impl From<EvalErrorKind> for Value {
    fn from(kind: EvalErrorKind) -> Self {
        Value::error(kind.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages_are_canonical() {
        assert_eq!(
            EvalErrorKind::UnboundSymbol {
                name: "hello".to_string()
            }
            .to_string(),
            "Unbound Symbol: 'hello'"
        );
        assert_eq!(EvalErrorKind::DivisionByZero.to_string(), "Division By Zero!");
        assert_eq!(
            EvalErrorKind::EmptyList { func: "head" }.to_string(),
            "Function 'head' passed {}!"
        );
        assert_eq!(
            EvalErrorKind::TypeMismatch {
                func: "if",
                index: 1,
                got: "Number",
                expected: "Q-Expression",
            }
            .to_string(),
            "Function 'if' passed incorrect type for argument 1. Got Number, Expected Q-Expression."
        );
        assert_eq!(
            EvalErrorKind::ArgumentCount {
                func: "if",
                got: 2,
                expected: 3,
            }
            .to_string(),
            "Function 'if' passed incorrect number of arguments. Got 2, Expected 3."
        );
    }

    #[test]
    fn test_kind_converts_to_error_value() {
        let value = Value::from(EvalErrorKind::NotAFunction { got: "Number" });
        assert_eq!(
            value,
            Value::error("S-expression does not start with symbol! got: Number")
        );
        assert_eq!(
            value.to_string(),
            "Error: S-expression does not start with symbol! got: Number"
        );
    }
}
