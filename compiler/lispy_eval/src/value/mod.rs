//! Runtime values for the Lispy interpreter.
//!
//! # Ownership
//!
//! Every list exclusively owns its children, so `Clone` is a deep copy of
//! the tree. The one shared piece is the [`Environment`](crate::Environment) captured by a
//! [`Closure`]; cloning a closure takes a fresh [`Environment::snapshot`](crate::Environment::snapshot) of
//! it, so a curried copy never shares bindings with the closure it came
//! from. Environments hand out clones on every lookup, so destructive
//! argument binding never aliases stored data.
//!
//! # Printing
//!
//! `Display` is the canonical serialization: the reader parses it back to
//! an equal value for anything built from numbers, symbols, and lists.

mod function;

use std::fmt;

use lispy_parse::escape::escape_string;
use lispy_stack::ensure_sufficient_stack;

pub use function::{Builtin, BuiltinFn, Closure, Function};

/// Symbol that marks the variadic formal in a closure's parameter list.
pub const VARIADIC_MARKER: &str = "&";

/// Runtime value in the Lispy interpreter.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit signed integer.
    Number(i64),
    /// Identifier, resolved against an environment when evaluated.
    Symbol(String),
    /// Decoded string literal.
    Str(String),
    /// A failure, carried as an ordinary value.
    Error(String),
    /// Builtin or user closure.
    Function(Function),
    /// Evaluable list: head is applied to the rest.
    SExpr(Vec<Value>),
    /// Literal (quoted) list, never evaluated implicitly.
    QExpr(Vec<Value>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    #[inline]
    pub fn sexpr(items: Vec<Value>) -> Self {
        Value::SExpr(items)
    }

    #[inline]
    pub fn qexpr(items: Vec<Value>) -> Self {
        Value::QExpr(items)
    }

    /// The empty S-expression, `()`: the result of effect-only builtins.
    #[inline]
    pub fn unit() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Number standing for a comparison outcome: `1` or `0`.
    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Number(i64::from(b))
    }

    /// Wrap a builtin as a function value.
    #[inline]
    pub fn builtin(builtin: Builtin) -> Self {
        Value::Function(Function::Builtin(builtin))
    }

    /// Wrap a closure as a function value.
    #[inline]
    pub fn closure(closure: Closure) -> Self {
        Value::Function(Function::Closure(closure))
    }
}

impl Value {
    /// Human-readable type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Symbol(_) => "Symbol",
            Value::Str(_) => "String",
            Value::Error(_) => "Error",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Children of an S- or Q-expression.
    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => Some(items),
            _ => None,
        }
    }

    /// Check structural equality with another value.
    ///
    /// Numbers, strings, symbols, and errors compare by payload; lists by
    /// length and pairwise elements; functions by identity. Never evaluates.
    pub fn equals(&self, other: &Value) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b))
            | (Value::Str(a), Value::Str(b))
            | (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.same_function(b),
            (Value::SExpr(a), Value::SExpr(b)) | (Value::QExpr(a), Value::QExpr(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y))
            }
            _ => false,
        })
    }
}

/// Write `items` space-separated between `open` and `close`.
pub(crate) fn fmt_list(
    f: &mut fmt::Formatter<'_>,
    open: char,
    items: &[Value],
    close: char,
) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::Str(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Error(msg) => write!(f, "Error: {msg}"),
            Value::Function(func) => write!(f, "{func}"),
            Value::SExpr(items) => fmt_list(f, '(', items, ')'),
            Value::QExpr(items) => fmt_list(f, '{', items, '}'),
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
