//! Lispy Eval - tree-walking evaluator for the Lispy language.
//!
//! # Architecture
//!
//! - [`Value`]: the runtime datum, a closed sum type
//! - [`Environment`]: shared, mutable scopes linked to their parents
//! - `reader`: syntax tree from `lispy_parse` to value tree
//! - [`Interpreter`]: evaluation rules and function application
//! - `builtins`: the native operations bound in the global scope
//! - [`PRELUDE`]: the standard library, written in Lispy itself
//!
//! Failures never escape as Rust errors: every evaluation returns a
//! [`Value`], and a failure is a [`Value::Error`].
//!
//! ```ignore
//! let mut interpreter = lispy_eval::Interpreter::new();
//! assert_eq!(interpreter.evaluate("+ 1 (* 2 3)").to_string(), "7");
//! ```

pub mod builtins;
mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod print_handler;
pub mod reader;
mod value;

pub use diagnostics::{CallStack, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{BuiltinResult, EvalErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandler,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Builtin, BuiltinFn, Closure, Function, Value, VARIADIC_MARKER};

/// Source of the standard prelude, evaluated by default at startup.
pub const PRELUDE: &str = include_str!("prelude.lspy");

/// Evaluate `source` in a fresh interpreter with default settings.
pub fn evaluate(source: &str) -> Value {
    Interpreter::new().evaluate(source)
}

#[cfg(test)]
mod tests;
