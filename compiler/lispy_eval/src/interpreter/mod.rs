//! Tree-walking interpreter for Lispy.
//!
//! # Evaluation rules
//!
//! - A symbol evaluates to a copy of its binding, or an `Unbound Symbol`
//!   error value.
//! - An S-expression evaluates every child left to right, then returns the
//!   first error among them. `()` evaluates to itself and `(x)` to the
//!   evaluation of `x`. Otherwise the head must be a function, which is
//!   applied to the rest (see `call.rs`).
//! - Everything else evaluates to itself.
//!
//! The interpreter owns the global [`Environment`]; nested scopes exist
//! only inside closures, and every `eval` receives the scope to use.

mod builder;
mod call;

pub use builder::InterpreterBuilder;

use std::path::Path;

use lispy_parse::{ParseError, STDIN_NAME};
use lispy_stack::ensure_sufficient_stack;

use crate::diagnostics::CallStack;
use crate::errors::{BuiltinResult, EvalErrorKind};
use crate::reader::{read, read_source, read_source_with_diagnostics};
use crate::value::Value;
use crate::{Environment, SharedPrintHandler, PRELUDE};

/// File name reported for the bundled prelude.
const PRELUDE_NAME: &str = "prelude.lspy";

/// Lispy interpreter: global scope, output sink, and call-depth guard.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) call_stack: CallStack,
}

impl Interpreter {
    /// Interpreter with default settings: stdout, default depth limit,
    /// prelude loaded.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The global scope.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Parse, read, and evaluate `source` in the global scope.
    ///
    /// The whole input is one S-expression, so `+ 1 2` and `(+ 1 2)` both
    /// evaluate to `3`.
    pub fn evaluate(&mut self, source: &str) -> Value {
        self.evaluate_with_diagnostics(source).0
    }

    /// Like [`evaluate`](Self::evaluate), also returning the parser's
    /// positioned error when `source` does not parse.
    pub fn evaluate_with_diagnostics(&mut self, source: &str) -> (Value, Option<ParseError>) {
        let (value, err) = read_source_with_diagnostics(STDIN_NAME, source);
        if value.is_error() {
            return (value, err);
        }
        let env = self.env.clone();
        (self.eval(&env, value), None)
    }

    /// Parse and read `source` without evaluating it.
    pub fn read(&self, source: &str) -> Value {
        read_source(STDIN_NAME, source)
    }

    /// Evaluate `value` in `env`.
    pub fn eval(&mut self, env: &Environment, value: Value) -> Value {
        ensure_sufficient_stack(|| match value {
            Value::Symbol(name) => env.get(&name).unwrap_or_else(Value::from),
            Value::SExpr(items) => self.eval_sexpr(env, items),
            other => other,
        })
    }

    /// Run `f` one level deeper in the call-depth guard.
    ///
    /// Closure bodies and the code evaluated by `eval`, `if` and `load` go
    /// through here, so every way of re-entering the evaluator is counted.
    pub(crate) fn nested(&mut self, f: impl FnOnce(&mut Self) -> Value) -> BuiltinResult {
        self.call_stack.push()?;
        let result = f(self);
        self.call_stack.pop();
        Ok(result)
    }

    fn eval_sexpr(&mut self, env: &Environment, items: Vec<Value>) -> Value {
        let mut evaluated = Vec::with_capacity(items.len());
        for item in items {
            evaluated.push(self.eval(env, item));
        }

        if let Some(pos) = evaluated.iter().position(Value::is_error) {
            return evaluated.swap_remove(pos);
        }

        if evaluated.is_empty() {
            return Value::sexpr(evaluated);
        }
        let head = evaluated.remove(0);
        if evaluated.is_empty() {
            return self.eval(env, head);
        }
        match head {
            Value::Function(func) => self.call(env, func, evaluated),
            other => EvalErrorKind::NotAFunction {
                got: other.type_name(),
            }
            .into(),
        }
    }

    /// Load a source file into the global scope.
    ///
    /// Behaves like the `load` builtin called at top level.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Value {
        let env = self.env.clone();
        self.load_path(&env, path.as_ref())
    }

    /// Read `path` and evaluate each top-level form in `env`.
    #[tracing::instrument(level = "debug", skip(self, env))]
    pub(crate) fn load_path(&mut self, env: &Environment, path: &Path) -> Value {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                tracing::debug!(%err, "read failed");
                return EvalErrorKind::LoadFailure {
                    reason: format!("{}: {err}", path.display()),
                }
                .into();
            }
        };
        let name = path.display().to_string();
        self.load_source(env, &name, &source)
    }

    /// Evaluate each top-level form of `source` in `env`.
    ///
    /// Error results are written to the print handler rather than returned;
    /// only a parse failure is returned, as a `Could not load Library`
    /// error value. Otherwise the result is `()`.
    pub fn load_source(&mut self, env: &Environment, source_name: &str, source: &str) -> Value {
        let tree = match lispy_parse::parse_named(source_name, source) {
            Ok(tree) => tree,
            Err(err) => {
                return EvalErrorKind::LoadFailure {
                    reason: err.to_string(),
                }
                .into()
            }
        };

        let forms = match read(&tree) {
            Value::SExpr(forms) => forms,
            other => vec![other],
        };
        tracing::debug!(source_name, forms = forms.len(), "loading");
        for form in forms {
            let result = self.eval(env, form);
            if result.is_error() {
                self.print_handler.println(&result.to_string());
            }
        }
        Value::unit()
    }

    /// Evaluate the bundled prelude into the global scope.
    pub(crate) fn load_prelude(&mut self) {
        let env = self.env.clone();
        self.load_source(&env, PRELUDE_NAME, PRELUDE);
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
