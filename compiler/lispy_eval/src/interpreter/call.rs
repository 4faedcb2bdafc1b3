//! Function application.
//!
//! Builtins receive their evaluated arguments directly. Closures bind
//! arguments to formals one at a time, in order:
//!
//! - more arguments than formals is an error;
//! - the formal `&` binds the formal after it to all remaining arguments
//!   as a Q-expression;
//! - fewer arguments than formals returns the closure with the bound
//!   formals removed (partial application);
//! - once every formal is bound, the closure's scope is linked under the
//!   *calling* scope and the body is evaluated there.

use super::Interpreter;
use crate::errors::{BuiltinResult, EvalErrorKind};
use crate::value::{Closure, Function, Value, VARIADIC_MARKER};
use crate::Environment;

/// Whether a closure still waits for arguments after binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Saturation {
    Saturated,
    Partial,
}

impl Interpreter {
    /// Apply `func` to already-evaluated `args`.
    ///
    /// Errors from the application become error values here.
    pub(crate) fn call(&mut self, env: &Environment, func: Function, args: Vec<Value>) -> Value {
        tracing::trace!(function = %func, args = args.len(), "apply");
        let result = match func {
            Function::Builtin(builtin) => builtin.invoke(self, env, args),
            Function::Closure(closure) => self.call_closure(env, closure, args),
        };
        result.unwrap_or_else(Value::from)
    }

    fn call_closure(
        &mut self,
        env: &Environment,
        mut closure: Closure,
        args: Vec<Value>,
    ) -> BuiltinResult {
        match bind_arguments(&mut closure, args)? {
            Saturation::Partial => Ok(Value::closure(closure)),
            Saturation::Saturated => {
                closure.env.set_parent(env);
                let body = Value::sexpr(std::mem::take(&mut closure.body));
                self.nested(|interp| interp.eval(&closure.env, body))
            }
        }
    }
}

/// Bind `args` to the formals of `closure`, consuming both.
///
/// Bound values are stored in the closure's own scope.
pub(crate) fn bind_arguments(
    closure: &mut Closure,
    args: Vec<Value>,
) -> Result<Saturation, EvalErrorKind> {
    let given = args.len();
    let expected = closure.formals.len();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if closure.formals.is_empty() {
            return Err(EvalErrorKind::ClosureArity { given, expected });
        }
        let formal = formal_name(closure.formals.remove(0))?;

        if formal == VARIADIC_MARKER {
            let rest = take_variadic_target(closure)?;
            let collected = std::iter::once(arg).chain(args).collect();
            closure.env.put(rest, Value::qexpr(collected));
            break;
        }
        closure.env.put(formal, arg);
    }

    // `&` left unbound: no variadic arguments were supplied.
    if closure
        .formals
        .first()
        .and_then(Value::as_symbol)
        .is_some_and(|s| s == VARIADIC_MARKER)
    {
        closure.formals.remove(0);
        let rest = take_variadic_target(closure)?;
        closure.env.put(rest, Value::qexpr(Vec::new()));
    }

    if closure.formals.is_empty() {
        Ok(Saturation::Saturated)
    } else {
        Ok(Saturation::Partial)
    }
}

/// Pop the formal following `&`, which must be the last one.
fn take_variadic_target(closure: &mut Closure) -> Result<String, EvalErrorKind> {
    if closure.formals.len() != 1 {
        return Err(EvalErrorKind::MalformedVariadic);
    }
    formal_name(closure.formals.remove(0))
}

fn formal_name(formal: Value) -> Result<String, EvalErrorKind> {
    match formal {
        Value::Symbol(name) => Ok(name),
        other => Err(EvalErrorKind::NonSymbolFormal {
            got: other.type_name(),
        }),
    }
}
