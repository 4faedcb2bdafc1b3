//! `list head tail eval join`.
//!
//! `head`, `tail`, `eval` and `join` report bad arguments with the printed
//! argument list, so the offending call can be read off the message.

use crate::errors::{BuiltinResult, EvalErrorKind};
use crate::value::Value;
use crate::{Environment, Interpreter};

pub(super) fn list(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    Ok(Value::qexpr(args))
}

pub(super) fn head(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    let mut items = single_nonempty_qexpr("head", args)?;
    items.truncate(1);
    Ok(Value::qexpr(items))
}

pub(super) fn tail(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    let mut items = single_nonempty_qexpr("tail", args)?;
    items.remove(0);
    Ok(Value::qexpr(items))
}

/// Evaluate a Q-expression as an S-expression in the calling scope.
pub(super) fn eval(
    interpreter: &mut Interpreter,
    env: &Environment,
    args: Vec<Value>,
) -> BuiltinResult {
    let items = single_qexpr("eval", args)?;
    interpreter.nested(|interp| interp.eval(env, Value::sexpr(items)))
}

pub(super) fn join(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    if !args.iter().all(|arg| matches!(arg, Value::QExpr(_))) {
        return Err(EvalErrorKind::IncorrectTypes {
            func: "join",
            args: Value::sexpr(args).to_string(),
        });
    }
    let joined = args
        .into_iter()
        .flat_map(|arg| match arg {
            Value::QExpr(items) => items,
            _ => Vec::new(),
        })
        .collect();
    Ok(Value::qexpr(joined))
}

/// The items of the one Q-expression argument.
fn single_qexpr(func: &'static str, mut args: Vec<Value>) -> Result<Vec<Value>, EvalErrorKind> {
    if args.len() != 1 {
        return Err(EvalErrorKind::TooManyArguments {
            func,
            args: Value::sexpr(args).to_string(),
        });
    }
    match args.pop() {
        Some(Value::QExpr(items)) => Ok(items),
        Some(other) => Err(EvalErrorKind::IncorrectTypes {
            func,
            args: Value::sexpr(vec![other]).to_string(),
        }),
        None => Err(EvalErrorKind::ArgumentCount {
            func,
            got: 0,
            expected: 1,
        }),
    }
}

fn single_nonempty_qexpr(
    func: &'static str,
    args: Vec<Value>,
) -> Result<Vec<Value>, EvalErrorKind> {
    let items = single_qexpr(func, args)?;
    if items.is_empty() {
        return Err(EvalErrorKind::EmptyList { func });
    }
    Ok(items)
}
