//! `def`, `=` and `\`.

use super::{expect_count, expect_type};
use crate::errors::{BuiltinResult, EvalErrorKind};
use crate::value::{Closure, Value};
use crate::{Environment, Interpreter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    /// `def`: the root of the calling scope's chain.
    Global,
    /// `=`: the calling scope itself.
    Local,
}

/// `def {a b} 1 2` / `= {a b} 1 2`: bind each symbol to the matching value.
fn bind(func: &'static str, env: &Environment, args: Vec<Value>, target: Target) -> BuiltinResult {
    expect_type(func, &args, 0, "Q-Expression")?;

    let mut args = args.into_iter();
    let Some(Value::QExpr(symbols)) = args.next() else {
        return Ok(Value::unit());
    };

    let mut names = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        match symbol {
            Value::Symbol(name) => names.push(name),
            other => {
                return Err(EvalErrorKind::NonSymbolDefinition {
                    func,
                    got: other.type_name(),
                })
            }
        }
    }

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(EvalErrorKind::DefinitionCount { func });
    }

    for (name, value) in names.into_iter().zip(values) {
        tracing::debug!(%name, ?target, "define");
        match target {
            Target::Global => env.define(name, value),
            Target::Local => env.put(name, value),
        }
    }
    Ok(Value::unit())
}

pub(super) fn def(_: &mut Interpreter, env: &Environment, args: Vec<Value>) -> BuiltinResult {
    bind("def", env, args, Target::Global)
}

pub(super) fn put(_: &mut Interpreter, env: &Environment, args: Vec<Value>) -> BuiltinResult {
    bind("=", env, args, Target::Local)
}

/// `\ {formals} {body}`: a closure over a fresh, empty scope.
pub(super) fn lambda(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    expect_count("\\", &args, 2)?;
    expect_type("\\", &args, 0, "Q-Expression")?;
    expect_type("\\", &args, 1, "Q-Expression")?;

    let mut args = args.into_iter();
    let (Some(Value::QExpr(formals)), Some(Value::QExpr(body))) = (args.next(), args.next())
    else {
        return Ok(Value::unit());
    };

    if let Some(bad) = formals.iter().find(|f| !matches!(f, Value::Symbol(_))) {
        return Err(EvalErrorKind::NonSymbolFormal {
            got: bad.type_name(),
        });
    }
    Ok(Value::closure(Closure::new(formals, body)))
}
