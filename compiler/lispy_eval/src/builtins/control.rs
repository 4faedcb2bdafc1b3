//! `if`.

use super::{expect_count, expect_type};
use crate::errors::BuiltinResult;
use crate::value::Value;
use crate::{Environment, Interpreter};

/// `if cond {then} {else}`: evaluate the chosen branch as an S-expression.
pub(super) fn if_(
    interpreter: &mut Interpreter,
    env: &Environment,
    args: Vec<Value>,
) -> BuiltinResult {
    expect_count("if", &args, 3)?;
    expect_type("if", &args, 0, "Number")?;
    expect_type("if", &args, 1, "Q-Expression")?;
    expect_type("if", &args, 2, "Q-Expression")?;

    let mut args = args.into_iter();
    let condition = args.next().and_then(|c| c.as_number()).unwrap_or(0);
    let then_branch = args.next();
    let else_branch = args.next();
    let chosen = if condition != 0 { then_branch } else { else_branch };

    match chosen {
        Some(Value::QExpr(items)) => {
            interpreter.nested(|interp| interp.eval(env, Value::sexpr(items)))
        }
        _ => Ok(Value::unit()),
    }
}
