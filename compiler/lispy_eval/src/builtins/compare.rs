//! `== != > < >= <=`. Results are `1` or `0`.

use std::cmp::Ordering;

use super::{expect_count, expect_type};
use crate::errors::BuiltinResult;
use crate::value::Value;
use crate::{Environment, Interpreter};

fn equality(func: &'static str, args: &[Value], want_equal: bool) -> BuiltinResult {
    expect_count(func, args, 2)?;
    Ok(Value::boolean(args[0].equals(&args[1]) == want_equal))
}

/// Compare two numbers; true when their ordering is one of `accept`.
fn ordering(func: &'static str, args: &[Value], accept: &[Ordering]) -> BuiltinResult {
    expect_count(func, args, 2)?;
    expect_type(func, args, 0, "Number")?;
    expect_type(func, args, 1, "Number")?;
    match (args[0].as_number(), args[1].as_number()) {
        (Some(x), Some(y)) => Ok(Value::boolean(accept.contains(&x.cmp(&y)))),
        _ => Ok(Value::boolean(false)),
    }
}

pub(super) fn eq(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    equality("==", &args, true)
}

pub(super) fn ne(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    equality("!=", &args, false)
}

pub(super) fn gt(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    ordering(">", &args, &[Ordering::Greater])
}

pub(super) fn lt(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    ordering("<", &args, &[Ordering::Less])
}

pub(super) fn ge(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    ordering(">=", &args, &[Ordering::Greater, Ordering::Equal])
}

pub(super) fn le(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    ordering("<=", &args, &[Ordering::Less, Ordering::Equal])
}
