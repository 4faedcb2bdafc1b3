//! `load`, `error` and `print`.

use std::path::Path;

use super::{expect_count, expect_type};
use crate::errors::{BuiltinResult, EvalErrorKind};
use crate::value::Value;
use crate::{Environment, Interpreter};

/// The single string argument.
fn string_arg(func: &'static str, args: Vec<Value>) -> Result<String, EvalErrorKind> {
    expect_count(func, &args, 1)?;
    expect_type(func, &args, 0, "String")?;
    match args.into_iter().next() {
        Some(Value::Str(s)) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// `load "file.lspy"`: evaluate every form of the file in the calling scope.
pub(super) fn load(
    interpreter: &mut Interpreter,
    env: &Environment,
    args: Vec<Value>,
) -> BuiltinResult {
    let path = string_arg("load", args)?;
    interpreter.nested(|interp| interp.load_path(env, Path::new(&path)))
}

/// `error "message"`: an error value carrying `message`.
pub(super) fn error(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    let message = string_arg("error", args)?;
    Ok(Value::error(message))
}

/// `print a b ...`: write the arguments space-separated, then a newline.
pub(super) fn print(
    interpreter: &mut Interpreter,
    _: &Environment,
    args: Vec<Value>,
) -> BuiltinResult {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    interpreter.print_handler.println(&line);
    Ok(Value::unit())
}
