//! Native operations, registered in the global scope by name.
//!
//! Every builtin has the [`BuiltinFn`](crate::value::BuiltinFn) signature
//! and validates its own arguments. Failures are returned as
//! [`EvalErrorKind`] and become error values at the call site.

mod arithmetic;
mod compare;
mod control;
mod define;
mod io;
mod list;

use crate::errors::EvalErrorKind;
use crate::value::{Builtin, Value};
use crate::Environment;

/// Every builtin, in registration order.
pub const BUILTINS: &[Builtin] = &[
    // Definition
    Builtin::new("def", define::def),
    Builtin::new("=", define::put),
    Builtin::new("\\", define::lambda),
    // Lists
    Builtin::new("list", list::list),
    Builtin::new("head", list::head),
    Builtin::new("tail", list::tail),
    Builtin::new("eval", list::eval),
    Builtin::new("join", list::join),
    // Control and comparison
    Builtin::new("if", control::if_),
    Builtin::new("==", compare::eq),
    Builtin::new("!=", compare::ne),
    Builtin::new(">", compare::gt),
    Builtin::new("<", compare::lt),
    Builtin::new(">=", compare::ge),
    Builtin::new("<=", compare::le),
    // Arithmetic
    Builtin::new("+", arithmetic::add),
    Builtin::new("-", arithmetic::sub),
    Builtin::new("*", arithmetic::mul),
    Builtin::new("/", arithmetic::div),
    Builtin::new("%", arithmetic::rem),
    Builtin::new("^", arithmetic::pow),
    // Strings, errors, output
    Builtin::new("load", io::load),
    Builtin::new("error", io::error),
    Builtin::new("print", io::print),
];

/// Bind every builtin in `env`.
pub fn register(env: &Environment) {
    for builtin in BUILTINS {
        env.put(builtin.name(), Value::builtin(*builtin));
    }
}

/// Find a builtin by its registered name.
#[cfg(test)]
pub(crate) fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().copied().find(|b| b.name() == name)
}

fn expect_count(func: &'static str, args: &[Value], expected: usize) -> Result<(), EvalErrorKind> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalErrorKind::ArgumentCount {
            func,
            got: args.len(),
            expected,
        })
    }
}

fn expect_type(
    func: &'static str,
    args: &[Value],
    index: usize,
    expected: &'static str,
) -> Result<(), EvalErrorKind> {
    match args.get(index) {
        Some(arg) if arg.type_name() == expected => Ok(()),
        Some(arg) => Err(EvalErrorKind::TypeMismatch {
            func,
            index,
            got: arg.type_name(),
            expected,
        }),
        None => Err(EvalErrorKind::ArgumentCount {
            func,
            got: args.len(),
            expected: index + 1,
        }),
    }
}
