//! `+ - * / % ^` on 64-bit integers.
//!
//! Each operator folds left over its arguments. Overflow is an error,
//! never a silent wrap.

use crate::errors::{BuiltinResult, EvalErrorKind};
use crate::value::Value;
use crate::{Environment, Interpreter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithOp {
    fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "^",
        }
    }

    fn apply(self, x: i64, y: i64) -> Result<i64, EvalErrorKind> {
        let result = match self {
            ArithOp::Add => x.checked_add(y),
            ArithOp::Sub => x.checked_sub(y),
            ArithOp::Mul => x.checked_mul(y),
            ArithOp::Div | ArithOp::Rem if y == 0 => return Err(EvalErrorKind::DivisionByZero),
            ArithOp::Div => x.checked_div(y),
            ArithOp::Rem => x.checked_rem(y),
            ArithOp::Pow => return checked_pow(x, y),
        };
        result.ok_or(EvalErrorKind::IntegerOverflow)
    }
}

fn checked_pow(base: i64, exp: i64) -> Result<i64, EvalErrorKind> {
    if exp < 0 {
        return Err(EvalErrorKind::NegativeExponent);
    }
    // Only 0, 1 and -1 survive exponents past u32; keep the parity.
    let exp = u32::try_from(exp).unwrap_or(if exp % 2 == 0 {
        u32::MAX - 1
    } else {
        u32::MAX
    });
    base.checked_pow(exp).ok_or(EvalErrorKind::IntegerOverflow)
}

fn fold(op: ArithOp, args: Vec<Value>) -> BuiltinResult {
    let mut nums = Vec::with_capacity(args.len());
    for arg in &args {
        match arg.as_number() {
            Some(n) => nums.push(n),
            None => {
                return Err(EvalErrorKind::NonNumber {
                    got: arg.type_name(),
                })
            }
        }
    }

    let Some((&first, rest)) = nums.split_first() else {
        return Err(EvalErrorKind::ArgumentCount {
            func: op.name(),
            got: 0,
            expected: 1,
        });
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::number)
            .ok_or(EvalErrorKind::IntegerOverflow);
    }

    let mut acc = first;
    for &y in rest {
        acc = op.apply(acc, y)?;
    }
    Ok(Value::number(acc))
}

pub(super) fn add(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    fold(ArithOp::Add, args)
}

pub(super) fn sub(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    fold(ArithOp::Sub, args)
}

pub(super) fn mul(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    fold(ArithOp::Mul, args)
}

pub(super) fn div(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    fold(ArithOp::Div, args)
}

pub(super) fn rem(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    fold(ArithOp::Rem, args)
}

pub(super) fn pow(_: &mut Interpreter, _: &Environment, args: Vec<Value>) -> BuiltinResult {
    fold(ArithOp::Pow, args)
}
