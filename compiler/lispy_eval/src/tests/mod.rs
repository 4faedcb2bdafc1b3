//! Language-level tests.
//!
//! Each table runs through one interpreter in order, so later cases see
//! the definitions made by earlier ones.

mod definition_tests;
mod math_tests;

use pretty_assertions::assert_eq;

use crate::{buffer_handler, Interpreter, SharedPrintHandler};

/// Interpreter with the prelude loaded and output captured.
pub(crate) fn interpreter() -> (Interpreter, SharedPrintHandler) {
    let output = buffer_handler();
    let interpreter = Interpreter::builder()
        .print_handler(output.clone())
        .build();
    (interpreter, output)
}

/// Evaluate each input in turn, comparing its printed result.
pub(crate) fn check_table(cases: &[(&str, &str)]) {
    let (mut interpreter, _) = interpreter();
    check_with(&mut interpreter, cases);
}

pub(crate) fn check_with(interpreter: &mut Interpreter, cases: &[(&str, &str)]) {
    for (input, want) in cases {
        let got = interpreter.evaluate(input).to_string();
        assert_eq!(got, *want, "evaluating {input:?}");
    }
}

#[test]
fn test_prelude_loads_silently() {
    let (_, output) = interpreter();
    assert_eq!(output.get_output(), "");
}

#[test]
fn test_free_evaluate() {
    assert_eq!(crate::evaluate("+ 1 1").to_string(), "2");
    assert_eq!(crate::evaluate("- 100").to_string(), "-100");
}

#[test]
fn test_without_prelude() {
    let mut interpreter = Interpreter::builder()
        .print_handler(buffer_handler())
        .with_prelude(false)
        .build();
    assert_eq!(
        interpreter.evaluate("nil").to_string(),
        "Error: Unbound Symbol: 'nil'"
    );
    assert_eq!(interpreter.evaluate("+ 1 2").to_string(), "3");
}
