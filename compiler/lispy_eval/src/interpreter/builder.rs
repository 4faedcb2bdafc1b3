//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::builtins;
use crate::diagnostics::{CallStack, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: output to stdout, call depth capped at
/// [`DEFAULT_MAX_CALL_DEPTH`], standard prelude loaded.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
    with_prelude: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            with_prelude: true,
        }
    }

    /// Set where `print` and load errors are written.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit nested closure calls. `None` is unlimited.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Whether to evaluate the bundled prelude into the global scope.
    #[must_use]
    pub fn with_prelude(mut self, load: bool) -> Self {
        self.with_prelude = load;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let env = Environment::new();
        builtins::register(&env);

        let mut interpreter = Interpreter {
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(self.max_call_depth),
        };
        if self.with_prelude {
            interpreter.load_prelude();
        }
        interpreter
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
