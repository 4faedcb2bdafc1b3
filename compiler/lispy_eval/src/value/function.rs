//! Function values: native builtins and user closures.

use std::fmt;

use super::{fmt_list, Value};
use crate::errors::BuiltinResult;
use crate::{Environment, Interpreter};

/// Native operation signature.
///
/// Receives the interpreter (for nested evaluation and output), the calling
/// environment, and the already-evaluated arguments, which it owns.
pub type BuiltinFn = fn(&mut Interpreter, &Environment, Vec<Value>) -> BuiltinResult;

/// A native operation, identified by the name it is registered under.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    /// The symbol this builtin is registered under.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub(crate) fn invoke(
        self,
        interpreter: &mut Interpreter,
        env: &Environment,
        args: Vec<Value>,
    ) -> BuiltinResult {
        (self.func)(interpreter, env, args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// A user-defined function.
///
/// `formals` holds the parameters still waiting for arguments; partial
/// application removes the bound ones and stores their values in `env`.
pub struct Closure {
    pub(crate) formals: Vec<Value>,
    pub(crate) body: Vec<Value>,
    pub(crate) env: Environment,
}

impl Closure {
    /// A closure over a fresh, empty, parentless environment.
    pub fn new(formals: Vec<Value>, body: Vec<Value>) -> Self {
        Closure {
            formals,
            body,
            env: Environment::new(),
        }
    }

    /// Parameters not yet bound.
    #[inline]
    pub fn formals(&self) -> &[Value] {
        &self.formals
    }

    #[inline]
    pub fn body(&self) -> &[Value] {
        &self.body
    }

    /// The closure's own scope (bound formals).
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

/// Deep copy: the captured scope is snapshotted, not shared.
impl Clone for Closure {
    fn clone(&self) -> Self {
        Closure {
            formals: self.formals.clone(),
            body: self.body.clone(),
            env: self.env.snapshot(),
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("formals", &self.formals)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Either kind of callable value.
#[derive(Clone, Debug)]
pub enum Function {
    Builtin(Builtin),
    Closure(Closure),
}

impl Function {
    /// Identity comparison.
    ///
    /// A builtin equals only itself (same registered name); a closure equals
    /// only the same closure object, i.e. the same captured scope.
    pub fn same_function(&self, other: &Function) -> bool {
        match (self, other) {
            (Function::Builtin(a), Function::Builtin(b)) => a.name == b.name,
            (Function::Closure(a), Function::Closure(b)) => a.env.ptr_eq(&b.env),
            _ => false,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(_) => write!(f, "<builtin>"),
            Function::Closure(closure) => {
                write!(f, "(\\ ")?;
                fmt_list(f, '{', &closure.formals, '}')?;
                write!(f, " ")?;
                fmt_list(f, '{', &closure.body, '}')?;
                write!(f, ")")
            }
        }
    }
}
