//! Stack safety for the recursive walks of the Lispy interpreter.
//!
//! The parser descends once per nested list, the reader once per syntax
//! node, and the evaluator once per nested expression and per closure body.
//! User programs such as a naive `fib` or a recursive `len` drive the
//! evaluator as deep as the program asks, so every one of those walks wraps
//! its recursive step in [`ensure_sufficient_stack`].
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, a fresh segment
/// is allocated before calling `f`.
///
/// ```text
/// fn eval(&mut self, env: &Environment, value: Value) -> Value {
///     ensure_sufficient_stack(|| match value {
///         Value::SExpr(items) => self.eval_sexpr(env, items),
///         other => other,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
