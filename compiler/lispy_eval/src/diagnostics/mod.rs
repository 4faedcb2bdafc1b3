//! Call-depth tracking for the evaluator.
//!
//! Every re-entry into the evaluator pushes onto the [`CallStack`] and pops
//! afterwards: saturated closure bodies, and the code run by `eval`, `if`
//! and `load`. Runaway recursion therefore stops at a configured depth with
//! a `Stack Exhausted!` error value instead of growing the native stack
//! without bound.

use crate::errors::EvalErrorKind;

/// Depth used when the interpreter is built without an explicit limit.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Live evaluation depth for the interpreter.
///
/// # Example
///
/// ```ignore
/// let mut stack = CallStack::new(Some(200));
/// stack.push()?;
/// // ... evaluate closure body ...
/// stack.pop();
/// ```
#[derive(Clone, Debug)]
pub struct CallStack {
    depth: usize,
    max_depth: Option<usize>,
}

impl CallStack {
    /// Create an empty call stack with the given depth limit.
    ///
    /// `max_depth` is `None` for unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    /// Enter a call, checking the depth limit.
    ///
    /// The depth is unchanged on failure.
    pub fn push(&mut self) -> Result<(), EvalErrorKind> {
        if let Some(max) = self.max_depth {
            if self.depth >= max {
                return Err(EvalErrorKind::StackExhausted { depth: max });
            }
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave the most recent call.
    pub fn pop(&mut self) {
        debug_assert!(self.depth > 0, "CallStack::pop() called on empty stack");
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_CALL_DEPTH))
    }
}

#[cfg(test)]
mod tests;
