use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_stack() {
    let stack = CallStack::new(Some(100));
    assert!(stack.is_empty());
    assert_eq!(stack.depth(), 0);
}

#[test]
fn push_and_pop() {
    let mut stack = CallStack::new(Some(100));
    assert_eq!(stack.push(), Ok(()));
    assert_eq!(stack.depth(), 1);
    assert!(!stack.is_empty());
    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn depth_limit_enforced() {
    let mut stack = CallStack::new(Some(3));
    for _ in 0..3 {
        assert_eq!(stack.push(), Ok(()));
    }
    assert_eq!(
        stack.push(),
        Err(EvalErrorKind::StackExhausted { depth: 3 })
    );
    // Depth unchanged after failed push
    assert_eq!(stack.depth(), 3);
}

#[test]
fn unlimited_depth() {
    let mut stack = CallStack::new(None);
    for _ in 0..100_000 {
        assert_eq!(stack.push(), Ok(()));
    }
    assert_eq!(stack.depth(), 100_000);
}

#[test]
fn default_limit() {
    let stack = CallStack::default();
    assert_eq!(stack.max_depth(), Some(DEFAULT_MAX_CALL_DEPTH));
}
