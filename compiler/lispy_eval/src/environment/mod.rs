//! Environment for symbol scoping in the interpreter.
//!
//! An [`Environment`] is a handle to one scope; scopes link to their parent,
//! forming the chain that lookups walk. The root of the chain is the global
//! scope holding the builtins and every `def`.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::errors::EvalErrorKind;
use crate::value::Value;

/// A single-threaded, shared, interior-mutable cell.
///
/// All scope allocations go through [`LocalScope::new`]. Evaluation is
/// single-threaded, so this is `Rc` and not `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope: local bindings plus the link to the enclosing scope.
pub struct Scope {
    /// One entry per name; a later `put` overwrites.
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

impl Scope {
    fn new(parent: Option<Environment>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent,
        }
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Scope")
            .field("bindings", &names)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Shared handle to a scope.
///
/// Cloning the handle shares the scope; use [`Environment::snapshot`] for an
/// independent copy.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create an empty scope with no parent.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::new(None)))
    }

    /// Create an empty scope whose parent is `parent`.
    #[cfg(test)]
    pub(crate) fn with_parent(parent: &Environment) -> Self {
        Environment(LocalScope::new(Scope::new(Some(parent.clone()))))
    }

    /// Look up `name`, walking outward through parents.
    ///
    /// Returns a copy of the stored value.
    pub fn get(&self, name: &str) -> Result<Value, EvalErrorKind> {
        let mut scope = self.clone();
        loop {
            let parent = {
                let inner = scope.0.borrow();
                if let Some(value) = inner.bindings.get(name) {
                    return Ok(value.clone());
                }
                inner.parent.clone()
            };
            match parent {
                Some(parent) => scope = parent,
                None => {
                    return Err(EvalErrorKind::UnboundSymbol {
                        name: name.to_string(),
                    })
                }
            }
        }
    }

    /// Bind `name` in this scope only, overwriting any local binding.
    pub fn put(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Bind `name` in the root scope of the chain.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.root().put(name, value);
    }

    /// The topmost ancestor (the scope with no parent).
    pub fn root(&self) -> Environment {
        let mut scope = self.clone();
        while let Some(parent) = scope.parent() {
            scope = parent;
        }
        scope
    }

    /// New scope with the same parent and a copy of every local binding.
    #[must_use]
    pub fn snapshot(&self) -> Environment {
        let inner = self.0.borrow();
        Environment(LocalScope::new(Scope {
            bindings: inner.bindings.clone(),
            parent: inner.parent.clone(),
        }))
    }

    #[inline]
    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// Relink this scope under `parent`.
    pub fn set_parent(&self, parent: &Environment) {
        self.0.borrow_mut().parent = Some(parent.clone());
    }

    /// Number of bindings held locally.
    pub fn len(&self) -> usize {
        self.0.borrow().bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(scope) => scope.fmt(f),
            Err(_) => f.write_str("Scope(<borrowed>)"),
        }
    }
}
