//! Name bindings for the interpreter.
//!
//! An [`Environment`] is a handle to one frame of bindings plus an optional
//! parent frame. The global environment is a frame without a parent;
//! [`Environment::derive`] stacks a call frame on top of an existing one.
//! [`Environment::flat_copy`] instead builds a parentless frame holding a
//! copy of every visible binding.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lispy_ir::{Name, Span};

use crate::errors::unbound_symbol;
use crate::{EvalResult, Value};

/// Single-threaded shared cell for frames.
///
/// Wraps `Rc<RefCell<T>>` so every frame allocation goes through
/// [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same frame.
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

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One frame of bindings.
#[derive(Clone, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Insert or overwrite a binding in this frame.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look a name up here, then in the parent frames.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        let mut next = self.parent.clone();
        while let Some(scope) = next {
            let scope = scope.borrow();
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            next = scope.parent.clone();
        }
        None
    }

    /// Bindings of this frame only.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Handle to a frame and, through it, its chain of parents.
///
/// Cloning the handle shares the frame: a `define` through one clone is
/// visible through every other.
#[derive(Clone, Default)]
pub struct Environment {
    frame: LocalScope<Scope>,
}

impl Environment {
    /// An empty root environment. See [`crate::install_prelude`] for the
    /// primitives.
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.frame.borrow().lookup(name)
    }

    /// Like [`lookup`](Self::lookup), failing with an unbound-symbol error.
    pub fn resolve(&self, name: &str, span: Span) -> EvalResult {
        self.lookup(name).ok_or_else(|| unbound_symbol(name, span))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Insert or overwrite `name` in this frame. Parent frames are untouched.
    pub fn define(&self, name: impl Into<Name>, value: Value) {
        self.frame.borrow_mut().define(name.into(), value);
    }

    /// New child frame over `self`, holding `bindings`.
    #[must_use]
    pub fn derive(&self, bindings: impl IntoIterator<Item = (Name, Value)>) -> Environment {
        let mut scope = Scope::with_parent(self.frame.clone());
        for (name, value) in bindings {
            scope.define(name, value);
        }
        Environment {
            frame: LocalScope::new(scope),
        }
    }

    /// New parentless frame holding every binding visible from `self`,
    /// then `bindings` on top.
    #[must_use]
    pub fn flat_copy(&self, bindings: impl IntoIterator<Item = (Name, Value)>) -> Environment {
        let mut chain = vec![self.frame.clone()];
        let mut next = self.frame.borrow().parent.clone();
        while let Some(scope) = next {
            next = scope.borrow().parent.clone();
            chain.push(scope);
        }

        let mut scope = Scope::new();
        // Outermost first so inner frames shadow outer ones.
        for frame in chain.iter().rev() {
            for (name, value) in &frame.borrow().bindings {
                scope.define(name.clone(), value.clone());
            }
        }
        for (name, value) in bindings {
            scope.define(name, value);
        }
        Environment {
            frame: LocalScope::new(scope),
        }
    }

    /// Number of frames from this one to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut next = self.frame.borrow().parent.clone();
        while let Some(scope) = next {
            depth += 1;
            next = scope.borrow().parent.clone();
        }
        depth
    }

    /// Names bound in this frame, sorted.
    pub fn local_names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.frame.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.frame.ptr_eq(&other.frame)
    }
}

// Values are left out: closures can refer back to this environment.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .field("names", &self.local_names())
            .finish()
    }
}
