//! Stack safety for deep recursion.
//!
//! Parsing and evaluation are plain recursive descent: recursion depth
//! follows list nesting and closure call depth. Wrapping each recursive
//! step in [`ensure_sufficient_stack`] grows the stack on demand instead of
//! overflowing it.
//!
//! - **Red zone**: 100KB. If less than this remains, the stack is grown.
//! - **Growth size**: 1MB per growth.

const RED_ZONE: usize = 100 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(expr, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
