//! Host-provided primitive procedures.
//!
//! A primitive is a tagged record with a name, an explicit [`Arity`] and a
//! typed function. Arity is checked once, uniformly, before the function
//! runs, so the function bodies can index their arguments directly.

use std::fmt;

use crate::{Environment, EvalError, EvalResult, Interpreter, Value};

/// Function that only needs its arguments.
///
/// An `Err` message is reported as a primitive failure tagged with the
/// primitive's name.
pub type PureFn = fn(&[Value]) -> Result<Value, String>;

/// Function that needs the interpreter, e.g. to call back into procedures
/// or to print.
pub type HostFn = fn(&mut Interpreter, &Environment, &[Value]) -> EvalResult;

#[derive(Copy, Clone, Debug)]
pub enum PrimitiveFn {
    Pure(PureFn),
    Host(HostFn),
}

/// Accepted argument counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    /// Inclusive range.
    Between(usize, usize),
}

impl Arity {
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Between(lo, hi) => (lo..=hi).contains(&count),
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exact(n) => write!(f, "{n} {}", plural(n)),
            Arity::AtLeast(n) => write!(f, "at least {n} {}", plural(n)),
            Arity::Between(lo, hi) => write!(f, "{lo} to {hi} {}", plural(hi)),
        }
    }
}

/// A named host procedure.
#[derive(Debug)]
pub struct Primitive {
    name: &'static str,
    arity: Arity,
    func: PrimitiveFn,
}

impl Primitive {
    pub const fn pure(name: &'static str, arity: Arity, func: PureFn) -> Self {
        Primitive {
            name,
            arity,
            func: PrimitiveFn::Pure(func),
        }
    }

    pub const fn host(name: &'static str, arity: Arity, func: HostFn) -> Self {
        Primitive {
            name,
            arity,
            func: PrimitiveFn::Host(func),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Check arity, then run the function.
    pub fn call(
        &self,
        interpreter: &mut Interpreter,
        env: &Environment,
        args: &[Value],
    ) -> EvalResult {
        if !self.arity.accepts(args.len()) {
            return Err(EvalError::ArityMismatch {
                callee: self.name.to_string(),
                expected: self.arity,
                got: args.len(),
            });
        }

        match self.func {
            PrimitiveFn::Pure(f) => f(args).map_err(|message| EvalError::Primitive {
                primitive: self.name,
                message,
            }),
            PrimitiveFn::Host(f) => f(interpreter, env, args),
        }
    }
}
