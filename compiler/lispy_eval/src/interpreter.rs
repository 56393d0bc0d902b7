//! The tree-walking interpreter.
//!
//! `eval` dispatches on the static shape of an expression: literals evaluate
//! to themselves, symbols are looked up, and lists are either one of the
//! special forms (`lambda`, `if`, `define`, `begin`) or a procedure
//! application. `apply` runs a primitive directly, or evaluates a closure
//! body in a fresh frame built according to the configured [`Scoping`].

mod builder;
mod special_forms;

use lispy_ir::{Expr, ExprKind, Span};
use lispy_stack::ensure_sufficient_stack;

use crate::errors::{closure_arity, malformed, not_callable};
use crate::{
    Closure, Environment, EvalConfig, EvalError, EvalResult, Scoping, SharedPrintHandler, Value,
};

pub use builder::InterpreterBuilder;
pub use special_forms::SpecialForm;

/// Evaluates expressions against environments.
pub struct Interpreter {
    global: Environment,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
    /// Closure calls currently in progress.
    call_depth: usize,
}

impl Interpreter {
    /// Interpreter with the default configuration and the base primitives.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The environment top-level forms are evaluated in.
    #[inline]
    pub fn global(&self) -> &Environment {
        &self.global
    }

    #[inline]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate one top-level form in the global environment.
    pub fn eval_top_level(&mut self, expr: &Expr) -> EvalResult {
        let global = self.global.clone();
        self.eval(expr, &global)
    }

    /// Evaluate top-level forms in order, yielding the last value
    /// (`nil` when there are none).
    pub fn eval_program(&mut self, forms: &[Expr]) -> EvalResult {
        let mut result = Value::Nil;
        for form in forms {
            result = self.eval_top_level(form)?;
        }
        Ok(result)
    }

    /// Evaluate `expr` in `env`.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(v) => Ok(Value::Int(*v)),
            ExprKind::Float(v) => Ok(Value::Float(*v)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Symbol(name) => env.resolve(name, expr.span),
            ExprKind::List(items) => self.eval_list(items, expr.span, env),
        }
    }

    fn eval_list(&mut self, items: &[Expr], span: Span, env: &Environment) -> EvalResult {
        let Some((head, rest)) = items.split_first() else {
            return Err(malformed("application", "cannot evaluate an empty list", span));
        };

        if let Some(form) = head.as_symbol().and_then(|name| SpecialForm::from_name(name)) {
            return self.eval_special_form(form, rest, span, env);
        }

        let callee = self.eval(head, env)?;
        if !callee.is_procedure() {
            return Err(not_callable(&callee, head.span));
        }

        let args = rest
            .iter()
            .map(|arg| self.eval(arg, env))
            .collect::<Result<Vec<_>, _>>()?;
        self.apply(&callee, &args, env)
    }

    /// Call `callee` with already-evaluated `args`.
    ///
    /// `env` is the environment active at the call site. Closures only use it
    /// under [`Scoping::FlatCopy`].
    #[tracing::instrument(level = "debug", skip_all, fields(callee = %callee, args = args.len()))]
    pub fn apply(&mut self, callee: &Value, args: &[Value], env: &Environment) -> EvalResult {
        match callee {
            Value::Primitive(primitive) => primitive.call(self, env, args),
            Value::Closure(closure) => self.call_closure(closure, args, env),
            other => Err(not_callable(other, Span::DUMMY)),
        }
    }

    fn call_closure(
        &mut self,
        closure: &Closure,
        args: &[Value],
        call_site: &Environment,
    ) -> EvalResult {
        if args.len() != closure.arity() {
            return Err(closure_arity(closure.arity(), args.len()));
        }

        if let Some(limit) = self.config.max_call_depth {
            if self.call_depth >= limit {
                return Err(EvalError::DepthExceeded { limit });
            }
        }

        let bindings = closure.params().iter().cloned().zip(args.iter().cloned());
        let frame = match self.config.scoping {
            Scoping::Lexical => closure.env().derive(bindings),
            Scoping::FlatCopy => call_site.flat_copy(bindings),
        };

        self.call_depth += 1;
        let result = self.eval(closure.body(), &frame);
        self.call_depth -= 1;
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
