//! Special forms: lists whose head symbol is interpreted structurally.
//!
//! The head is matched by name before any environment lookup, so binding
//! `if` to a value does not change how `(if ...)` evaluates.

use std::rc::Rc;

use lispy_ir::{Expr, Name, Span};
use tracing::trace;

use super::Interpreter;
use crate::errors::malformed;
use crate::{Closure, Environment, EvalResult, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    /// `(lambda (params...) body)`
    Lambda,
    /// `(if cond then [else])`
    If,
    /// `(define name value)`
    Define,
    /// `(begin expr...)`
    Begin,
}

impl SpecialForm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lambda" => Some(SpecialForm::Lambda),
            "if" => Some(SpecialForm::If),
            "define" => Some(SpecialForm::Define),
            "begin" => Some(SpecialForm::Begin),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Lambda => "lambda",
            SpecialForm::If => "if",
            SpecialForm::Define => "define",
            SpecialForm::Begin => "begin",
        }
    }
}

impl Interpreter {
    /// `args` are the list elements after the head symbol; `span` covers the
    /// whole form.
    pub(super) fn eval_special_form(
        &mut self,
        form: SpecialForm,
        args: &[Expr],
        span: Span,
        env: &Environment,
    ) -> EvalResult {
        match form {
            SpecialForm::Lambda => eval_lambda(args, span, env),
            SpecialForm::If => self.eval_if(args, span, env),
            SpecialForm::Define => self.eval_define(args, span, env),
            SpecialForm::Begin => self.eval_begin(args, env),
        }
    }

    fn eval_if(&mut self, args: &[Expr], span: Span, env: &Environment) -> EvalResult {
        let (cond, then, otherwise) = match args {
            [cond, then] => (cond, then, None),
            [cond, then, otherwise] => (cond, then, Some(otherwise)),
            _ => {
                return Err(malformed(
                    SpecialForm::If.name(),
                    "expected (if cond then [else])",
                    span,
                ));
            }
        };

        if self.eval(cond, env)?.is_truthy() {
            self.eval(then, env)
        } else if let Some(otherwise) = otherwise {
            self.eval(otherwise, env)
        } else {
            Ok(Value::Nil)
        }
    }

    /// Binds in `env` itself: the one place an environment is mutated.
    fn eval_define(&mut self, args: &[Expr], span: Span, env: &Environment) -> EvalResult {
        let [target, value_expr] = args else {
            return Err(malformed(SpecialForm::Define.name(), "expected (define name value)", span));
        };
        let Some(name) = target.as_symbol() else {
            return Err(malformed(SpecialForm::Define.name(), "name must be a symbol", target.span));
        };

        let value = self.eval(value_expr, env)?;
        trace!(name = %name, "define");
        env.define(name.clone(), value);
        Ok(Value::Nil)
    }

    fn eval_begin(&mut self, args: &[Expr], env: &Environment) -> EvalResult {
        let mut result = Value::Nil;
        for expr in args {
            result = self.eval(expr, env)?;
        }
        Ok(result)
    }
}

/// The body is kept unevaluated; `env` is captured for lexical calls.
fn eval_lambda(args: &[Expr], span: Span, env: &Environment) -> EvalResult {
    let [params, body] = args else {
        return Err(malformed(
            SpecialForm::Lambda.name(),
            "expected (lambda (params...) body)",
            span,
        ));
    };
    let Some(param_exprs) = params.as_list() else {
        return Err(malformed(SpecialForm::Lambda.name(), "parameters must be a list", params.span));
    };

    let mut names: Vec<Name> = Vec::with_capacity(param_exprs.len());
    for param in param_exprs {
        let Some(name) = param.as_symbol() else {
            return Err(malformed(
                SpecialForm::Lambda.name(),
                "parameter must be a symbol",
                param.span,
            ));
        };
        if names.contains(name) {
            return Err(malformed(SpecialForm::Lambda.name(), "duplicate parameter", param.span));
        }
        names.push(name.clone());
    }

    let params: Rc<[Name]> = names.into();
    Ok(Value::closure(Closure::new(params, body.clone(), env.clone())))
}
