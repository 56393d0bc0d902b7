//! Evaluation errors.
//!
//! Every variant is unrecoverable: it propagates out of `eval` and ends the
//! run. Constructors for the common cases live here so call sites stay short.

use lispy_ir::{ErrorKind, Span};

use crate::{Arity, Value};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("unbound symbol `{name}`")]
    UnboundSymbol { name: String, span: Span },

    #[error("cannot call a value of type {type_name}")]
    NotCallable { type_name: &'static str, span: Span },

    #[error("`{callee}` expects {expected}, got {got}")]
    ArityMismatch {
        callee: String,
        expected: Arity,
        got: usize,
    },

    /// A special form with the wrong shape, or an empty application.
    #[error("malformed `{form}`: {reason}")]
    MalformedForm {
        form: &'static str,
        reason: &'static str,
        span: Span,
    },

    /// Raised by a primitive procedure's own semantics.
    #[error("{primitive}: {message}")]
    Primitive {
        primitive: &'static str,
        message: String,
    },

    #[error("call depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::UnboundSymbol { .. } => ErrorKind::UnboundSymbol,
            EvalError::NotCallable { .. } => ErrorKind::NotCallable,
            EvalError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            EvalError::MalformedForm { .. } => ErrorKind::Syntax,
            EvalError::Primitive { .. } => ErrorKind::PrimitiveFailure,
            EvalError::DepthExceeded { .. } => ErrorKind::ResourceExhausted,
        }
    }

    /// Source location, when the error is tied to one.
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::UnboundSymbol { span, .. }
            | EvalError::NotCallable { span, .. }
            | EvalError::MalformedForm { span, .. } => Some(*span),
            EvalError::ArityMismatch { .. }
            | EvalError::Primitive { .. }
            | EvalError::DepthExceeded { .. } => None,
        }
    }
}

#[cold]
pub fn unbound_symbol(name: &str, span: Span) -> EvalError {
    EvalError::UnboundSymbol {
        name: name.to_string(),
        span,
    }
}

#[cold]
pub fn not_callable(value: &Value, span: Span) -> EvalError {
    EvalError::NotCallable {
        type_name: value.type_name(),
        span,
    }
}

#[cold]
pub fn malformed(form: &'static str, reason: &'static str, span: Span) -> EvalError {
    EvalError::MalformedForm { form, reason, span }
}

/// Closure called with the wrong number of arguments.
#[cold]
pub fn closure_arity(expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        callee: "lambda".to_string(),
        expected: Arity::Exact(expected),
        got,
    }
}

/// Failure raised from a host primitive that has interpreter access.
#[cold]
pub fn primitive_failure(primitive: &'static str, message: impl Into<String>) -> EvalError {
    EvalError::Primitive {
        primitive,
        message: message.into(),
    }
}
