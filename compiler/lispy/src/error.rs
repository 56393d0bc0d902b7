use lispy_eval::EvalError;
use lispy_ir::{ErrorKind, Span};
use lispy_lexer::LexError;
use lispy_parse::ParseError;

use crate::ErrorPhase;

/// Any failure between source text and a value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("eval error: {0}")]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(e) => e.kind(),
            Error::Parse(e) => e.kind(),
            Error::Eval(e) => e.kind(),
        }
    }

    pub fn phase(&self) -> ErrorPhase {
        match self {
            Error::Lex(_) => ErrorPhase::Lex,
            Error::Parse(_) => ErrorPhase::Parse,
            Error::Eval(_) => ErrorPhase::Runtime,
        }
    }

    /// Source location, when the failing stage knows one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(e) => Some(e.span()),
            Error::Parse(e) => Some(e.span()),
            Error::Eval(e) => e.span(),
        }
    }
}
