//! Parser errors.

use lispy_ir::{ErrorKind, Span};

/// Malformed token stream.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// No tokens at all.
    #[error("expected `(`, found end of input")]
    Empty,
    /// A top-level form that does not start with `(`, including a stray `)`.
    #[error("unexpected token `{text}` at {span}")]
    UnexpectedToken { text: String, span: Span },
    /// Input ran out before the list opened at `span` was closed.
    #[error("unclosed list opened at byte {}", span.start)]
    UnclosedList { span: Span },
    /// Tokens after the single top-level form.
    #[error("unexpected `{text}` after the top-level form at {span}")]
    TrailingTokens { text: String, span: Span },
    /// Integer literal that does not fit in 64 bits.
    #[error("integer literal `{text}` out of range at {span}")]
    IntegerOutOfRange { text: String, span: Span },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Syntax
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Empty => Span::DUMMY,
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnclosedList { span }
            | ParseError::TrailingTokens { span, .. }
            | ParseError::IntegerOutOfRange { span, .. } => *span,
        }
    }
}
