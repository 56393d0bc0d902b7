//! Lexer errors.

use lispy_ir::{ErrorKind, Span};

/// Failure to tokenize source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexError {
    /// A `"` opened a string that runs to end of input.
    #[error("unterminated string literal starting at byte {}", span.start)]
    UnterminatedString { span: Span },
    /// Source text too long to address with 32-bit spans.
    #[error("source text of {len} bytes exceeds the 4 GiB limit")]
    SourceTooLarge { len: usize },
}

impl LexError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Syntax
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span } => *span,
            LexError::SourceTooLarge { .. } => Span::DUMMY,
        }
    }
}
