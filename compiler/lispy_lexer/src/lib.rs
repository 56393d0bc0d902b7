//! Lexer for lispy.
//!
//! A single left-to-right scan with one "inside a string" flag and one
//! accumulator. Outside strings, whitespace separates, parentheses are
//! tokens of their own, and everything else accumulates into an atom that
//! is flushed as soon as the next character is a delimiter (or input ends).
//! A `"` toggles string mode; the quotes stay in the token text, and inside
//! a string every character is taken verbatim. There are no escapes.

mod error;

use lispy_ir::{Span, Token, TokenKind, TokenList};

pub use error::LexError;

/// Tokenize `source` into an ordered token list.
///
/// # Errors
///
/// - [`LexError::UnterminatedString`] when a `"` is never closed.
/// - [`LexError::SourceTooLarge`] when byte offsets would not fit a [`Span`].
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::SourceTooLarge { len: source.len() });
    }

    let tokens = Scanner::new(source).run()?;
    tracing::trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Whitespace outside string literals.
#[inline]
pub fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Characters that end an atom without being part of it.
#[inline]
fn is_delimiter(ch: char) -> bool {
    is_separator(ch) || ch == '(' || ch == ')'
}

struct Scanner<'a> {
    source: &'a str,
    tokens: TokenList,
    in_string: bool,
    /// Byte offset where the pending token began.
    start: Option<usize>,
    /// Byte offset of the opening quote of the current string.
    string_start: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            source,
            tokens: TokenList::new(),
            in_string: false,
            start: None,
            string_start: 0,
        }
    }

    fn run(mut self) -> Result<TokenList, LexError> {
        let mut chars = self.source.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            let end = pos + ch.len_utf8();

            match ch {
                '"' if self.in_string => {
                    self.in_string = false;
                    self.flush(end);
                }
                '"' => {
                    self.in_string = true;
                    self.string_start = pos;
                    self.start.get_or_insert(pos);
                }
                // String bodies are taken verbatim; separators are dropped.
                _ if self.in_string || is_separator(ch) => {}
                '(' => self.tokens.push(Token::open_paren(span(pos, end))),
                ')' => self.tokens.push(Token::close_paren(span(pos, end))),
                _ => {
                    self.start.get_or_insert(pos);
                    let at_boundary = chars.peek().map_or(true, |&(_, next)| is_delimiter(next));
                    if at_boundary {
                        self.flush(end);
                    }
                }
            }
        }

        if self.in_string {
            return Err(LexError::UnterminatedString {
                span: span(self.string_start, self.source.len()),
            });
        }

        Ok(self.tokens)
    }

    /// Emit the pending atom ending at `end`.
    fn flush(&mut self, end: usize) {
        if let Some(start) = self.start.take() {
            let text = &self.source[start..end];
            self.tokens
                .push(Token::new(TokenKind::Atom, text, span(start, end)));
        }
    }
}

/// Offsets were checked against `u32::MAX` up front.
#[inline]
fn span(start: usize, end: usize) -> Span {
    Span::from_range(start..end).unwrap_or(Span::DUMMY)
}
