//! Parser for lispy.
//!
//! Consumes a [`TokenList`] recursively and builds [`Expr`] trees. Each
//! token opens a nested list (recurse), closes the current one (return to
//! the caller), or is an atom classified in priority order:
//! integer, float, string literal, and finally symbol.

mod error;

use lispy_ir::{Expr, ExprKind, Span, Token, TokenKind, TokenList};
use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

pub use error::ParseError;

/// Parse exactly one top-level list.
///
/// # Errors
///
/// Fails with a [`ParseError`] when the input is empty, does not start with
/// `(`, leaves a list unclosed, or has tokens after the closing `)`.
pub fn parse(tokens: &TokenList) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens.as_slice());
    if parser.is_at_end() {
        return Err(ParseError::Empty);
    }

    let expr = parser.parse_top_level()?;
    if let Some(extra) = parser.peek() {
        return Err(ParseError::TrailingTokens {
            text: extra.text().to_string(),
            span: extra.span,
        });
    }
    Ok(expr)
}

/// Parse a sequence of top-level lists.
///
/// # Errors
///
/// Same conditions as [`parse`], except that further top-level lists are
/// accepted instead of being reported as trailing tokens.
pub fn parse_all(tokens: &TokenList) -> Result<Vec<Expr>, ParseError> {
    let mut parser = Parser::new(tokens.as_slice());
    if parser.is_at_end() {
        return Err(ParseError::Empty);
    }

    let mut forms = Vec::new();
    while !parser.is_at_end() {
        forms.push(parser.parse_top_level()?);
    }
    Ok(forms)
}

/// Classify a single atom token.
///
/// Integers win over floats: an integer-shaped atom that overflows `i64`
/// is an error rather than a float.
pub fn classify_atom(token: &Token) -> Result<Expr, ParseError> {
    let text = token.text();
    let span = token.span;

    if is_integer_shaped(text) {
        return text
            .parse::<i64>()
            .map(|value| Expr::int(value, span))
            .map_err(|_| ParseError::IntegerOutOfRange {
                text: text.to_string(),
                span,
            });
    }

    if let Ok(value) = text.parse::<f64>() {
        return Ok(Expr::float(value, span));
    }

    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return Ok(Expr::string(&text[1..text.len() - 1], span));
    }

    Ok(Expr::symbol(text, span))
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer_shaped(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// A top-level form must open with `(`.
    fn parse_top_level(&mut self) -> Result<Expr, ParseError> {
        match self.bump() {
            Some(token) if token.kind == TokenKind::OpenParen => self.parse_list(token.span),
            Some(token) => Err(ParseError::UnexpectedToken {
                text: token.text().to_string(),
                span: token.span,
            }),
            None => Err(ParseError::Empty),
        }
    }

    /// Parse list elements up to the matching `)`; the `(` is already consumed.
    fn parse_list(&mut self, open: Span) -> Result<Expr, ParseError> {
        self.depth += 1;
        trace!(depth = self.depth, start = open.start, "list");

        let mut items = Vec::new();
        let result = loop {
            let Some(token) = self.bump() else {
                break Err(ParseError::UnclosedList { span: open });
            };
            match token.kind {
                TokenKind::OpenParen => {
                    match ensure_sufficient_stack(|| self.parse_list(token.span)) {
                        Ok(nested) => items.push(nested),
                        Err(e) => break Err(e),
                    }
                }
                TokenKind::CloseParen => {
                    break Ok(Expr::new(
                        ExprKind::List(items.into()),
                        open.to(token.span),
                    ));
                }
                TokenKind::Atom => match classify_atom(token) {
                    Ok(atom) => items.push(atom),
                    Err(e) => break Err(e),
                },
            }
        };

        self.depth -= 1;
        result
    }
}
