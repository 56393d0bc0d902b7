//! Token types produced by the lexer.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// Lexical category of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Any other run of text: numbers, symbols and quoted strings
    /// (quotes included). Classification happens in the parser.
    Atom,
}

/// A single lexical unit with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    text: Box<str>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Box<str>>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn open_paren(span: Span) -> Self {
        Token::new(TokenKind::OpenParen, "(", span)
    }

    pub fn close_paren(span: Span) -> Self {
        Token::new(TokenKind::CloseParen, ")", span)
    }

    /// The exact source text of the token.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered sequence of tokens for one source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token texts in order, mostly useful for assertions.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::text).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}
