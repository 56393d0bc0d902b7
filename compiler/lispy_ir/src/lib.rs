//! Lispy IR - shared data types for the lispy interpreter pipeline.
//!
//! Every stage of the pipeline speaks in terms of the types defined here:
//! - `Span`: byte range into the source text
//! - `Token`, `TokenKind`, `TokenList`: lexer output, parser input
//! - `Expr`, `ExprKind`: parse tree consumed by the evaluator
//! - `FloatDisplay`: the decimal rendering every float shares
//! - `ErrorKind`: the abstract error categories every stage reports

mod error_kind;
mod expr;
mod float;
mod span;
mod token;

pub use error_kind::ErrorKind;
pub use expr::{Expr, ExprKind, Name};
pub use float::FloatDisplay;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
