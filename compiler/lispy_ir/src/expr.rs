//! Parse tree for lispy programs.
//!
//! Expressions are immutable once parsed. List children live behind an
//! `Rc<[Expr]>` so that closures can hold on to their body without copying
//! the subtree.

use std::fmt;
use std::rc::Rc;

use crate::{FloatDisplay, Span};

/// An identifier as written in source.
pub type Name = Rc<str>;

/// Expression node variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Int(i64),
    Float(f64),
    /// String literal, delimiting quotes already stripped.
    Str(Rc<str>),
    /// Symbol reference, resolved against the environment at evaluation time.
    Symbol(Name),
    List(Rc<[Expr]>),
}

/// A parsed expression with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn int(value: i64, span: Span) -> Self {
        Expr::new(ExprKind::Int(value), span)
    }

    pub fn float(value: f64, span: Span) -> Self {
        Expr::new(ExprKind::Float(value), span)
    }

    pub fn string(value: &str, span: Span) -> Self {
        Expr::new(ExprKind::Str(Rc::from(value)), span)
    }

    pub fn symbol(name: &str, span: Span) -> Self {
        Expr::new(ExprKind::Symbol(Rc::from(name)), span)
    }

    pub fn list(items: Vec<Expr>, span: Span) -> Self {
        Expr::new(ExprKind::List(Rc::from(items)), span)
    }

    /// The symbol name, if this is a symbol reference.
    #[inline]
    pub fn as_symbol(&self) -> Option<&Name> {
        match &self.kind {
            ExprKind::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// The list elements, if this is a list.
    #[inline]
    pub fn as_list(&self) -> Option<&[Expr]> {
        match &self.kind {
            ExprKind::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Renders the expression back to source form.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Int(v) => write!(f, "{v}"),
            ExprKind::Float(v) => write!(f, "{}", FloatDisplay(*v)),
            ExprKind::Str(s) => write!(f, "\"{s}\""),
            ExprKind::Symbol(name) => f.write_str(name),
            ExprKind::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}
