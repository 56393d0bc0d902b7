//! Runtime values.
//!
//! Heap-backed variants (`Str`, `List`, `Closure`) are reference counted, so
//! cloning a value never copies its contents. Values are never mutated in
//! place; the only mutation in the evaluator is rebinding a name.

use std::fmt;
use std::rc::Rc;

use lispy_ir::{Expr, FloatDisplay, Name};

use crate::{Environment, Primitive};

/// Runtime value produced by evaluation.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    Bool(bool),
    Nil,
    List(Rc<[Value]>),
    Closure(Rc<Closure>),
    Primitive(&'static Primitive),
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::from(items))
    }

    pub fn closure(closure: Closure) -> Self {
        Value::Closure(Rc::new(closure))
    }

    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Nil => "nil",
            Value::List(_) => "list",
            Value::Closure(_) => "closure",
            Value::Primitive(_) => "primitive",
        }
    }

    /// Everything except boolean `false` counts as true.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    #[inline]
    pub fn is_procedure(&self) -> bool {
        matches!(self, Value::Closure(_) | Value::Primitive(_))
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Identity comparison (`eq?`).
    ///
    /// Scalars compare by value; strings, lists and procedures by reference.
    pub fn is_identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Str(a), Value::Str(b)) => Rc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Primitive(a), Value::Primitive(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }

    /// Structural comparison (`equal?`, `=`).
    ///
    /// Integers and floats compare numerically across the two kinds.
    #[expect(clippy::cast_precision_loss, reason = "mixed int/float comparison")]
    pub fn structural_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => *a as f64 == *b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.structural_eq(y))
            }
            _ => self == other,
        }
    }

    /// Display form used inside lists: strings keep their quotes.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "\"{s}\""),
            other => fmt::Display::fmt(other, f),
        }
    }
}

/// Same variant and same contents; procedures compare by reference.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Primitive(a), Value::Primitive(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{}", FloatDisplay(*v)),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str(")")
            }
            Value::Closure(closure) => write!(f, "{closure}"),
            Value::Primitive(p) => write!(f, "<primitive {}>", p.name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "Int({v})"),
            Value::Float(v) => write!(f, "Float({v:?})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Nil => f.write_str("Nil"),
            Value::List(items) => f.debug_tuple("List").field(&&items[..]).finish(),
            Value::Closure(closure) => write!(f, "Closure({closure})"),
            Value::Primitive(p) => write!(f, "Primitive({})", p.name()),
        }
    }
}

/// A user procedure created by `lambda`.
///
/// Holds the parameter names, the unevaluated body and the environment
/// that was active when the `lambda` form was evaluated.
pub struct Closure {
    params: Rc<[Name]>,
    body: Expr,
    env: Environment,
}

impl Closure {
    pub fn new(params: Rc<[Name]>, body: Expr, env: Environment) -> Self {
        Closure { params, body, env }
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn body(&self) -> &Expr {
        &self.body
    }

    /// The defining environment.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// The captured environment is left out: it can contain this closure.
impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<lambda ({})>", self.params.join(" "))
    }
}
