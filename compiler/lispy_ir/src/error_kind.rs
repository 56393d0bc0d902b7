//! Abstract error categories shared by every pipeline stage.

use std::fmt;

/// Category of a failure, independent of the stage that raised it.
///
/// All categories are unrecoverable: they propagate to the program
/// boundary and end evaluation of the whole input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token stream or malformed special form.
    Syntax,
    /// Symbol not bound in the active environment.
    UnboundSymbol,
    /// Head of an application is not a procedure.
    NotCallable,
    /// Procedure called with the wrong number of arguments.
    ArityMismatch,
    /// A primitive procedure rejected its arguments.
    PrimitiveFailure,
    /// Configured call-depth limit exceeded.
    ResourceExhausted,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Syntax => "syntax error",
            ErrorKind::UnboundSymbol => "unbound symbol",
            ErrorKind::NotCallable => "not callable",
            ErrorKind::ArityMismatch => "arity mismatch",
            ErrorKind::PrimitiveFailure => "primitive failure",
            ErrorKind::ResourceExhausted => "resource exhausted",
        };
        f.write_str(s)
    }
}
