//! Lispy - a small Lisp interpreter.
//!
//! This crate wires the stages together: source text is tokenized, parsed
//! into expression trees and evaluated in a global environment seeded with
//! the base primitives.
//!
//! # Usage
//!
//! ```
//! let value = lispy::run("(begin (define sq (lambda (x) (* x x))) (sq 7))")?;
//! assert_eq!(value.to_string(), "49");
//! # Ok::<(), lispy::Error>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! lispy_ir, lispy_stack
//!          ↓
//! lispy_lexer → lispy_parse → lispy_eval
//!                    ↓
//!                  lispy  ← this crate
//! ```

mod error;
mod output;
mod pipeline;

pub use error::Error;
pub use output::{ErrorPhase, RunOutput};
pub use pipeline::{read, run, run_captured, run_in};

pub use lispy_eval::{EvalConfig, Interpreter, InterpreterBuilder, Scoping, Value};
pub use lispy_ir::{ErrorKind, Span};
