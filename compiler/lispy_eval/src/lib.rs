//! Lispy Eval - tree-walking evaluator for lispy expression trees.
//!
//! # Architecture
//!
//! - `Value`: runtime values, including closures and primitive procedures
//! - `Environment`: name bindings, one frame per closure call
//! - `Interpreter`: recursive `eval`/`apply` with special-form dispatch
//! - `PRIMITIVES`: the base environment of host-provided procedures
//! - `EvalConfig`: scoping discipline and call-depth limit
//! - `PrintHandler`: destination for `write-line` output

mod config;
mod environment;
pub mod errors;
mod interpreter;
mod prelude;
mod primitive;
mod print_handler;
mod value;

pub use config::{EvalConfig, Scoping};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, SpecialForm};
pub use prelude::{install_prelude, PRIMITIVES};
pub use primitive::{Arity, HostFn, Primitive, PrimitiveFn, PureFn};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Closure, Value};
