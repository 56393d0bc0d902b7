//! Source text in, value out: tokenize → parse → evaluate.

use lispy_eval::{buffer_handler, EvalConfig, Interpreter};
use lispy_ir::Expr;

use crate::{Error, RunOutput, Value};

/// Tokenize and parse every top-level form in `source`.
///
/// Blank source is an empty program.
pub fn read(source: &str) -> Result<Vec<Expr>, Error> {
    let tokens = lispy_lexer::tokenize(source)?;
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    let forms = lispy_parse::parse_all(&tokens)?;
    tracing::debug!(forms = forms.len(), "read source");
    Ok(forms)
}

/// Evaluate `source` in a fresh interpreter with the default configuration.
///
/// Yields the value of the last top-level form, or `nil` for a source with
/// no forms.
pub fn run(source: &str) -> Result<Value, Error> {
    let mut interpreter = Interpreter::new();
    run_in(&mut interpreter, source)
}

/// Evaluate `source` in an existing interpreter, keeping its global
/// definitions for later runs.
pub fn run_in(interpreter: &mut Interpreter, source: &str) -> Result<Value, Error> {
    let forms = read(source)?;
    Ok(interpreter.eval_program(&forms)?)
}

/// Evaluate `source` with `config`, capturing `write-line` output instead
/// of printing it.
pub fn run_captured(source: &str, config: EvalConfig) -> RunOutput {
    let print_handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .config(config)
        .print_handler(print_handler.clone())
        .build();

    let result = run_in(&mut interpreter, source);
    RunOutput {
        result,
        printed: print_handler.get_output(),
    }
}
