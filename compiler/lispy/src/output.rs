//! Result type for a captured run.

use crate::{Error, Value};

/// Which stage produced the error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorPhase {
    Lex,
    Parse,
    Runtime,
}

/// Outcome of [`run_captured`](crate::run_captured).
#[derive(Clone, Debug)]
pub struct RunOutput {
    /// Value of the last top-level form, or the error that stopped the run.
    pub result: Result<Value, Error>,
    /// Captured `write-line` output.
    pub printed: String,
}

impl RunOutput {
    #[inline]
    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    /// Display form of the final value; empty on failure.
    pub fn output(&self) -> String {
        self.result
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn error_phase(&self) -> Option<ErrorPhase> {
        self.result.as_ref().err().map(Error::phase)
    }
}
