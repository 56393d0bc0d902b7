//! `InterpreterBuilder` for creating interpreters with non-default settings.

use super::Interpreter;
use crate::{install_prelude, stdout_handler, Environment, EvalConfig, Scoping, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: lexical scoping, no call-depth limit, output to stdout, and a
/// fresh global environment holding the base primitives.
pub struct InterpreterBuilder {
    env: Option<Environment>,
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
    prelude: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            env: None,
            config: EvalConfig::default(),
            print_handler: None,
            prelude: true,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn scoping(mut self, scoping: Scoping) -> Self {
        self.config.scoping = scoping;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, limit: usize) -> Self {
        self.config.max_call_depth = Some(limit);
        self
    }

    /// Use `env` as the global environment instead of a fresh one.
    ///
    /// The base primitives are still installed into it unless
    /// [`without_prelude`](Self::without_prelude) is set.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Skip installing the base primitives.
    #[must_use]
    pub fn without_prelude(mut self) -> Self {
        self.prelude = false;
        self
    }

    pub fn build(self) -> Interpreter {
        let global = self.env.unwrap_or_default();
        if self.prelude {
            install_prelude(&global);
        }
        Interpreter {
            global,
            config: self.config,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
