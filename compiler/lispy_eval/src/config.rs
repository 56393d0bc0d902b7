//! Evaluator configuration.

/// How a closure call builds its frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scoping {
    /// The closure captures its defining environment when the `lambda` is
    /// evaluated; each call adds a child frame on top of it. Names resolve
    /// by walking outward through parent frames.
    #[default]
    Lexical,
    /// Each call takes a flat copy of the environment active at the call
    /// site and binds the parameters into it. The captured environment is
    /// ignored, which makes free names resolve dynamically.
    FlatCopy,
}

/// Knobs for an [`Interpreter`](crate::Interpreter).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    pub scoping: Scoping,
    /// Maximum nesting of closure calls. `None` relies on stack growth.
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scoping(mut self, scoping: Scoping) -> Self {
        self.scoping = scoping;
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = Some(limit);
        self
    }
}
