/// The number of passes used when the caller does not choose one.
pub const DEFAULT_PASSES: usize = 5;

/// Options controlling [`simplify_with`](super::simplify_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// The number of passes to run. Exactly this many passes are run, even if the tree stops
    /// changing earlier; zero passes return the input unchanged.
    ///
    /// The default is [`DEFAULT_PASSES`].
    pub passes: usize,

    /// Whether the argument of an applied function is simplified during a pass.
    ///
    /// When unset, function nodes are returned untouched, so any expression nested inside a
    /// function call stays as it was built. This is the default.
    pub simplify_call_args: bool,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            simplify_call_args: false,
        }
    }
}

impl SimplifyOptions {
    /// Wraps the given [`SimplifyOptions`] into a builder for further customization.
    pub fn into_builder(self) -> SimplifyOptionsBuilder {
        SimplifyOptionsBuilder(self)
    }
}

/// Helper struct to build a [`SimplifyOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptionsBuilder(SimplifyOptions);

impl SimplifyOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of passes to run.
    pub fn passes(mut self, passes: usize) -> Self {
        self.0.passes = passes;
        self
    }

    /// Sets whether function arguments are simplified.
    pub fn simplify_call_args(mut self, simplify_call_args: bool) -> Self {
        self.0.simplify_call_args = simplify_call_args;
        self
    }

    /// Builds the [`SimplifyOptions`] struct.
    pub fn build(self) -> SimplifyOptions {
        self.0
    }
}
