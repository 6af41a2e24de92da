use materialweb_node::{Context, IdStrategy};

/// Settings applied to every context an [`Environment`](crate::Environment) creates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// How components without a bound field get their element ids.
    pub id_strategy: IdStrategy,
    /// When set, a reference that resolves to nothing is an error instead of
    /// rendering as an empty value.
    pub strict_variables: bool,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Shorthand for `IdStrategy::Sequential`, for reproducible output.
    pub fn with_sequential_ids(self, prefix: impl Into<String>) -> Self {
        self.with_id_strategy(IdStrategy::Sequential { prefix: prefix.into() })
    }

    pub fn with_strict_variables(mut self, strict: bool) -> Self {
        self.strict_variables = strict;
        self
    }

    pub(crate) fn apply(&self, context: Context) -> Context {
        context
            .with_id_strategy(self.id_strategy.clone())
            .with_strict_variables(self.strict_variables)
    }
}
