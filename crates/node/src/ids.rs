use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How fresh element ids are produced for components without a bound field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// 32 lowercase hex digits of a random UUID v4.
    #[default]
    Uuid,
    /// `<prefix>1`, `<prefix>2`, ... counted per context. Useful for
    /// snapshot tests and reproducible output.
    Sequential { prefix: String },
}

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    strategy: IdStrategy,
    issued: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            issued: 0,
        }
    }

    pub fn strategy(&self) -> &IdStrategy {
        &self.strategy
    }

    pub fn next_id(&mut self) -> String {
        self.issued += 1;
        match &self.strategy {
            IdStrategy::Uuid => Uuid::new_v4().simple().to_string(),
            IdStrategy::Sequential { prefix } => format!("{}{}", prefix, self.issued),
        }
    }
}
