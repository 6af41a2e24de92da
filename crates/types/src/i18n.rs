//! The translation collaborator: plain string in, string out.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub trait Translator: fmt::Debug + Send + Sync {
    fn gettext(&self, message: &str) -> String;
}

/// Returns every message untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translator for Identity {
    fn gettext(&self, message: &str) -> String {
        message.to_string()
    }
}

/// A message catalog loaded from JSON (`{"Share": "Del"}`).
///
/// Unknown messages fall back to the original text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, message: impl Into<String>, translation: impl Into<String>) {
        self.messages.insert(message.into(), translation.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn gettext(&self, message: &str) -> String {
        self.messages
            .get(message)
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}
