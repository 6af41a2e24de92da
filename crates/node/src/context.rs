//! The mutable scope shared by one document render.

use crate::ids::{IdGenerator, IdStrategy};
use materialweb_types::value::lookup_path;
use materialweb_types::{Argument, FormField, Identity, ResolveError, Scope, Translator, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Variables, bound form fields and render services for one render call.
///
/// Writes made by a component are visible to every component rendered after
/// it in document order; there is no lexical scoping. Create one context per
/// top-level render.
#[derive(Debug, Clone)]
pub struct Context {
    vars: HashMap<String, Value>,
    fields: HashMap<String, Arc<dyn FormField>>,
    translator: Arc<dyn Translator>,
    ids: IdGenerator,
    strict_variables: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            vars: HashMap::new(),
            fields: HashMap::new(),
            translator: Arc::new(Identity),
            ids: IdGenerator::default(),
            strict_variables: false,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the keys of a JSON object. Non-object values give an empty context.
    pub fn from_value(value: Value) -> Self {
        let mut context = Self::new();
        context.extend(value);
        context
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.ids = IdGenerator::new(strategy);
        self
    }

    pub fn with_strict_variables(mut self, strict: bool) -> Self {
        self.strict_variables = strict;
        self
    }

    /// Merges the keys of a JSON object into the variables.
    pub fn extend(&mut self, value: Value) {
        match value {
            Value::Object(map) => self.vars.extend(map),
            Value::Null => {}
            other => log::warn!("Ignoring non-object context data: {}", other),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.vars.remove(key)
    }

    /// Looks up a dotted path such as `request.full_path` or `rows.0.name`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let root = self.vars.get(segments.next()?)?;
        lookup_path(root, segments)
    }

    pub fn resolve(&self, argument: &Argument) -> Result<Value, ResolveError> {
        argument.resolve(self)
    }

    /// Registers a form field under the path templates use to refer to it.
    pub fn bind_field(&mut self, path: impl Into<String>, field: Arc<dyn FormField>) {
        self.fields.insert(path.into(), field);
    }

    pub fn field(&self, path: &str) -> Option<Arc<dyn FormField>> {
        self.fields.get(path).cloned()
    }

    pub fn gettext(&self, message: &str) -> String {
        self.translator.gettext(message)
    }

    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    pub fn strict_variables(&self) -> bool {
        self.strict_variables
    }
}

impl Scope for Context {
    fn lookup(&self, path: &str) -> Option<&Value> {
        Context::lookup(self, path)
    }
}
