use crate::error::ParseError;
use crate::parser::TagParser;
use materialweb_node::{Component, NodeList};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Maps public tag names to component types.
///
/// Every component is validated on registration, so a template compiled
/// against a library never hits a mode without a template.
#[derive(Clone, Default)]
pub struct TagLibrary {
    tags: BTreeMap<String, Arc<dyn Component>>,
}

impl TagLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component under its own name.
    pub fn register(&mut self, component: Arc<dyn Component>) -> Result<(), ParseError> {
        let name = component.spec().name.to_string();
        self.register_as(name, component)
    }

    pub fn register_as(&mut self, name: impl Into<String>, component: Arc<dyn Component>) -> Result<(), ParseError> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ParseError::InvalidComponent {
                source: materialweb_node::RenderError::construction(
                    component.spec().name,
                    format!("'{}' is not a valid tag name", name),
                ),
                name,
            });
        }
        component
            .spec()
            .validate()
            .map_err(|source| ParseError::InvalidComponent {
                name: name.clone(),
                source,
            })?;
        if self.tags.insert(name.clone(), component).is_some() {
            log::warn!("Tag '{}' registered twice; the later definition wins", name);
        }
        Ok(())
    }

    pub fn register_all<I>(&mut self, components: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = Arc<dyn Component>>,
    {
        for component in components {
            self.register(component)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Component>> {
        self.tags.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Adds every tag of `other`, replacing tags with the same name.
    pub fn merge(&mut self, other: TagLibrary) {
        self.tags.extend(other.tags);
    }

    /// Compiles template source against this library.
    pub fn parse(&self, source: &str) -> Result<NodeList, ParseError> {
        TagParser::new(self).parse(source)
    }
}

impl fmt::Debug for TagLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagLibrary")
            .field("tags", &self.tags.keys().collect::<Vec<_>>())
            .finish()
    }
}
