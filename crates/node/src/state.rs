//! Per-render scratch data. Built fresh for every render call and dropped at
//! the end of it, so a [`Node`] can be rendered concurrently.

use crate::context::Context;
use crate::error::RenderError;
use crate::node::Node;
use materialweb_types::value::{display, is_truthy};
use materialweb_types::{AttrList, FormField, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The values substituted into a component template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderValues {
    pub id: String,
    pub label: String,
    pub element: String,
    pub tag: String,
    pub classes: Vec<String>,
    pub props: AttrList,
    pub child: String,
    /// Placeholders contributed by component hooks.
    pub extra: BTreeMap<String, String>,
}

impl RenderValues {
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    pub fn extend_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
    }

    pub fn push_prop(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.props.push(key, value);
    }

    /// Sets a placeholder. The built-in names update their dedicated fields.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match key {
            "id" => self.id = value,
            "label" => self.label = value,
            "element" => self.element = value,
            "tag" => self.tag = value,
            "child" => self.child = value,
            "class" => self.classes = value.split_whitespace().map(str::to_string).collect(),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// The text a `{key}` placeholder expands to.
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        let value = match key {
            "id" => Cow::Borrowed(self.id.as_str()),
            "label" => Cow::Borrowed(self.label.as_str()),
            "element" => Cow::Borrowed(self.element.as_str()),
            "tag" => Cow::Borrowed(self.tag.as_str()),
            "child" => Cow::Borrowed(self.child.as_str()),
            "class" => Cow::Owned(self.class_string()),
            "props" => Cow::Owned(self.props.to_html()),
            _ => Cow::Borrowed(self.extra.get(key)?.as_str()),
        };
        Some(value)
    }

    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }
}

/// Everything known about one invocation while it renders.
pub struct RenderState<'n> {
    pub node: &'n Node,
    pub mode: &'static str,
    pub field: Option<Arc<dyn FormField>>,
    pub values: RenderValues,
}

impl<'n> RenderState<'n> {
    pub(crate) fn new(node: &'n Node, mode: &'static str, field: Option<Arc<dyn FormField>>) -> Self {
        Self {
            node,
            mode,
            field,
            values: RenderValues::default(),
        }
    }

    pub fn component(&self) -> &'static str {
        self.node.spec().name
    }

    pub fn is_mode(&self, mode: &str) -> bool {
        self.mode == mode
    }

    /// Resolves a keyword argument. `None` when the invocation does not set it.
    pub fn kwarg(&self, key: &str, context: &Context) -> Result<Option<Value>, RenderError> {
        match self.node.kwarg(key) {
            Some(argument) => Ok(Some(argument.resolve(context)?)),
            None => Ok(None),
        }
    }

    /// Resolves a keyword argument as a flag. Absent counts as `false`.
    pub fn flag(&self, key: &str, context: &Context) -> Result<bool, RenderError> {
        Ok(self.kwarg(key, context)?.is_some_and(|value| is_truthy(&value)))
    }

    /// Resolves a keyword argument to its display text. Absent and falsy
    /// values give `None`.
    pub fn kwarg_string(&self, key: &str, context: &Context) -> Result<Option<String>, RenderError> {
        Ok(self
            .kwarg(key, context)?
            .filter(is_truthy)
            .map(|value| display(&value).into_owned()))
    }

    /// The bound field. Only meaningful for form-aware components.
    pub fn bound_field(&self) -> Result<&Arc<dyn FormField>, RenderError> {
        self.field.as_ref().ok_or_else(|| {
            RenderError::missing_form_field(self.component(), "the component is not form-aware")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_cover_builtins_and_extras() {
        let mut values = RenderValues::default();
        values.set("id", "x1");
        values.extend_classes(["foo", "bar"]);
        values.add_class("mdc-x--on");
        values.push_prop("aria-pressed", "false");
        values.push_prop("aria-pressed", "true");
        values.set("icon", "favorite");

        assert_eq!(values.get("id").as_deref(), Some("x1"));
        assert_eq!(values.get("class").as_deref(), Some("foo bar mdc-x--on"));
        assert_eq!(values.get("props").as_deref(), Some(r#"aria-pressed="true""#));
        assert_eq!(values.get("icon").as_deref(), Some("favorite"));
        assert_eq!(values.get("nope"), None);
    }

    #[test]
    fn setting_class_replaces_the_token_list() {
        let mut values = RenderValues::default();
        values.add_class("a");
        values.set("class", "b  c");
        assert_eq!(values.classes, vec!["b", "c"]);
    }
}
