use crate::widget::{Widget, render_hidden};
use materialweb_types::{Choice, FormField, WidgetAttrs};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A form field together with its current value.
///
/// Deserializes from JSON such as
/// `{"name": "email", "label": "Email", "widget": "email", "required": true}`;
/// every key except `name` is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundField {
    pub name: String,
    /// Explicit element id. Defaults to `id_<name>`.
    pub id: Option<String>,
    pub label: String,
    pub help_text: String,
    pub required: bool,
    pub disabled: bool,
    pub widget: Widget,
    /// Attributes declared on the widget.
    pub attrs: BTreeMap<String, String>,
    pub choices: Vec<Choice>,
    pub value: Option<String>,
}

impl BoundField {
    pub fn new(name: impl Into<String>, widget: Widget) -> Self {
        Self {
            name: name.into(),
            widget,
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.push(Choice::new(value, label));
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub(crate) fn html_name(&self) -> String {
        self.name.clone()
    }
}

impl FormField for BoundField {
    fn name(&self) -> &str {
        &self.name
    }

    fn id_for_label(&self) -> String {
        self.id.clone().unwrap_or_else(|| format!("id_{}", self.name))
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn help_text(&self) -> &str {
        &self.help_text
    }

    fn required(&self) -> bool {
        self.required
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn choices(&self) -> &[Choice] {
        &self.choices
    }

    fn widget_attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn as_widget(&self, attrs: &WidgetAttrs) -> String {
        self.widget.render(self, attrs)
    }

    fn as_hidden(&self, attrs: &WidgetAttrs) -> String {
        render_hidden(self, attrs)
    }
}
