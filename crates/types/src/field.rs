//! The interface of the form-field collaborator.

use crate::attrs::WidgetAttrs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One option of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A form field bound to its data, as seen by a form-aware component.
///
/// Components never render `<input>` elements themselves; they assemble
/// attributes and ask the field to render its own widget.
pub trait FormField: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// The id the field's `<label for=...>` must point at.
    fn id_for_label(&self) -> String;

    fn label(&self) -> &str;

    /// Help text, empty when the field has none.
    fn help_text(&self) -> &str;

    fn required(&self) -> bool;

    fn disabled(&self) -> bool;

    fn choices(&self) -> &[Choice];

    /// Attributes declared on the widget itself (`class`, `placeholder`, ...).
    fn widget_attrs(&self) -> &BTreeMap<String, String>;

    /// The current value in its string form, if any.
    fn value(&self) -> Option<&str>;

    /// Renders the interactive widget with `attrs` merged over its declared attributes.
    fn as_widget(&self, attrs: &WidgetAttrs) -> String;

    /// Renders the field as a hidden input carrying its value.
    fn as_hidden(&self, attrs: &WidgetAttrs) -> String;
}
