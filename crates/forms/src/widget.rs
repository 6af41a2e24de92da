use crate::field::BoundField;
use materialweb_types::{FormField, WidgetAttrs, escape_html};
use serde::{Deserialize, Serialize};

/// The native control a field renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Checkbox,
    Textarea,
    Select,
    Hidden,
}

impl Widget {
    fn input_type(self) -> Option<&'static str> {
        match self {
            Widget::Text => Some("text"),
            Widget::Email => Some("email"),
            Widget::Password => Some("password"),
            Widget::Number => Some("number"),
            Widget::Checkbox => Some("checkbox"),
            Widget::Hidden => Some("hidden"),
            Widget::Textarea | Widget::Select => None,
        }
    }

    pub(crate) fn render(self, field: &BoundField, attrs: &WidgetAttrs) -> String {
        let mut merged = merge_attrs(field, attrs, true);
        match self {
            Widget::Textarea => {
                let value = field.value().map(escape_html).unwrap_or_default();
                format!("<textarea {}>\n{}</textarea>", join(&merged), value)
            }
            Widget::Select => {
                let selected = field.value();
                let options: String = field
                    .choices()
                    .iter()
                    .map(|choice| {
                        let marker = if Some(choice.value.as_str()) == selected {
                            " selected"
                        } else {
                            ""
                        };
                        format!(
                            "\n  <option value=\"{}\"{}>{}</option>",
                            escape_html(&choice.value),
                            marker,
                            escape_html(&choice.label)
                        )
                    })
                    .collect();
                format!("<select {}>{}\n</select>", join(&merged), options)
            }
            Widget::Checkbox => {
                if field.value().is_some_and(is_checked) {
                    merged.push(("checked".to_string(), None));
                }
                input(self, &merged)
            }
            Widget::Password => input(self, &merged),
            _ => {
                if let Some(value) = field.value() {
                    merged.insert(1, ("value".to_string(), Some(value.to_string())));
                }
                input(self, &merged)
            }
        }
    }
}

pub(crate) fn render_hidden(field: &BoundField, attrs: &WidgetAttrs) -> String {
    let mut merged = merge_attrs(field, attrs, false);
    if let Some(value) = field.value() {
        merged.insert(1, ("value".to_string(), Some(value.to_string())));
    }
    input(Widget::Hidden, &merged)
}

fn input(widget: Widget, attrs: &[(String, Option<String>)]) -> String {
    let kind = widget.input_type().unwrap_or("text");
    format!("<input type=\"{}\" {}>", kind, join(attrs))
}

fn is_checked(value: &str) -> bool {
    !matches!(value, "" | "0" | "false" | "False" | "off")
}

/// Declared widget attributes overlaid with the ones passed at render time,
/// then `name`, `id` and, with `field_flags`, `required` and `disabled` from
/// the field.
///
/// A `None` value renders as a bare boolean attribute.
fn merge_attrs(field: &BoundField, attrs: &WidgetAttrs, field_flags: bool) -> Vec<(String, Option<String>)> {
    let mut merged: Vec<(String, Option<String>)> =
        vec![("name".to_string(), Some(field.html_name()))];

    let mut set = |key: &str, value: Option<String>| {
        match merged.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => merged.push((key.to_string(), value)),
        }
    };

    for (key, value) in field.widget_attrs() {
        set(key, Some(value.clone()));
    }
    for (key, value) in attrs.iter() {
        set(key, Some(value));
    }
    if field_flags && field.required() && attrs.get("required").is_none() {
        set("required", None);
    }
    if field_flags && field.disabled() && attrs.get("disabled").is_none() {
        set("disabled", None);
    }
    set("id", Some(field.id_for_label()));
    merged
}

fn join(attrs: &[(String, Option<String>)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| match value {
            Some(value) => format!("{}=\"{}\"", key, escape_html(value)),
            None => key.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
