use crate::field::BoundField;
use materialweb_types::FormField;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named group of fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    pub name: String,
    pub fields: Vec<BoundField>,
}

impl Form {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: BoundField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn get(&self, name: &str) -> Option<&BoundField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Every field keyed by the path a template uses to reach it (`form.email`).
    pub fn bound_fields(&self) -> impl Iterator<Item = (String, Arc<dyn FormField>)> + '_ {
        self.fields.iter().map(move |field| {
            let key = format!("{}.{}", self.name, field.name);
            (key, Arc::new(field.clone()) as Arc<dyn FormField>)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Widget;

    #[test]
    fn fields_are_keyed_by_form_name() {
        let form = Form::new("signup")
            .with_field(BoundField::new("email", Widget::Email))
            .with_field(BoundField::new("password", Widget::Password));

        let keys: Vec<String> = form.bound_fields().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["signup.email", "signup.password"]);
        assert!(form.get("email").is_some());
        assert!(form.get("phone").is_none());
    }

    #[test]
    fn deserializes_from_json() {
        let form: Form = serde_json::from_str(
            r#"{"name": "f", "fields": [{"name": "size", "widget": "select",
                "choices": [{"value": "s", "label": "Small"}]}]}"#,
        )
        .unwrap();
        let (key, field) = form.bound_fields().next().unwrap();
        assert_eq!(key, "f.size");
        assert_eq!(field.choices().len(), 1);
    }
}
