//! Errors raised while constructing or rendering a component node.
use materialweb_types::ResolveError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The child block does not match what the component type expects.
    #[error("Cannot construct {component}: {message}")]
    Construction { component: String, message: String },

    #[error(transparent)]
    UnresolvedReference(#[from] ResolveError),

    #[error("Mode '{mode}' is not supported by {component} (available: {available})")]
    UnsupportedMode {
        component: String,
        mode: String,
        available: String,
    },

    /// A mode has no template. This is a defect in the component definition.
    #[error("{component} has no template for mode '{mode}'")]
    MissingTemplate { component: String, mode: String },

    #[error("{component} requires a bound form field: {reason}")]
    MissingFormField { component: String, reason: String },

    #[error("Unknown placeholder '{name}' in the {component} template")]
    UnknownPlaceholder { component: String, name: String },

    #[error("Malformed {component} template: {message}")]
    MalformedTemplate { component: String, message: String },

    #[error("Invalid value for '{key}' in {component}: {message}")]
    InvalidValue {
        component: String,
        key: String,
        message: String,
    },
}

impl RenderError {
    pub fn construction(component: &str, message: impl Into<String>) -> Self {
        RenderError::Construction {
            component: component.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_value(component: &str, key: &str, message: impl Into<String>) -> Self {
        RenderError::InvalidValue {
            component: component.to_string(),
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn missing_form_field(component: &str, reason: impl Into<String>) -> Self {
        RenderError::MissingFormField {
            component: component.to_string(),
            reason: reason.into(),
        }
    }
}
