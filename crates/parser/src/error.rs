//! Errors raised while compiling a template.
use materialweb_node::RenderError;
use std::fmt;
use thiserror::Error;

/// A position in the template source, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl From<(usize, usize)> for Location {
    fn from((line, col): (usize, usize)) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Template syntax error: {msg} ({location})")]
    Syntax { msg: String, location: Location },

    #[error("Unknown tag '{tag}' at {location}")]
    UnknownTag { tag: String, location: Location },

    /// A closing tag that does not match the innermost open tag.
    #[error("Unexpected '{tag}' at {location}; expected {expected}")]
    UnexpectedEnd {
        tag: String,
        expected: String,
        location: Location,
    },

    #[error("Tag '{tag}' opened at {location} is never closed")]
    Unclosed { tag: String, location: Location },

    #[error("Invalid tag at {location}: {source}")]
    Construction {
        source: RenderError,
        location: Location,
    },

    /// A component definition failed validation when it was registered.
    #[error("Component '{name}' cannot be registered: {source}")]
    InvalidComponent { name: String, source: RenderError },
}

impl ParseError {
    pub(crate) fn syntax(msg: impl Into<String>, location: Location) -> Self {
        ParseError::Syntax {
            msg: msg.into(),
            location,
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::Syntax { location, .. }
            | ParseError::UnknownTag { location, .. }
            | ParseError::UnexpectedEnd { location, .. }
            | ParseError::Unclosed { location, .. }
            | ParseError::Construction { location, .. } => Some(*location),
            ParseError::InvalidComponent { .. } => None,
        }
    }
}
