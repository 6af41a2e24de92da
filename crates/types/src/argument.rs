//! Tag arguments: literals known at parse time, or references resolved per render.

use crate::value::Value;
use std::fmt;
use thiserror::Error;

/// A reference could not be found in the active scope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Variable '{path}' could not be resolved in the current context")]
pub struct ResolveError {
    pub path: String,
}

/// Anything a deferred reference can be looked up in.
pub trait Scope {
    /// Returns the value at a dotted path, or `None` if any segment is missing.
    fn lookup(&self, path: &str) -> Option<&Value>;
}

/// A positional or keyword argument of a tag invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A value fixed when the template was parsed.
    Literal(Value),
    /// A dotted variable path resolved against the scope at render time.
    Reference(String),
}

impl Argument {
    pub fn literal(value: impl Into<Value>) -> Self {
        Argument::Literal(value.into())
    }

    pub fn reference(path: impl Into<String>) -> Self {
        Argument::Reference(path.into())
    }

    /// Produces the concrete value of this argument.
    ///
    /// Literals are returned unchanged. References are looked up every time;
    /// nothing is cached between calls.
    pub fn resolve<S: Scope + ?Sized>(&self, scope: &S) -> Result<Value, ResolveError> {
        match self {
            Argument::Literal(value) => Ok(value.clone()),
            Argument::Reference(path) => scope.lookup(path).cloned().ok_or_else(|| ResolveError {
                path: path.clone(),
            }),
        }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Argument::Reference(path) => Some(path),
            Argument::Literal(_) => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Literal(Value::String(s)) => write!(f, "\"{}\"", s),
            Argument::Literal(value) => write!(f, "{}", value),
            Argument::Reference(path) => f.write_str(path),
        }
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Literal(Value::from(s))
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Literal(Value::from(s))
    }
}

impl From<bool> for Argument {
    fn from(b: bool) -> Self {
        Argument::Literal(Value::Bool(b))
    }
}
