//! Helpers around [`serde_json::Value`], the dynamic value type of a render context.

use std::borrow::Cow;

pub use serde_json::Value;

/// Template truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Renders a value the way it appears inside markup.
///
/// Strings are returned verbatim, `null` becomes the empty string, and every
/// other value uses its JSON notation.
pub fn display(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        other => Cow::Owned(other.to_string()),
    }
}

/// Follows a dotted path (`user.address.city`, `rows.0.name`) below `root`.
///
/// Object segments are keys, array segments are zero-based indices.
pub fn lookup_path<'a, 'p>(
    root: &'a Value,
    segments: impl IntoIterator<Item = &'p str>,
) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Interprets an unquoted template token as a literal, if it is one.
///
/// Integers, floats, `True`, `False` and `None` are literals; anything else is
/// a variable reference and yields `None`.
pub fn parse_literal(token: &str) -> Option<Value> {
    match token {
        "True" => return Some(Value::Bool(true)),
        "False" => return Some(Value::Bool(false)),
        "None" => return Some(Value::Null),
        _ => {}
    }
    if let Ok(i) = token.parse::<i64>() {
        return Some(Value::from(i));
    }
    if !token.contains('.') {
        return None;
    }
    token
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}

/// Reads a list of CSS class tokens from a context value.
///
/// Accepts an array of strings or a single whitespace-separated string.
pub fn class_tokens(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .flat_map(|item| {
                display(item)
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect(),
        other => display(other)
            .split_whitespace()
            .map(str::to_string)
            .collect(),
    }
}
