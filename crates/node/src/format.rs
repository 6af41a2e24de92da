//! `{name}` placeholder substitution for component templates.
//!
//! `{{` and `}}` produce literal braces. Placeholder names are ASCII
//! identifiers; anything else between braces is a malformed template.

use crate::error::RenderError;
use crate::state::RenderValues;
use std::borrow::Cow;

/// Substitutes the render values into `source`.
pub fn format_template(component: &str, source: &str, values: &RenderValues) -> Result<String, RenderError> {
    format_with(component, source, |name| values.get(name))
}

/// Substitutes placeholders using an arbitrary lookup.
///
/// Components use this for sub-templates (an option row, a pager) that are
/// formatted into a value before the main template.
pub fn format_with<'v, F>(component: &str, source: &str, lookup: F) -> Result<String, RenderError>
where
    F: Fn(&str) -> Option<Cow<'v, str>>,
{
    let malformed = |message: &str| RenderError::MalformedTemplate {
        component: component.to_string(),
        message: message.to_string(),
    };

    let mut out = String::with_capacity(source.len() + source.len() / 2);
    let mut rest = source;
    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let brace = &rest[pos..pos + 1];
        let after = &rest[pos + 1..];

        if after.starts_with(brace) {
            out.push_str(brace);
            rest = &after[1..];
            continue;
        }
        if brace == "}" {
            return Err(malformed("single '}' outside a placeholder"));
        }

        let end = after
            .find('}')
            .ok_or_else(|| malformed("unterminated placeholder"))?;
        let name = &after[..end];
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(malformed(&format!("invalid placeholder '{{{}}}'", name)));
        }
        let value = lookup(name).ok_or_else(|| RenderError::UnknownPlaceholder {
            component: component.to_string(),
            name: name.to_string(),
        })?;
        out.push_str(&value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
