//! Builds a [`NodeList`] tree from template tokens.
//!
//! Children-wanting tags open a frame that collects everything up to the
//! matching `{% end<Tag> %}`. Frames nest strictly: a closing tag must match
//! the innermost open tag.

use crate::error::{Location, ParseError};
use crate::lexer::{Token, TokenKind, split_contents, tokenize};
use crate::library::TagLibrary;
use materialweb_node::{Component, Node, NodeList, TemplateNode};
use materialweb_types::Argument;
use materialweb_types::value::parse_literal;
use std::sync::Arc;

/// An open children-wanting tag.
struct Frame {
    tag: String,
    component: Arc<dyn Component>,
    args: Vec<Argument>,
    kwargs: Vec<(String, Argument)>,
    children: NodeList,
    location: Location,
}

pub struct TagParser<'l> {
    library: &'l TagLibrary,
}

impl<'l> TagParser<'l> {
    pub fn new(library: &'l TagLibrary) -> Self {
        Self { library }
    }

    pub fn parse(&self, source: &str) -> Result<NodeList, ParseError> {
        let mut root = NodeList::new();
        let mut stack: Vec<Frame> = Vec::new();

        for token in tokenize(source)? {
            let current = match stack.last_mut() {
                Some(frame) => &mut frame.children,
                None => &mut root,
            };
            match token.kind {
                TokenKind::Text => current.push_text(token.contents),
                TokenKind::Comment => {}
                TokenKind::Variable => current.push(TemplateNode::Variable(parse_variable(&token)?)),
                TokenKind::Block => self.parse_block(&token, &mut root, &mut stack)?,
            }
        }

        if let Some(frame) = stack.pop() {
            return Err(ParseError::Unclosed {
                tag: frame.tag,
                location: frame.location,
            });
        }
        log::debug!("Parsed template into {} top-level nodes", root.len());
        Ok(root)
    }

    fn parse_block(&self, token: &Token<'_>, root: &mut NodeList, stack: &mut Vec<Frame>) -> Result<(), ParseError> {
        let bits = split_contents(token.contents, token.location)?;
        let Some((&tag, params)) = bits.split_first() else {
            return Err(ParseError::syntax("empty block tag", token.location));
        };

        match tag {
            "load" => {
                log::trace!("Ignoring {{% {} %}}", token.contents);
                Ok(())
            }
            "trans" => {
                let node = parse_trans(params, token.location)?;
                push_node(root, stack, node);
                Ok(())
            }
            _ if tag.starts_with("end") && !self.library.contains(tag) => self.close(tag, token.location, root, stack),
            _ => {
                let component = self.library.get(tag).ok_or_else(|| ParseError::UnknownTag {
                    tag: tag.to_string(),
                    location: token.location,
                })?;
                let (args, kwargs) = parse_params(params, token.location)?;

                if component.spec().wants_children {
                    stack.push(Frame {
                        tag: tag.to_string(),
                        component,
                        args,
                        kwargs,
                        children: NodeList::new(),
                        location: token.location,
                    });
                    return Ok(());
                }

                let node = Node::new(component, None, args, kwargs).map_err(|source| ParseError::Construction {
                    source,
                    location: token.location,
                })?;
                push_node(root, stack, TemplateNode::Component(node));
                Ok(())
            }
        }
    }

    fn close(&self, end_tag: &str, location: Location, root: &mut NodeList, stack: &mut Vec<Frame>) -> Result<(), ParseError> {
        let name = &end_tag["end".len()..];
        let expected = match stack.last() {
            Some(frame) if frame.tag == name => None,
            Some(frame) => Some(format!("'end{}'", frame.tag)),
            None => Some("no closing tag".to_string()),
        };
        if let Some(expected) = expected {
            return Err(ParseError::UnexpectedEnd {
                tag: end_tag.to_string(),
                expected,
                location,
            });
        }
        let Some(frame) = stack.pop() else {
            return Ok(());
        };

        let node = Node::new(frame.component, Some(frame.children), frame.args, frame.kwargs).map_err(
            |source| ParseError::Construction {
                source,
                location: frame.location,
            },
        )?;
        push_node(root, stack, TemplateNode::Component(node));
        Ok(())
    }
}

fn push_node(root: &mut NodeList, stack: &mut [Frame], node: TemplateNode) {
    match stack.last_mut() {
        Some(frame) => frame.children.push(node),
        None => root.push(node),
    }
}

/// `{% trans "Message" %}` or `{% trans "Message" as name %}`.
fn parse_trans(params: &[&str], location: Location) -> Result<TemplateNode, ParseError> {
    let (message, target) = match params {
        [message] => (message, None),
        [message, "as", name] => (message, Some(name.to_string())),
        _ => {
            return Err(ParseError::syntax(
                "expected {% trans \"message\" %} or {% trans \"message\" as name %}",
                location,
            ));
        }
    };
    let message = unquote(message)
        .ok_or_else(|| ParseError::syntax("trans expects a quoted message", location))?
        .to_string();
    Ok(TemplateNode::Trans { message, target })
}

fn parse_variable(token: &Token<'_>) -> Result<Argument, ParseError> {
    let contents = token.contents;
    if contents.is_empty() {
        return Err(ParseError::syntax("empty variable tag", token.location));
    }
    if contents.contains('|') {
        return Err(ParseError::syntax(
            format!("filters are not supported in '{{{{ {} }}}}'", contents),
            token.location,
        ));
    }
    Ok(parse_value(contents))
}

/// Splits tag parameters into positional and keyword arguments.
pub fn parse_params(
    params: &[&str],
    location: Location,
) -> Result<(Vec<Argument>, Vec<(String, Argument)>), ParseError> {
    let mut args = Vec::new();
    let mut kwargs = Vec::new();
    for param in params {
        match split_keyword(param) {
            Some((key, value)) => {
                if value.is_empty() {
                    return Err(ParseError::syntax(format!("missing value for '{}'", key), location));
                }
                kwargs.push((key.to_string(), parse_value(value)));
            }
            None => args.push(parse_value(param)),
        }
    }
    Ok((args, kwargs))
}

/// `key=value` where the key is a plain attribute-like name.
fn split_keyword(param: &str) -> Option<(&str, &str)> {
    let (key, value) = param.split_once('=')?;
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ':');
    valid.then_some((key, value))
}

/// Quoted strings are literals, then numbers and `True`/`False`/`None`;
/// anything else is a context reference.
fn parse_value(token: &str) -> Argument {
    if let Some(text) = unquote(token) {
        return Argument::literal(text);
    }
    match parse_literal(token) {
        Some(value) => Argument::Literal(value),
        None => Argument::reference(token),
    }
}

fn unquote(token: &str) -> Option<&str> {
    let quote = token.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    token
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loc() -> Location {
        Location { line: 1, col: 1 }
    }

    #[test]
    fn params_split_into_args_and_kwargs() {
        let (args, kwargs) = parse_params(
            &["form.email", r#"label="Email""#, "mode=outlined", "dense=True", "rows=3", "aria-label='x'"],
            loc(),
        )
        .unwrap();
        assert_eq!(args, vec![Argument::reference("form.email")]);
        assert_eq!(
            kwargs,
            vec![
                ("label".to_string(), Argument::literal("Email")),
                ("mode".to_string(), Argument::reference("outlined")),
                ("dense".to_string(), Argument::literal(true)),
                ("rows".to_string(), Argument::Literal(json!(3))),
                ("aria-label".to_string(), Argument::literal("x")),
            ]
        );
    }

    #[test]
    fn quoted_equals_sign_is_positional() {
        let (args, kwargs) = parse_params(&[r#""a=b""#], loc()).unwrap();
        assert_eq!(args, vec![Argument::literal("a=b")]);
        assert!(kwargs.is_empty());
    }

    #[test]
    fn keyword_without_value_is_rejected() {
        assert!(parse_params(&["label="], loc()).is_err());
    }

    #[test]
    fn trans_forms() {
        assert!(matches!(
            parse_trans(&[r#""Menu""#], loc()),
            Ok(TemplateNode::Trans { ref message, target: None }) if message == "Menu"
        ));
        assert!(matches!(
            parse_trans(&[r#""Menu""#, "as", "menu_label"], loc()),
            Ok(TemplateNode::Trans { target: Some(ref t), .. }) if t == "menu_label"
        ));
        assert!(parse_trans(&["Menu"], loc()).is_err());
        assert!(parse_trans(&[], loc()).is_err());
    }
}
