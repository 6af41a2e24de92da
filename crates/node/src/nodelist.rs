use crate::context::Context;
use crate::error::RenderError;
use crate::node::Node;
use materialweb_types::value::display;
use materialweb_types::{Argument, escape_html};

/// One item of a parsed template body.
#[derive(Debug)]
pub enum TemplateNode {
    /// Literal markup, emitted verbatim.
    Text(String),
    /// `{{ path }}`: the value, HTML-escaped.
    Variable(Argument),
    /// `{% trans "message" %}`, or with `as name` stored into the context.
    Trans {
        message: String,
        target: Option<String>,
    },
    Component(Node),
}

/// An ordered sequence of template nodes: a whole template or a child block.
#[derive(Debug, Default)]
pub struct NodeList {
    nodes: Vec<TemplateNode>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: TemplateNode) {
        // Adjacent text is merged so rendering does less pushing.
        if let TemplateNode::Text(text) = &node {
            if let Some(TemplateNode::Text(last)) = self.nodes.last_mut() {
                last.push_str(text);
                return;
            }
        }
        self.nodes.push(node);
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(TemplateNode::Text(text.into()));
    }

    pub fn push_component(&mut self, node: Node) {
        self.push(TemplateNode::Component(node));
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateNode> {
        self.nodes.iter()
    }

    /// Renders every node depth-first, threading the same context through.
    pub fn render(&self, context: &mut Context) -> Result<String, RenderError> {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                TemplateNode::Text(text) => out.push_str(text),
                TemplateNode::Variable(argument) => match argument.resolve(context) {
                    Ok(value) => out.push_str(&escape_html(&display(&value))),
                    Err(err) if context.strict_variables() => return Err(err.into()),
                    Err(err) => log::debug!("{}; rendering it empty", err),
                },
                TemplateNode::Trans { message, target } => {
                    let translated = context.gettext(message);
                    match target {
                        Some(name) => context.insert(name.clone(), translated),
                        None => out.push_str(&escape_html(&translated)),
                    }
                }
                TemplateNode::Component(component) => out.push_str(&component.render(context)?),
            }
        }
        Ok(out)
    }
}

impl From<Vec<TemplateNode>> for NodeList {
    fn from(nodes: Vec<TemplateNode>) -> Self {
        let mut list = NodeList::new();
        for node in nodes {
            list.push(node);
        }
        list
    }
}

impl From<Node> for NodeList {
    fn from(node: Node) -> Self {
        NodeList {
            nodes: vec![TemplateNode::Component(node)],
        }
    }
}

impl From<&str> for NodeList {
    fn from(text: &str) -> Self {
        NodeList {
            nodes: vec![TemplateNode::Text(text.to_string())],
        }
    }
}
