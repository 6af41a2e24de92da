//! One invocation of a component and the render pipeline that turns it into markup.

use crate::component::Component;
use crate::context::Context;
use crate::error::RenderError;
use crate::format::format_template;
use crate::nodelist::NodeList;
use crate::state::RenderState;
use crate::ComponentSpec;
use materialweb_types::value::{class_tokens, display, is_truthy};
use materialweb_types::{Argument, FormField, ResolveError, Value, WidgetAttrs, escape_html};
use std::fmt;
use std::sync::Arc;

/// The help-text block appended after a form-bound component with help text.
const HELPER_LINE: &str = r#"<div class="mdc-text-field-helper-line">
  <div id="{id}-hint" aria-hidden="true" class="mdc-text-field-helper-text">{help}</div>
</div>"#;

/// A component invocation, created once when a template is parsed.
///
/// A node holds only what the template said; all per-render data lives in a
/// [`RenderState`], so the same node can be rendered any number of times and
/// from several threads at once.
pub struct Node {
    component: Arc<dyn Component>,
    children: Option<NodeList>,
    args: Vec<Argument>,
    kwargs: Vec<(String, Argument)>,
}

impl Node {
    /// Creates a node, checking the child block against the component type.
    ///
    /// A later keyword with the same name replaces an earlier one in place.
    pub fn new(
        component: Arc<dyn Component>,
        children: Option<NodeList>,
        args: Vec<Argument>,
        kwargs: impl IntoIterator<Item = (String, Argument)>,
    ) -> Result<Self, RenderError> {
        let spec = component.spec();
        match (spec.wants_children, children.is_some()) {
            (true, false) => {
                return Err(RenderError::construction(spec.name, "a child block is required"));
            }
            (false, true) => {
                return Err(RenderError::construction(spec.name, "the component does not accept a child block"));
            }
            _ => {}
        }

        let mut deduped: Vec<(String, Argument)> = Vec::new();
        for (key, value) in kwargs {
            match deduped.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => deduped.push((key, value)),
            }
        }

        Ok(Self {
            component,
            children,
            args,
            kwargs: deduped,
        })
    }

    pub fn builder(component: Arc<dyn Component>) -> NodeBuilder {
        NodeBuilder::new(component)
    }

    pub fn spec(&self) -> &ComponentSpec {
        self.component.spec()
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn children(&self) -> Option<&NodeList> {
        self.children.as_ref()
    }

    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    pub fn kwargs(&self) -> &[(String, Argument)] {
        &self.kwargs
    }

    pub fn kwarg(&self, key: &str) -> Option<&Argument> {
        self.kwargs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Renders the invocation against `context`.
    ///
    /// Stages run in a fixed order: mode and template, bound field, id, label,
    /// widget element, pass-through props, classes, tag, the component's
    /// `prepare` hook, then children and formatting. Children render after
    /// the hook so they observe whatever it wrote into the context.
    pub fn render(&self, context: &mut Context) -> Result<String, RenderError> {
        let spec = self.spec();

        let requested = match self.kwarg("mode") {
            Some(argument) => {
                let value = argument.resolve(context)?;
                is_truthy(&value).then(|| display(&value).into_owned())
            }
            None => None,
        };
        let mode = spec.resolve_mode(requested.as_deref())?;
        let template = spec.template(mode)?;
        log::trace!("Rendering {} in mode '{}'", spec.name, mode);

        let field = if spec.wants_form_field {
            Some(self.bound_field(context)?)
        } else {
            None
        };
        let mut state = RenderState::new(self, mode, field);

        state.values.id = match &state.field {
            Some(field) => field.id_for_label(),
            None => context.next_id(),
        };
        state.values.label = self.resolve_label(&state, context)?;

        if let Some(field) = state.field.clone() {
            state.values.element = self.render_element(&state, context, field.as_ref())?;
        }

        for (key, argument) in &self.kwargs {
            if !spec.is_pass_through(key) {
                continue;
            }
            let value = argument.resolve(context)?;
            if keeps_prop(&value) {
                state.values.props.push(key.as_str(), display(&value));
            }
        }

        if let Some(argument) = self.kwarg("class") {
            let value = argument.resolve(context)?;
            state.values.classes.extend(class_tokens(&value));
        }

        state.values.tag = match self.kwarg("tag") {
            Some(argument) => {
                let value = argument.resolve(context)?;
                if is_truthy(&value) {
                    display(&value).into_owned()
                } else {
                    spec.default_tag.to_string()
                }
            }
            None => spec.default_tag.to_string(),
        };

        self.component.prepare(&mut state, context)?;

        if let Some(children) = &self.children {
            state.values.child = children.render(context)?;
        }

        let source = template.source(&state, context);
        let mut html = format_template(spec.name, &source, &state.values)?;

        if let Some(field) = &state.field {
            let help = field.help_text();
            if !help.is_empty() {
                html.push('\n');
                html.push_str(
                    &HELPER_LINE
                        .replace("{id}", &state.values.id)
                        .replace("{help}", &escape_html(help)),
                );
            }
        }
        Ok(html)
    }

    /// The form field named by the first positional argument.
    fn bound_field(&self, context: &Context) -> Result<Arc<dyn FormField>, RenderError> {
        let name = self.name();
        match self.args.first() {
            None => Err(RenderError::missing_form_field(name, "no field argument was given")),
            Some(Argument::Reference(path)) => match context.field(path) {
                Some(field) => Ok(field),
                None if context.lookup(path).is_some() => Err(RenderError::missing_form_field(
                    name,
                    format!("'{}' is not a form field", path),
                )),
                None => Err(ResolveError { path: path.clone() }.into()),
            },
            Some(Argument::Literal(value)) => Err(RenderError::missing_form_field(
                name,
                format!("the literal {} is not a form field", value),
            )),
        }
    }

    /// An explicit `label` kwarg wins even when empty; otherwise the field's label.
    fn resolve_label(&self, state: &RenderState<'_>, context: &Context) -> Result<String, RenderError> {
        if let Some(argument) = self.kwarg("label") {
            let value = argument.resolve(context)?;
            return Ok(escape_html(&display(&value)).into_owned());
        }
        Ok(state
            .field
            .as_ref()
            .map(|field| escape_html(field.label()).into_owned())
            .unwrap_or_default())
    }

    fn render_element(
        &self,
        state: &RenderState<'_>,
        context: &Context,
        field: &dyn FormField,
    ) -> Result<String, RenderError> {
        let mut attrs = WidgetAttrs::from_declared(field.widget_attrs());
        if !field.help_text().is_empty() {
            let hint = format!("{}-hint", state.values.id);
            attrs.set("aria-controls", hint.clone());
            attrs.set("aria-describedby", hint);
        }
        self.component.prepare_attributes(state, context, &mut attrs)?;

        Ok(if self.spec().hide_form_field {
            field.as_hidden(&attrs)
        } else {
            field.as_widget(&attrs)
        })
    }
}

/// Falsy values are dropped, except the empty string which renders as `key=""`.
fn keeps_prop(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty()) || is_truthy(value)
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("component", &self.name())
            .field("args", &self.args)
            .field("kwargs", &self.kwargs)
            .field("children", &self.children)
            .finish()
    }
}

/// Assembles a [`Node`] programmatically, without going through the parser.
pub struct NodeBuilder {
    component: Arc<dyn Component>,
    children: Option<NodeList>,
    args: Vec<Argument>,
    kwargs: Vec<(String, Argument)>,
}

impl NodeBuilder {
    pub fn new(component: Arc<dyn Component>) -> Self {
        Self {
            component,
            children: None,
            args: Vec::new(),
            kwargs: Vec::new(),
        }
    }

    pub fn arg(mut self, argument: Argument) -> Self {
        self.args.push(argument);
        self
    }

    /// Binds the form field registered in the context under `path`.
    pub fn field(self, path: &str) -> Self {
        self.arg(Argument::reference(path))
    }

    pub fn kwarg(mut self, key: impl Into<String>, argument: impl Into<Argument>) -> Self {
        self.kwargs.push((key.into(), argument.into()));
        self
    }

    /// Sets a keyword to a context reference.
    pub fn kwarg_ref(self, key: impl Into<String>, path: &str) -> Self {
        self.kwarg(key, Argument::reference(path))
    }

    pub fn children(mut self, children: NodeList) -> Self {
        self.children = Some(children);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.get_or_insert_with(NodeList::new).push_text(text);
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.get_or_insert_with(NodeList::new).push_component(node);
        self
    }

    pub fn build(self) -> Result<Node, RenderError> {
        Node::new(self.component, self.children, self.args, self.kwargs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Template, Templates};
    use crate::ids::IdStrategy;
    use materialweb_forms::{BoundField, Widget};
    use serde_json::json;

    const CHIP: ComponentSpec = ComponentSpec {
        name: "Chip",
        wants_children: true,
        default_tag: "span",
        templates: Templates::Shared(Template::Static(
            r#"<{tag} id="{id}" class="mdc-chip {class}" {props}>{child}</{tag}>"#,
        )),
        ..ComponentSpec::DEFAULT
    };

    const ICON: ComponentSpec = ComponentSpec {
        name: "Icon",
        modes: &["filled", "outlined"],
        templates: Templates::PerMode(&[
            ("filled", Template::Static(r#"<i class="material-icons">{label}</i>"#)),
            ("outlined", Template::Static(r#"<i class="material-icons-outlined">{label}</i>"#)),
        ]),
        ..ComponentSpec::DEFAULT
    };

    const INPUT: ComponentSpec = ComponentSpec {
        name: "Input",
        wants_form_field: true,
        templates: Templates::Shared(Template::Static(r#"<label for="{id}">{label}</label>{element}"#)),
        ..ComponentSpec::DEFAULT
    };

    fn context() -> Context {
        Context::new().with_id_strategy(IdStrategy::Sequential { prefix: "n".into() })
    }

    #[test]
    fn child_block_must_match_the_component() {
        let err = Node::builder(Arc::new(CHIP)).build().unwrap_err();
        assert!(matches!(err, RenderError::Construction { .. }));

        let err = Node::builder(Arc::new(ICON)).text("x").build().unwrap_err();
        assert!(matches!(err, RenderError::Construction { .. }));
    }

    #[test]
    fn renders_props_classes_and_children() {
        let node = Node::builder(Arc::new(CHIP))
            .kwarg("class", "foo bar")
            .kwarg("title", "Hello")
            .kwarg("tag", "a")
            .text("chip")
            .build()
            .unwrap();
        let html = node.render(&mut context()).unwrap();
        assert_eq!(html, r#"<a id="n1" class="mdc-chip foo bar" title="Hello">chip</a>"#);
    }

    #[test]
    fn falsy_props_are_dropped_except_empty_string() {
        let node = Node::builder(Arc::new(CHIP))
            .kwarg("a", false)
            .kwarg("b", "")
            .kwarg("c", Argument::literal(0))
            .kwarg("d", "x")
            .text("")
            .build()
            .unwrap();
        let html = node.render(&mut context()).unwrap();
        assert!(html.contains(r#" b="" d="x">"#), "{html}");
        assert!(!html.contains(" a="));
        assert!(!html.contains(" c="));
    }

    #[test]
    fn later_keyword_replaces_earlier_one() {
        let node = Node::builder(Arc::new(CHIP))
            .kwarg("title", "one")
            .kwarg("role", "button")
            .kwarg("title", "two")
            .text("")
            .build()
            .unwrap();
        assert_eq!(node.kwargs().len(), 2);
        assert_eq!(node.kwargs()[0].1, Argument::literal("two"));
    }

    #[test]
    fn mode_comes_from_kwarg_or_first_mode() {
        let filled = Node::builder(Arc::new(ICON)).kwarg("label", "star").build().unwrap();
        assert_eq!(filled.render(&mut context()).unwrap(), r#"<i class="material-icons">star</i>"#);

        let outlined = Node::builder(Arc::new(ICON))
            .kwarg("label", "star")
            .kwarg_ref("mode", "icon_mode")
            .build()
            .unwrap();
        let mut ctx = context();
        ctx.insert("icon_mode", "outlined");
        assert!(outlined.render(&mut ctx).unwrap().contains("material-icons-outlined"));

        ctx.insert("icon_mode", "");
        assert!(outlined.render(&mut ctx).unwrap().contains(r#""material-icons""#));

        ctx.insert("icon_mode", "sharp");
        assert!(matches!(
            outlined.render(&mut ctx),
            Err(RenderError::UnsupportedMode { .. })
        ));
    }

    #[test]
    fn unresolved_kwarg_aborts_the_render() {
        let node = Node::builder(Arc::new(ICON)).kwarg_ref("label", "missing").build().unwrap();
        assert_eq!(
            node.render(&mut context()),
            Err(RenderError::UnresolvedReference(ResolveError {
                path: "missing".into()
            }))
        );
    }

    #[test]
    fn generated_ids_differ_between_renders() {
        let node = Node::builder(Arc::new(CHIP)).text("").build().unwrap();
        let first = node.render(&mut Context::new()).unwrap();
        let second = node.render(&mut Context::new()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn form_bound_component_uses_field_id_label_and_help() {
        let field = BoundField::new("email", Widget::Email)
            .with_label("Email")
            .with_help_text("We never share it");
        let mut ctx = context();
        ctx.bind_field("form.email", Arc::new(field));

        let node = Node::builder(Arc::new(INPUT)).field("form.email").build().unwrap();
        let first = node.render(&mut ctx).unwrap();
        let second = node.render(&mut ctx).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with(r#"<label for="id_email">Email</label><input type="email""#));
        assert!(first.contains(r#"aria-controls="id_email-hint" aria-describedby="id_email-hint""#));
        assert!(first.contains("\n<div class=\"mdc-text-field-helper-line\">"));
        assert!(first.contains(r#"<div id="id_email-hint" aria-hidden="true" class="mdc-text-field-helper-text">We never share it</div>"#));
    }

    #[test]
    fn field_argument_must_name_a_form_field() {
        let mut ctx = context();
        ctx.insert("plain", json!("text"));

        let no_arg = Node::builder(Arc::new(INPUT)).build().unwrap();
        assert!(matches!(no_arg.render(&mut ctx), Err(RenderError::MissingFormField { .. })));

        let plain = Node::builder(Arc::new(INPUT)).field("plain").build().unwrap();
        assert!(matches!(plain.render(&mut ctx), Err(RenderError::MissingFormField { .. })));

        let missing = Node::builder(Arc::new(INPUT)).field("form.nope").build().unwrap();
        assert!(matches!(missing.render(&mut ctx), Err(RenderError::UnresolvedReference(_))));
    }

    #[test]
    fn label_kwarg_overrides_field_label() {
        let mut ctx = context();
        ctx.bind_field("f.q", Arc::new(BoundField::new("q", Widget::Text).with_label("Query")));
        let node = Node::builder(Arc::new(INPUT))
            .field("f.q")
            .kwarg("label", "Search")
            .build()
            .unwrap();
        assert!(node.render(&mut ctx).unwrap().starts_with(r#"<label for="id_q">Search</label>"#));
    }

    #[test]
    fn empty_label_kwarg_still_overrides_field_label() {
        let mut ctx = context();
        ctx.bind_field("f.q", Arc::new(BoundField::new("q", Widget::Text).with_label("Query")));
        let node = Node::builder(Arc::new(INPUT))
            .field("f.q")
            .kwarg("label", "")
            .build()
            .unwrap();
        assert!(node.render(&mut ctx).unwrap().starts_with(r#"<label for="id_q"></label>"#));
    }
}
