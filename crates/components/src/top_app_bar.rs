//! Top app bars: <https://material.io/components/app-bars-top>

use crate::support::{BUTTON_CLASS, set_context_classes};
use materialweb_node::{Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates};
use materialweb_types::escape_html;
use std::sync::Arc;

pub struct TopAppBar;

const TOP_APP_BAR: ComponentSpec = ComponentSpec {
    name: "TopAppBar",
    wants_children: true,
    modes: &["default", "short", "short_closed", "fixed", "prominent", "dense"],
    default_tag: "header",
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-top-app-bar {class}" {props}>
  <div class="mdc-top-app-bar__row">
    {child}
  </div>
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for TopAppBar {
    fn spec(&self) -> &ComponentSpec {
        &TOP_APP_BAR
    }

    fn prepare(&self, state: &mut RenderState<'_>, _context: &mut Context) -> Result<(), RenderError> {
        let modifiers: &[&str] = match state.mode {
            "short" => &["mdc-top-app-bar--short"],
            "short_closed" => &["mdc-top-app-bar--short", "mdc-top-app-bar--short-collapsed"],
            "fixed" => &["mdc-top-app-bar--fixed"],
            "prominent" => &["mdc-top-app-bar--prominent"],
            "dense" => &["mdc-top-app-bar--dense"],
            _ => &[],
        };
        state.values.extend_classes(modifiers.iter().copied());
        Ok(())
    }
}

/// A bar section. Buttons inside become action items.
pub struct TopAppBarSection {
    spec: ComponentSpec,
}

const TOP_APP_BAR_LEFT: ComponentSpec = ComponentSpec {
    name: "TopAppBar_Left",
    wants_children: true,
    default_tag: "section",
    templates: Templates::Shared(Template::Static(r#"<{tag} {props}
    class="mdc-top-app-bar__section mdc-top-app-bar__section--align-start {class}">
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

const TOP_APP_BAR_RIGHT: ComponentSpec = ComponentSpec {
    name: "TopAppBar_Right",
    wants_children: true,
    default_tag: "section",
    templates: Templates::Shared(Template::Static(r#"<{tag} role="toolbar" {props}
    class="mdc-top-app-bar__section mdc-top-app-bar__section--align-end {class}">
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for TopAppBarSection {
    fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    fn prepare(&self, _state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        set_context_classes(context, BUTTON_CLASS, &["mdc-top-app-bar__action-item"]);
        Ok(())
    }
}

/// The navigation button. Labelled "Open navigation menu" unless `label` is given.
pub struct TopAppBarMenu;

const TOP_APP_BAR_MENU: ComponentSpec = ComponentSpec {
    name: "TopAppBar_Menu",
    wants_children: true,
    templates: Templates::Shared(Template::Static(
        r#"<button type="button" aria-label="{label}" title="{label}" {props}
    class="mdc-top-app-bar__navigation-icon mdc-icon-button {class}">
  {child}
</button>"#,
    )),
    ..ComponentSpec::DEFAULT
};

impl Component for TopAppBarMenu {
    fn spec(&self) -> &ComponentSpec {
        &TOP_APP_BAR_MENU
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if state.values.label.is_empty() {
            state.values.label = escape_html(&context.gettext("Open navigation menu")).into_owned();
        }
        Ok(())
    }
}

const TOP_APP_BAR_TITLE: ComponentSpec = ComponentSpec {
    name: "TopAppBar_Title",
    wants_children: true,
    default_tag: "span",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-top-app-bar__title {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::new(TopAppBar),
        Arc::new(TopAppBarSection { spec: TOP_APP_BAR_LEFT }),
        Arc::new(TopAppBarSection { spec: TOP_APP_BAR_RIGHT }),
        Arc::new(TopAppBarMenu),
        Arc::new(TOP_APP_BAR_TITLE),
    ]
}

#[cfg(test)]
mod tests {
    use crate::testing::{render, render_in};
    use materialweb_node::Context;
    use materialweb_types::Catalog;
    use serde_json::json;
    use std::sync::Arc;

    const BAR: &str = r#"{% TopAppBar mode=bar_mode %}{% TopAppBar_Left %}{% TopAppBar_Menu class="material-icons" %}menu{% endTopAppBar_Menu %}{% TopAppBar_Title %}Inbox{% endTopAppBar_Title %}{% endTopAppBar_Left %}{% TopAppBar_Right %}{% IconButton label="Search" class="material-icons" %}search{% endIconButton %}{% endTopAppBar_Right %}{% endTopAppBar %}"#;

    #[test]
    fn short_closed_bar_with_sections() {
        let html = render(BAR, json!({"bar_mode": "short_closed"}));
        assert!(html.starts_with(
            r#"<header class="mdc-top-app-bar mdc-top-app-bar--short mdc-top-app-bar--short-collapsed" >"#
        ), "{html}");
        assert!(html.contains(r#"aria-label="Open navigation menu""#));
        assert!(html.contains(r#"<span class="mdc-top-app-bar__title " >Inbox</span>"#));
        assert!(html.contains(r#"class="mdc-icon-button material-icons mdc-top-app-bar__action-item">"#), "{html}");
        assert!(html.contains(r#"role="toolbar""#));
    }

    #[test]
    fn menu_label_is_translated() {
        let mut catalog = Catalog::new();
        catalog.insert("Open navigation menu", "Åpne navigasjonsmeny");
        let context = Context::from_value(json!({"bar_mode": "dense"})).with_translator(Arc::new(catalog));
        let html = render_in(BAR, context);
        assert!(html.contains("mdc-top-app-bar--dense"));
        assert!(html.contains(r#"title="Åpne navigasjonsmeny""#), "{html}");
    }
}
