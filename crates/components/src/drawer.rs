//! Navigation drawers: <https://material.io/components/navigation-drawer>

use materialweb_node::{Component, ComponentSpec, Template, Templates};
use std::sync::Arc;

const DRAWER: ComponentSpec = ComponentSpec {
    name: "Drawer",
    wants_children: true,
    modes: &["standard", "modal", "dismissible"],
    default_tag: "aside",
    templates: Templates::PerMode(&[
        (
            "standard",
            Template::Static(r#"<{tag} class="mdc-drawer {class}" {props}>
  {child}
</{tag}>"#),
        ),
        (
            "modal",
            Template::Static(r#"<{tag} class="mdc-drawer mdc-drawer--modal {class}" {props}>
  {child}
</{tag}>
<div class="mdc-drawer-scrim"></div>"#),
        ),
        (
            "dismissible",
            Template::Static(r#"<{tag} class="mdc-drawer mdc-drawer--dismissible {class}" {props}>
  {child}
</{tag}>"#),
        ),
    ]),
    ..ComponentSpec::DEFAULT
};

const DRAWER_HEADER: ComponentSpec = ComponentSpec {
    name: "Drawer_Header",
    wants_children: true,
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-drawer__header {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

const DRAWER_TITLE: ComponentSpec = ComponentSpec {
    name: "Drawer_Title",
    wants_children: true,
    default_tag: "h3",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-drawer__title {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

const DRAWER_SUBTITLE: ComponentSpec = ComponentSpec {
    name: "Drawer_SubTitle",
    wants_children: true,
    default_tag: "h6",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-drawer__subtitle {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

/// The scrollable navigation list of a drawer.
const DRAWER_CONTENT: ComponentSpec = ComponentSpec {
    name: "Drawer_Content",
    wants_children: true,
    default_tag: "nav",
    templates: Templates::Shared(Template::Static(r#"<div class="mdc-drawer__content">
  <{tag} class="mdc-list {class}" {props}>
    {child}
  </{tag}>
</div>"#)),
    ..ComponentSpec::DEFAULT
};

const DRAWER_APP_CONTENT: ComponentSpec = ComponentSpec {
    name: "Drawer_AppContent",
    wants_children: true,
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-drawer-app-content {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::new(DRAWER),
        Arc::new(DRAWER_HEADER),
        Arc::new(DRAWER_TITLE),
        Arc::new(DRAWER_SUBTITLE),
        Arc::new(DRAWER_CONTENT),
        Arc::new(DRAWER_APP_CONTENT),
    ]
}

#[cfg(test)]
mod tests {
    use crate::testing::render;
    use serde_json::json;

    #[test]
    fn modal_drawer_adds_a_scrim() {
        let html = render(
            r#"{% Drawer mode="modal" %}{% Drawer_Header %}{% Drawer_Title %}Mail{% endDrawer_Title %}{% endDrawer_Header %}{% Drawer_Content %}{% endDrawer_Content %}{% endDrawer %}"#,
            json!({}),
        );
        assert!(html.starts_with(r#"<aside class="mdc-drawer mdc-drawer--modal " >"#), "{html}");
        assert!(html.contains(r#"<h3 class="mdc-drawer__title " >Mail</h3>"#));
        assert!(html.contains("<nav class=\"mdc-list \" >"));
        assert!(html.ends_with(r#"<div class="mdc-drawer-scrim"></div>"#));
    }

    #[test]
    fn standard_drawer_has_no_scrim() {
        let html = render(r#"{% Drawer %}x{% endDrawer %}"#, json!({}));
        assert_eq!(html, "<aside class=\"mdc-drawer \" >\n  x\n</aside>");
    }
}
