//! Banners: <https://material.io/components/banners>

use materialweb_node::{Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates};
use std::sync::Arc;

pub struct Banner;

const BANNER: ComponentSpec = ComponentSpec {
    name: "Banner",
    wants_children: true,
    modes: &["default", "stacked"],
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-banner {class}" role="banner" {props}>
  <div class="mdc-banner__content" role="status" aria-live="assertive">
    {child}
  </div>
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for Banner {
    fn spec(&self) -> &ComponentSpec {
        &BANNER
    }

    fn prepare(&self, state: &mut RenderState<'_>, _context: &mut Context) -> Result<(), RenderError> {
        if state.is_mode("stacked") {
            state.values.add_class("mdc-banner--mobile-stacked");
        }
        Ok(())
    }
}

const BANNER_CONTENT: ComponentSpec = ComponentSpec {
    name: "Banner_Content",
    wants_children: true,
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-banner__graphic-text-wrapper {class}" {props}>
  {child}
</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

/// The banner graphic. `label` becomes its alternative text.
const BANNER_ICON: ComponentSpec = ComponentSpec {
    name: "Banner_Icon",
    wants_children: true,
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-banner__graphic" role="img" alt="{label}" title="{label}">
  <span class="mdc-banner__icon {class}" {props}>{child}</span>
</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

const BANNER_TEXT: ComponentSpec = ComponentSpec {
    name: "Banner_Text",
    wants_children: true,
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-banner__text {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

const BANNER_ACTIONS: ComponentSpec = ComponentSpec {
    name: "Banner_Actions",
    wants_children: true,
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-banner__actions {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::new(Banner),
        Arc::new(BANNER_CONTENT),
        Arc::new(BANNER_ICON),
        Arc::new(BANNER_TEXT),
        Arc::new(BANNER_ACTIONS),
    ]
}
