//! Snackbars: <https://material.io/components/snackbars>

use crate::support::{BUTTON_CLASS, set_context_classes};
use materialweb_node::{Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates};
use std::sync::Arc;

pub struct Snackbar;

const SNACKBAR: ComponentSpec = ComponentSpec {
    name: "Snackbar",
    wants_children: true,
    extra_props: &["stacked", "leading"],
    templates: Templates::Shared(Template::Static(r#"<div class="mdc-snackbar {class}" {props}>
  <{tag} role="status" aria-relevant="additions" class="mdc-snackbar__surface">
    {child}
  </{tag}>
</div>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for Snackbar {
    fn spec(&self) -> &ComponentSpec {
        &SNACKBAR
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if state.flag("stacked", context)? {
            state.values.add_class("mdc-snackbar--stacked");
        }
        if state.flag("leading", context)? {
            state.values.add_class("mdc-snackbar--leading");
        }
        Ok(())
    }
}

const SNACKBAR_CONTENT: ComponentSpec = ComponentSpec {
    name: "Snackbar_Content",
    wants_children: true,
    templates: Templates::Shared(Template::Static(
        r#"<{tag} aria-atomic="false" class="mdc-snackbar__label {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

/// Buttons inside pick up the snackbar action class.
pub struct SnackbarActions;

const SNACKBAR_ACTIONS: ComponentSpec = ComponentSpec {
    name: "Snackbar_Actions",
    wants_children: true,
    templates: Templates::Shared(Template::Static(
        r#"<{tag} aria-atomic="true" class="mdc-snackbar__actions {class}" {props}>
  {child}
</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

impl Component for SnackbarActions {
    fn spec(&self) -> &ComponentSpec {
        &SNACKBAR_ACTIONS
    }

    fn prepare(&self, _state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        set_context_classes(context, BUTTON_CLASS, &["mdc-snackbar__action"]);
        Ok(())
    }
}

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![Arc::new(Snackbar), Arc::new(SNACKBAR_CONTENT), Arc::new(SnackbarActions)]
}
