//! Buttons: <https://material.io/components/buttons>

use crate::support::{BUTTON_CLASS, BUTTON_ICON_CLASS, context_classes};
use materialweb_node::{Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates};
use materialweb_types::escape_html;
use std::sync::Arc;

pub struct Button;

const BUTTON: ComponentSpec = ComponentSpec {
    name: "Button",
    wants_children: true,
    modes: &["outlined", "raised"],
    default_tag: "button",
    templates: Templates::Shared(Template::Static(
        r#"<div class="mdc-touch-target-wrapper">
  <{tag} class="mdc-button mdc-button--touch {class}" {props}>
    <div class="mdc-button__ripple"></div>
    {child}
    <div class="mdc-button__touch"></div>
  </{tag}>
</div>"#,
    )),
    ..ComponentSpec::DEFAULT
};

impl Component for Button {
    fn spec(&self) -> &ComponentSpec {
        &BUTTON
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if let Some(classes) = context_classes(context, BUTTON_CLASS) {
            state.values.extend_classes(classes);
        }
        match state.mode {
            "outlined" => state.values.add_class("mdc-button--outlined"),
            "raised" => state.values.add_class("mdc-button--raised"),
            _ => {}
        }
        Ok(())
    }
}

const BUTTON_LABEL: ComponentSpec = ComponentSpec {
    name: "Button_Label",
    wants_children: true,
    default_tag: "span",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-button__label {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

pub struct ButtonIcon;

const BUTTON_ICON: ComponentSpec = ComponentSpec {
    name: "Button_Icon",
    wants_children: true,
    default_tag: "span",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} aria-hidden="true" class="mdc-button__icon {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

impl Component for ButtonIcon {
    fn spec(&self) -> &ComponentSpec {
        &BUTTON_ICON
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if let Some(classes) = context_classes(context, BUTTON_ICON_CLASS) {
            state.values.extend_classes(classes);
        }
        Ok(())
    }
}

pub struct IconButton;

const ICON_BUTTON: ComponentSpec = ComponentSpec {
    name: "IconButton",
    wants_children: true,
    default_tag: "button",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} aria-label="{label}" title="{label}" {props}
    class="mdc-icon-button {class}">
  {child}
</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

impl Component for IconButton {
    fn spec(&self) -> &ComponentSpec {
        &ICON_BUTTON
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        let inherited =
            context_classes(context, BUTTON_ICON_CLASS).or_else(|| context_classes(context, BUTTON_CLASS));
        if let Some(classes) = inherited {
            state.values.extend_classes(classes);
        }
        Ok(())
    }
}

/// An icon button with on/off state. `state` decides the initial state;
/// `icon_when_on` and `icon_when_off` are the two icon ligatures.
pub struct ToggleButton;

const TOGGLE_BUTTON: ComponentSpec = ComponentSpec {
    name: "ToggleButton",
    extra_props: &["type", "state", "icon_when_on", "icon_when_off"],
    templates: Templates::Shared(Template::Static(
        r#"<button type="button" aria-label="{label}" title="{label}" {props}
    class="mdc-icon-button toggle {class}">
  <i class="material-icons mdc-icon-button__icon mdc-icon-button__icon--on">{icon_when_on}</i>
  <i class="material-icons mdc-icon-button__icon">{icon_when_off}</i>
</button>"#,
    )),
    ..ComponentSpec::DEFAULT
};

impl Component for ToggleButton {
    fn spec(&self) -> &ComponentSpec {
        &TOGGLE_BUTTON
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        for key in ["icon_when_on", "icon_when_off"] {
            let icon = state.kwarg_string(key, context)?.unwrap_or_default();
            state.values.set(key, escape_html(&icon));
        }
        if let Some(classes) = context_classes(context, BUTTON_CLASS) {
            state.values.extend_classes(classes);
        }
        if state.flag("state", context)? {
            state.values.add_class("mdc-icon-button--on");
            state.values.push_prop("aria-pressed", "true");
        }
        Ok(())
    }
}

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::new(Button),
        Arc::new(BUTTON_LABEL),
        Arc::new(ButtonIcon),
        Arc::new(IconButton),
        Arc::new(ToggleButton),
    ]
}
