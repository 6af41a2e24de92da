//! Text fields and text areas: <https://material.io/components/text-fields>

use crate::support::raw_label;
use materialweb_node::{Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates, WidgetAttrs};
use std::sync::Arc;

pub struct TextField;

const TEXT_FIELD: ComponentSpec = ComponentSpec {
    name: "TextField",
    wants_form_field: true,
    modes: &["filled", "outlined", "fullwidth"],
    templates: Templates::PerMode(&[
        (
            "filled",
            Template::Static(
                r#"<label class="mdc-text-field mdc-text-field--filled {class}">
  <span class="mdc-text-field__ripple"></span>
  {element}
  <span id="{id}-label" class="mdc-floating-label">
    {label}
  </span>
  <span class="mdc-line-ripple"></span>
</label>"#,
            ),
        ),
        (
            "outlined",
            Template::Static(
                r#"<label class="mdc-text-field mdc-text-field--outlined {class}">
  {element}
  <span class="mdc-notched-outline">
    <span class="mdc-notched-outline__leading"></span>
    <span class="mdc-notched-outline__notch">
      <span id="{id}-label" class="mdc-floating-label">
        {label}
      </span>
    </span>
    <span class="mdc-notched-outline__trailing"></span>
  </span>
</label>"#,
            ),
        ),
        (
            "fullwidth",
            Template::Static(
                r#"<label class="mdc-text-field mdc-text-field--filled mdc-text-field--fullwidth {class}">
  <span class="mdc-text-field__ripple"></span>
  {element}
  <span class="mdc-line-ripple"></span>
</label>"#,
            ),
        ),
    ]),
    ..ComponentSpec::DEFAULT
};

impl Component for TextField {
    fn spec(&self) -> &ComponentSpec {
        &TEXT_FIELD
    }

    /// Full-width fields have no floating label, so the input is labelled
    /// directly; the other modes point at the floating label element.
    fn prepare_attributes(
        &self,
        state: &RenderState<'_>,
        context: &Context,
        attrs: &mut WidgetAttrs,
    ) -> Result<(), RenderError> {
        let label = raw_label(state, context)?;
        if state.is_mode("fullwidth") {
            attrs.set("aria-label", label.clone());
        } else {
            attrs.set("aria-labelledby", format!("{}-label", state.values.id));
        }
        if !state.bound_field()?.widget_attrs().contains_key("placeholder") {
            attrs.set("placeholder", label);
        }
        attrs.add_class("mdc-text-field__input");
        Ok(())
    }
}

pub struct TextArea;

const TEXT_AREA: ComponentSpec = ComponentSpec {
    name: "TextArea",
    wants_form_field: true,
    modes: &["filled", "outlined"],
    templates: Templates::PerMode(&[
        (
            "filled",
            Template::Static(
                r#"<label class="mdc-text-field mdc-text-field--filled mdc-text-field--textarea mdc-text-field--no-label {class}">
  <span class="mdc-text-field__ripple"></span>
  <span class="mdc-text-field__resizer">
    {element}
  </span>
  <span class="mdc-line-ripple"></span>
</label>"#,
            ),
        ),
        (
            "outlined",
            Template::Static(
                r#"<label class="mdc-text-field mdc-text-field--outlined mdc-text-field--textarea mdc-text-field--no-label {class}">
  <span class="mdc-text-field__resizer">
    {element}
  </span>
  <span class="mdc-notched-outline">
    <span class="mdc-notched-outline__leading"></span>
    <span class="mdc-notched-outline__trailing"></span>
  </span>
</label>"#,
            ),
        ),
    ]),
    ..ComponentSpec::DEFAULT
};

impl Component for TextArea {
    fn spec(&self) -> &ComponentSpec {
        &TEXT_AREA
    }

    fn prepare_attributes(
        &self,
        state: &RenderState<'_>,
        context: &Context,
        attrs: &mut WidgetAttrs,
    ) -> Result<(), RenderError> {
        attrs.set("aria-label", raw_label(state, context)?);
        attrs.add_class("mdc-text-field__input");
        Ok(())
    }
}

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![Arc::new(TextField), Arc::new(TextArea)]
}
