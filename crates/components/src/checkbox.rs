//! Checkboxes: <https://material.io/components/checkboxes>

use materialweb_node::{Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates, WidgetAttrs};
use std::sync::Arc;

/// A checkbox with its label, wrapped in a form field row.
pub struct CheckBox;

const CHECKBOX: ComponentSpec = ComponentSpec {
    name: "CheckBox",
    wants_form_field: true,
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-form-field {class}" {props}>
  <div class="mdc-checkbox">
    {element}
    <div class="mdc-checkbox__background">
      <svg class="mdc-checkbox__checkmark" viewBox="0 0 24 24">
        <path class="mdc-checkbox__checkmark-path" fill="none"
              d="M1.73,12.91 8.1,19.28 22.79,4.59"/>
      </svg>
      <div class="mdc-checkbox__mixedmark"></div>
    </div>
    <div class="mdc-checkbox__ripple"></div>
  </div>
  <label for="{id}">{label}</label>
</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

/// Only the checkbox control, without a label.
pub struct CheckBoxInput;

const CHECKBOX_INPUT: ComponentSpec = ComponentSpec {
    name: "CheckBox_Input",
    wants_form_field: true,
    templates: Templates::Shared(Template::Static(
        r#"<div class="mdc-touch-target-wrapper">
  <{tag} class="mdc-checkbox mdc-checkbox--touch {class}" {props}>
    {element}
    <div class="mdc-checkbox__background">
      <svg class="mdc-checkbox__checkmark" viewBox="0 0 24 24">
        <path class="mdc-checkbox__checkmark-path" fill="none"
              d="M1.73,12.91 8.1,19.28 22.79,4.59"/>
      </svg>
      <div class="mdc-checkbox__mixedmark"></div>
    </div>
    <div class="mdc-checkbox__ripple"></div>
  </{tag}>
</div>"#,
    )),
    ..ComponentSpec::DEFAULT
};

fn checkbox_attributes(state: &RenderState<'_>, attrs: &mut WidgetAttrs) -> Result<(), RenderError> {
    let field = state.bound_field()?;
    if field.widget_attrs().contains_key("indeterminate") {
        attrs.set("data-indeterminate", "true");
    }
    attrs.add_class("mdc-checkbox__native-control");
    Ok(())
}

fn mark_disabled(state: &mut RenderState<'_>) -> Result<(), RenderError> {
    let field = state.bound_field()?;
    if field.disabled() || field.widget_attrs().contains_key("disabled") {
        state.values.add_class("mdc-checkbox--disabled");
    }
    Ok(())
}

impl Component for CheckBox {
    fn spec(&self) -> &ComponentSpec {
        &CHECKBOX
    }

    fn prepare(&self, state: &mut RenderState<'_>, _context: &mut Context) -> Result<(), RenderError> {
        mark_disabled(state)
    }

    fn prepare_attributes(
        &self,
        state: &RenderState<'_>,
        _context: &Context,
        attrs: &mut WidgetAttrs,
    ) -> Result<(), RenderError> {
        checkbox_attributes(state, attrs)
    }
}

impl Component for CheckBoxInput {
    fn spec(&self) -> &ComponentSpec {
        &CHECKBOX_INPUT
    }

    fn prepare(&self, state: &mut RenderState<'_>, _context: &mut Context) -> Result<(), RenderError> {
        mark_disabled(state)
    }

    fn prepare_attributes(
        &self,
        state: &RenderState<'_>,
        _context: &Context,
        attrs: &mut WidgetAttrs,
    ) -> Result<(), RenderError> {
        checkbox_attributes(state, attrs)
    }
}

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![Arc::new(CheckBox), Arc::new(CheckBoxInput)]
}

#[cfg(test)]
mod tests {
    use crate::testing::{render_with, try_render};
    use materialweb_forms::{BoundField, Widget};
    use materialweb_node::RenderError;
    use serde_json::json;

    #[test]
    fn checkbox_renders_control_and_label() {
        let agree = BoundField::new("agree", Widget::Checkbox)
            .with_label("I agree")
            .with_value("on");
        let html = render_with(r#"{% CheckBox form.agree %}"#, json!({}), [("form.agree", agree)]);
        assert!(html.starts_with(r#"<div class="mdc-form-field " >"#), "{html}");
        assert!(html.contains(
            r#"<input type="checkbox" name="agree" class="mdc-checkbox__native-control" id="id_agree" checked>"#
        ), "{html}");
        assert!(html.contains(r#"<label for="id_agree">I agree</label>"#));
    }

    #[test]
    fn indeterminate_and_disabled_fields() {
        let tri = BoundField::new("tri", Widget::Checkbox)
            .with_attr("indeterminate", "")
            .with_disabled(true);
        let html = render_with(r#"{% CheckBox_Input form.tri %}"#, json!({}), [("form.tri", tri)]);
        assert!(html.contains(r#"data-indeterminate="true""#), "{html}");
        assert!(html.contains(r#"class="mdc-checkbox mdc-checkbox--touch mdc-checkbox--disabled""#), "{html}");
        assert!(html.contains(" disabled "));
    }

    #[test]
    fn checkbox_needs_a_field() {
        let err = try_render(r#"{% CheckBox agree %}"#, json!({"agree": true})).unwrap_err();
        assert!(matches!(err, RenderError::MissingFormField { .. }));
    }
}
