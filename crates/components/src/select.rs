//! Select menus: <https://material.io/components/menus#exposed-dropdown-menu>
//!
//! The bound field is rendered as a hidden input carrying the value; the
//! visible options are list items built from the field's choices.

use materialweb_node::{
    Component, ComponentSpec, Context, Node, RenderError, RenderState, Template, Templates, WidgetAttrs,
};
use materialweb_types::AttrList;
use materialweb_types::escape_html;
use materialweb_types::value::display;
use std::sync::Arc;

pub struct Select;

const SELECT: ComponentSpec = ComponentSpec {
    name: "Select",
    wants_children: true,
    wants_form_field: true,
    hide_form_field: true,
    modes: &["filled", "outlined"],
    extra_props: &["required", "disabled"],
    templates: Templates::PerMode(&[
        (
            "filled",
            Template::Static(
                r#"<div class="mdc-select mdc-select--filled {class}" {props}>
  {element}
  <div class="mdc-select__anchor" role="button" aria-haspopup="listbox"
      aria-expanded="false" aria-labelledby="{id}-label {id}-selected"
      {anchor_props}>
    <span class="mdc-select__ripple"></span>
    <span id="{id}-label" class="mdc-floating-label">{label}</span>
    <span class="mdc-select__selected-text-container">
      <span id="{id}-selected" class="mdc-select__selected-text">
        {selected_text}
      </span>
    </span>
    <span class="mdc-select__dropdown-icon">
      <svg
          class="mdc-select__dropdown-icon-graphic"
          viewBox="7 10 10 5" focusable="false">
        <polygon
            class="mdc-select__dropdown-icon-inactive"
            stroke="none"
            fill-rule="evenodd"
            points="7 10 12 15 17 10">
        </polygon>
        <polygon
            class="mdc-select__dropdown-icon-active"
            stroke="none"
            fill-rule="evenodd"
            points="7 15 12 10 17 15">
        </polygon>
      </svg>
    </span>
    <span class="mdc-line-ripple"></span>
  </div>

  <div class="mdc-select__menu mdc-menu mdc-menu-surface mdc-menu-surface--fullwidth">
    <ul class="mdc-list" role="listbox" aria-label="{label}">
      {child}
      {items}
    </ul>
  </div>
</div>"#,
            ),
        ),
        (
            "outlined",
            Template::Static(
                r#"<div class="mdc-select mdc-select--outlined {class}" {props}>
  {element}
  <div class="mdc-select__anchor" role="button" aria-haspopup="listbox"
      aria-expanded="false" aria-labelledby="{id}-label {id}-selected"
      {anchor_props}>
    <span class="mdc-notched-outline">
      <span class="mdc-notched-outline__leading"></span>
      <span class="mdc-notched-outline__notch">
        <span id="{id}-label" class="mdc-floating-label">
          {label}
        </span>
      </span>
      <span class="mdc-notched-outline__trailing"></span>
    </span>
    <span class="mdc-select__selected-text-container">
      <span id="{id}-selected" class="mdc-select__selected-text">
        {selected_text}
      </span>
    </span>
    <span class="mdc-select__dropdown-icon">
      <svg
          class="mdc-select__dropdown-icon-graphic"
          viewBox="7 10 10 5" focusable="false">
        <polygon
            class="mdc-select__dropdown-icon-inactive"
            stroke="none"
            fill-rule="evenodd"
            points="7 10 12 15 17 10">
        </polygon>
        <polygon
            class="mdc-select__dropdown-icon-active"
            stroke="none"
            fill-rule="evenodd"
            points="7 15 12 10 17 15">
        </polygon>
      </svg>
    </span>
    <span class="mdc-line-ripple"></span>
  </div>

  <div class="mdc-select__menu mdc-menu mdc-menu-surface mdc-menu-surface--fullwidth">
    <ul class="mdc-list" role="listbox" aria-label="{label}">
      {child}
      {items}
    </ul>
  </div>
</div>"#,
            ),
        ),
    ]),
    ..ComponentSpec::DEFAULT
};

impl Component for Select {
    fn spec(&self) -> &ComponentSpec {
        &SELECT
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        let field = Arc::clone(state.bound_field()?);
        let selected = field.value();

        let mut items = Vec::with_capacity(field.choices().len());
        for choice in field.choices() {
            let item = Node::builder(Arc::new(SelectItem))
                .kwarg("value", choice.value.as_str())
                .kwarg("selected", Some(choice.value.as_str()) == selected)
                .text(&escape_html(&choice.label))
                .build()?;
            items.push(item.render(context)?);
        }
        state.values.set("items", items.join("\n"));

        let selected_text = field
            .choices()
            .iter()
            .find(|choice| Some(choice.value.as_str()) == selected)
            .map(|choice| escape_html(&choice.label).into_owned())
            .unwrap_or_default();
        state.values.set("selected_text", selected_text);

        let mut anchor_props = AttrList::new();
        if state.flag("required", context)? || field.required() {
            state.values.add_class("mdc-select--required");
            anchor_props.push("aria-required", "true");
        }
        if state.flag("disabled", context)? || field.disabled() {
            state.values.add_class("mdc-select--disabled");
            anchor_props.push("aria-disabled", "true");
        }
        state.values.set("anchor_props", anchor_props.to_html());
        Ok(())
    }

    fn prepare_attributes(
        &self,
        state: &RenderState<'_>,
        context: &Context,
        attrs: &mut WidgetAttrs,
    ) -> Result<(), RenderError> {
        for key in ["required", "disabled"] {
            if state.flag(key, context)? {
                attrs.set(key, "true");
            }
        }
        Ok(())
    }
}

/// One option of a `Select`. Built for every field choice, and usable
/// directly for extra options in the select's child block.
pub struct SelectItem;

const SELECT_ITEM: ComponentSpec = ComponentSpec {
    name: "Select_Item",
    wants_children: true,
    extra_props: &["value", "selected", "disabled"],
    default_tag: "li",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-list-item {class}" aria-selected="{selected}"
    data-value="{value}" role="option" {props}>
  <span class="mdc-list-item__ripple"></span>
  <span class="mdc-list-item__text">{child}</span>
</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

impl Component for SelectItem {
    fn spec(&self) -> &ComponentSpec {
        &SELECT_ITEM
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        let value = state.kwarg("value", context)?.unwrap_or_default();
        state.values.set("value", escape_html(&display(&value)));

        if state.flag("selected", context)? {
            state.values.set("selected", "true");
            state.values.add_class("mdc-list-item--selected");
        } else {
            state.values.set("selected", "false");
        }

        if state.flag("disabled", context)? {
            state.values.add_class("mdc-list-item--disabled");
            state.values.push_prop("aria-disabled", "true");
        }
        Ok(())
    }
}

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![Arc::new(Select), Arc::new(SelectItem)]
}
