//! Lists: <https://material.io/components/lists>

use crate::support::{
    LIST_IMAGE_CLASS, LIST_ITEM_PROPS, LIST_MODE, LIST_PROPS, LIST_VALUE, context_classes, context_pairs,
    context_string, raw_label,
};
use materialweb_node::{Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates};
use materialweb_types::value::display;
use materialweb_types::{AttrList, Value, escape_html};
use std::sync::Arc;

/// Puts attribute pairs an ancestor asked for in front of the invocation's
/// own props, so explicit props still win.
fn inherit_props(state: &mut RenderState<'_>, context: &Context, key: &str) {
    let inherited = context_pairs(context, key);
    if inherited.is_empty() {
        return;
    }
    let own = std::mem::take(&mut state.values.props);
    state.values.props.extend(inherited);
    state.values.props.extend(own.iter());
}

pub struct List;

const LIST: ComponentSpec = ComponentSpec {
    name: "List",
    wants_children: true,
    modes: &["one_line", "two_line"],
    default_tag: "ul",
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-list {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for List {
    fn spec(&self) -> &ComponentSpec {
        &LIST
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if state.is_mode("two_line") {
            state.values.add_class("mdc-list--two-line");
        }
        inherit_props(state, context, LIST_PROPS);
        Ok(())
    }
}

pub struct ListItem;

const LIST_ITEM: ComponentSpec = ComponentSpec {
    name: "List_Item",
    wants_children: true,
    extra_props: &["activated"],
    default_tag: "li",
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-list-item {class}" {props}>
  <span class="mdc-list-item__ripple"></span>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for ListItem {
    fn spec(&self) -> &ComponentSpec {
        &LIST_ITEM
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if state.flag("activated", context)? {
            state.values.add_class("mdc-list-item--activated");
        }
        inherit_props(state, context, LIST_ITEM_PROPS);
        Ok(())
    }
}

/// The text or graphic part of a list item. `type="image"` makes it a graphic.
pub struct ListContent;

const LIST_CONTENT: ComponentSpec = ComponentSpec {
    name: "List_Content",
    wants_children: true,
    extra_props: &["type"],
    default_tag: "span",
    templates: Templates::Shared(Template::Static(r#"<{tag} class="{class}" {props}>{child}</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for ListContent {
    fn spec(&self) -> &ComponentSpec {
        &LIST_CONTENT
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if state.kwarg_string("type", context)?.as_deref() == Some("image") {
            state.values.add_class("mdc-list-item__graphic");
            if let Some(classes) = context_classes(context, LIST_IMAGE_CLASS) {
                state.values.extend_classes(classes);
            }
        } else {
            state.values.add_class("mdc-list-item__text");
        }
        Ok(())
    }
}

const LIST_LINE_PRIMARY: ComponentSpec = ComponentSpec {
    name: "List_LinePrimary",
    wants_children: true,
    default_tag: "span",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-list-item__primary-text {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

const LIST_LINE_SECONDARY: ComponentSpec = ComponentSpec {
    name: "List_LineSecondary",
    wants_children: true,
    default_tag: "span",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-list-item__secondary-text {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

const LIST_GROUP: ComponentSpec = ComponentSpec {
    name: "List_Group",
    wants_children: true,
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-list-group {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

const LIST_HEADER: ComponentSpec = ComponentSpec {
    name: "List_Header",
    wants_children: true,
    default_tag: "h3",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-list-group__subheader {class}" {props}>{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

const LIST_DIVIDER: ComponentSpec = ComponentSpec {
    name: "List_Divider",
    default_tag: "li",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} role="separator" class="mdc-list-divider {class}" {props}></{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

/// A list whose items can be selected, as plain options, radio buttons or
/// checkboxes. `value` names the selected item; in checkbox mode it may be a
/// list of values.
pub struct SelectList;

const SELECT_LIST: ComponentSpec = ComponentSpec {
    name: "SelectList",
    wants_children: true,
    modes: &["list", "radio", "checkbox"],
    extra_props: &["value"],
    default_tag: "ul",
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-list {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for SelectList {
    fn spec(&self) -> &ComponentSpec {
        &SELECT_LIST
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        let role = match state.mode {
            "radio" => "radiogroup",
            "checkbox" => "group",
            _ => "listbox",
        };
        state.values.push_prop("role", role);

        let label = raw_label(state, context)?;
        if !label.is_empty() {
            state.values.push_prop("aria-label", label);
        }

        let value = state.kwarg("value", context)?.unwrap_or_else(|| Value::from(""));
        context.insert(LIST_MODE, state.mode);
        context.insert(LIST_VALUE, value);
        Ok(())
    }
}

pub struct SelectListItem;

const SELECT_LIST_ITEM: ComponentSpec = ComponentSpec {
    name: "SelectList_Item",
    wants_children: true,
    extra_props: &["name", "value"],
    default_tag: "li",
    templates: Templates::Shared(Template::Dynamic(select_list_item_template)),
    ..ComponentSpec::DEFAULT
};

const SELECT_LIST_ITEM_OPTION: &str = r#"<{tag} role="option" class="mdc-list-item {class}" {props}>
  <span class="mdc-list-item__ripple"></span>
  <span class="mdc-list-item__text">{child}</span>
</{tag}>"#;

const SELECT_LIST_ITEM_RADIO: &str = r#"<{tag} role="radio" class="mdc-list-item {class}" {props}>
  <span class="mdc-list-item__ripple"></span>
  <span class="mdc-list-item__graphic">
    <div class="mdc-radio">
      <input name="{name}" value="{value}" type="radio"
          id="{id}" class="mdc-radio__native-control" {input_props}>
      <div class="mdc-radio__background">
        <div class="mdc-radio__outer-circle"></div>
        <div class="mdc-radio__inner-circle"></div>
      </div>
    </div>
  </span>
  <label class="mdc-list-item__text" for="{id}">{child}</label>
</{tag}>"#;

const SELECT_LIST_ITEM_CHECKBOX: &str = r#"<{tag} role="checkbox" class="mdc-list-item {class}" {props}>
  <span class="mdc-list-item__ripple"></span>
  <span class="mdc-list-item__graphic">
    <div class="mdc-checkbox">
      <input name="{name}" value="{value}" type="checkbox"
          id="{id}" class="mdc-checkbox__native-control" {input_props}>
      <div class="mdc-checkbox__background">
        <svg class="mdc-checkbox__checkmark" viewBox="0 0 24 24">
          <path class="mdc-checkbox__checkmark-path" fill="none"
              d="M1.73,12.91 8.1,19.28 22.79,4.59"/>
        </svg>
        <div class="mdc-checkbox__mixedmark"></div>
      </div>
    </div>
  </span>
  <label class="mdc-list-item__text" for="{id}">{child}</label>
</{tag}>"#;

/// The item markup follows the mode of the enclosing `SelectList`.
fn select_list_item_template(_state: &RenderState<'_>, context: &Context) -> String {
    match context_string(context, LIST_MODE).as_str() {
        "radio" => SELECT_LIST_ITEM_RADIO,
        "checkbox" => SELECT_LIST_ITEM_CHECKBOX,
        _ => SELECT_LIST_ITEM_OPTION,
    }
    .to_string()
}

/// Whether an item value is among the list's selected value(s).
fn is_selected(selected: Option<&Value>, value: &str) -> bool {
    match selected {
        Some(Value::Array(values)) => values.iter().any(|v| display(v) == value),
        Some(Value::Null) | None => false,
        Some(other) => {
            let other = display(other);
            !other.is_empty() && other == value
        }
    }
}

impl Component for SelectListItem {
    fn spec(&self) -> &ComponentSpec {
        &SELECT_LIST_ITEM
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        let name = state.kwarg_string("name", context)?.unwrap_or_default();
        let value = state
            .kwarg("value", context)?
            .map(|v| display(&v).into_owned())
            .unwrap_or_default();
        let checkable = matches!(context_string(context, LIST_MODE).as_str(), "radio" | "checkbox");

        let mut input_props = AttrList::new();
        if is_selected(context.get(LIST_VALUE), &value) {
            state.values.push_prop("tabindex", "0");
            if checkable {
                state.values.push_prop("aria-checked", "true");
                input_props.push("checked", "checked");
            } else {
                state.values.push_prop("aria-selected", "true");
                state.values.add_class("mdc-list-item--selected");
            }
        } else if checkable {
            state.values.push_prop("aria-checked", "false");
        } else {
            state.values.push_prop("aria-selected", "false");
        }

        state.values.set("name", escape_html(&name));
        state.values.set("value", escape_html(&value));
        state.values.set("input_props", input_props.to_html());
        Ok(())
    }
}

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::new(List),
        Arc::new(ListItem),
        Arc::new(ListContent),
        Arc::new(LIST_LINE_PRIMARY),
        Arc::new(LIST_LINE_SECONDARY),
        Arc::new(LIST_GROUP),
        Arc::new(LIST_HEADER),
        Arc::new(LIST_DIVIDER),
        Arc::new(SelectList),
        Arc::new(SelectListItem),
    ]
}

#[cfg(test)]
mod tests {
    use super::is_selected;
    use crate::testing::render;
    use serde_json::json;

    #[test]
    fn two_line_list_with_lines() {
        let html = render(
            r#"{% List mode="two_line" %}{% List_Item tabindex="0" activated=True %}{% List_Content %}{% List_LinePrimary %}One{% endList_LinePrimary %}{% endList_Content %}{% endList_Item %}{% List_Divider %}{% endList %}"#,
            json!({}),
        );
        assert!(html.starts_with(r#"<ul class="mdc-list mdc-list--two-line" >"#), "{html}");
        assert!(html.contains(r#"<li class="mdc-list-item mdc-list-item--activated" tabindex="0">"#), "{html}");
        assert!(html.contains(
            r#"<span class="mdc-list-item__text" ><span class="mdc-list-item__primary-text " >One</span></span>"#
        ));
        assert!(html.contains(r#"<li role="separator" class="mdc-list-divider " ></li>"#));
    }

    #[test]
    fn image_content_is_a_graphic() {
        let html = render(r#"{% List_Content type="image" %}<img>{% endList_Content %}"#, json!({}));
        assert_eq!(html, r#"<span class="mdc-list-item__graphic" ><img></span>"#);
    }

    #[test]
    fn radio_list_checks_the_selected_item() {
        let html = render(
            r#"{% SelectList mode="radio" value=choice label="Size" %}{% SelectList_Item name="size" value="1" %}Small{% endSelectList_Item %}{% SelectList_Item name="size" value="2" %}Large{% endSelectList_Item %}{% endSelectList %}"#,
            json!({"choice": 2}),
        );
        assert!(html.starts_with(r#"<ul class="mdc-list " role="radiogroup" aria-label="Size">"#), "{html}");
        assert!(html.contains(r#"<li role="radio" class="mdc-list-item " aria-checked="false">"#), "{html}");
        assert!(html.contains(r#"<li role="radio" class="mdc-list-item " tabindex="0" aria-checked="true">"#));
        assert!(html.contains(r#"<input name="size" value="2" type="radio""#));
        assert!(html.contains(r#"class="mdc-radio__native-control" checked="checked">"#));
        assert_eq!(html.matches("checked=\"checked\"").count(), 1);
    }

    #[test]
    fn plain_list_marks_selection_with_aria_selected() {
        let html = render(
            r#"{% SelectList value="b" %}{% SelectList_Item value="a" %}A{% endSelectList_Item %}{% SelectList_Item value="b" %}B{% endSelectList_Item %}{% endSelectList %}"#,
            json!({}),
        );
        assert!(html.contains(r#"role="listbox""#));
        assert!(html.contains(r#"<li role="option" class="mdc-list-item " aria-selected="false">"#), "{html}");
        assert!(html.contains(
            r#"<li role="option" class="mdc-list-item mdc-list-item--selected" tabindex="0" aria-selected="true">"#
        ));
    }

    #[test]
    fn selection_matches_scalars_and_lists() {
        assert!(is_selected(Some(&json!("2")), "2"));
        assert!(is_selected(Some(&json!(2)), "2"));
        assert!(is_selected(Some(&json!(["a", "c"])), "c"));
        assert!(!is_selected(Some(&json!("")), ""));
        assert!(!is_selected(None, "a"));
    }

    #[test]
    fn checkbox_items_follow_the_list_mode() {
        let html = render(
            r#"{% SelectList mode="checkbox" value=picked %}{% SelectList_Item name="t" value="a" %}A{% endSelectList_Item %}{% SelectList_Item name="t" value="b" %}B{% endSelectList_Item %}{% endSelectList %}"#,
            json!({"picked": ["a", "b"]}),
        );
        assert!(html.contains(r#"role="group""#));
        assert_eq!(html.matches(r#"role="checkbox""#).count(), 2);
        assert_eq!(html.matches(r#"aria-checked="true""#).count(), 2);
    }
}
