//! Menus: <https://material.io/components/menus>
//!
//! A menu is a surface around an ordinary `List`. The menu asks the list and
//! its items for the menu roles through the context.

use crate::support::{LIST_IMAGE_CLASS, LIST_ITEM_PROPS, LIST_PROPS, set_context_classes, set_context_pairs};
use materialweb_node::{Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates};
use std::sync::Arc;

pub struct Menu;

const MENU: ComponentSpec = ComponentSpec {
    name: "Menu",
    wants_children: true,
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-menu mdc-menu-surface {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for Menu {
    fn spec(&self) -> &ComponentSpec {
        &MENU
    }

    fn prepare(&self, _state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        set_context_pairs(
            context,
            LIST_PROPS,
            &[
                ("role", "menu"),
                ("aria-hidden", "true"),
                ("aria-orientation", "vertical"),
                ("tabindex", "-1"),
            ],
        );
        set_context_pairs(context, LIST_ITEM_PROPS, &[("role", "menuitem")]);
        Ok(())
    }
}

const MENU_ANCHOR: ComponentSpec = ComponentSpec {
    name: "Menu_Anchor",
    wants_children: true,
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-menu-surface--anchor {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

/// A selection group inside a menu list. Image content of its items gets the
/// selection icon class.
pub struct MenuGroup;

const MENU_GROUP: ComponentSpec = ComponentSpec {
    name: "Menu_Group",
    wants_children: true,
    default_tag: "ul",
    templates: Templates::Shared(Template::Static(r#"<li>
  <{tag} class="mdc-menu__selection-group {class}" {props}>
    {child}
  </{tag}>
</li>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for MenuGroup {
    fn spec(&self) -> &ComponentSpec {
        &MENU_GROUP
    }

    fn prepare(&self, _state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        set_context_classes(context, LIST_IMAGE_CLASS, &["mdc-menu__selection-group-icon"]);
        Ok(())
    }
}

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![Arc::new(Menu), Arc::new(MENU_ANCHOR), Arc::new(MenuGroup)]
}
