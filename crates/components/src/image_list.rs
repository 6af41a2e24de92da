//! Image lists: <https://material.io/components/image-lists>

use crate::support::{LIST_MODE, context_string};
use materialweb_node::{Argument, Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates};
use materialweb_types::escape_html;
use std::sync::Arc;

pub struct ImageList;

const IMAGE_LIST: ComponentSpec = ComponentSpec {
    name: "ImageList",
    wants_children: true,
    modes: &["default", "masonry"],
    default_tag: "ul",
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-image-list {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for ImageList {
    fn spec(&self) -> &ComponentSpec {
        &IMAGE_LIST
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if state.is_mode("masonry") {
            state.values.add_class("mdc-image-list--masonry");
        }
        context.insert(LIST_MODE, state.mode);
        Ok(())
    }
}

/// One tile. `image` is the picture URL; `reversed` (as a flag keyword or a
/// bare `reversed` argument) puts the label above the picture.
pub struct ImageListItem;

const IMAGE_LIST_ITEM: ComponentSpec = ComponentSpec {
    name: "ImageList_Item",
    wants_children: true,
    extra_props: &["image", "reversed"],
    default_tag: "li",
    templates: Templates::Shared(Template::Dynamic(image_list_item_template)),
    ..ComponentSpec::DEFAULT
};

const IMAGE_STANDARD: &str = r#"
  <div class="mdc-image-list__image-aspect-container">
    <img class="mdc-image-list__image" src="{image}" {props}>
  </div>"#;

const IMAGE_MASONRY: &str = r#"
  <img class="mdc-image-list__image" src="{image}" {props}>"#;

const SUPPORTING: &str = r#"
  <div class="mdc-image-list__supporting">
    <div class="mdc-image-list__label">{child}</div>
  </div>"#;

fn image_list_item_template(state: &RenderState<'_>, context: &Context) -> String {
    let has_image = state.values.extra.get("image").is_some_and(|src| !src.is_empty());
    let image = match (has_image, context_string(context, LIST_MODE).as_str()) {
        (false, _) => "",
        (true, "masonry") => IMAGE_MASONRY,
        (true, _) => IMAGE_STANDARD,
    };
    let reversed = state.values.extra.get("reversed").is_some_and(|flag| flag == "true");
    let (first, second) = if reversed { (SUPPORTING, image) } else { (image, SUPPORTING) };
    format!("<{{tag}} class=\"mdc-image-list__item {{class}}\">{}{}\n</{{tag}}>", first, second)
}

impl Component for ImageListItem {
    fn spec(&self) -> &ComponentSpec {
        &IMAGE_LIST_ITEM
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        let image = state.kwarg_string("image", context)?.unwrap_or_default();
        state.values.set("image", escape_html(&image));

        let bare = state
            .node
            .args()
            .iter()
            .any(|arg| matches!(arg, Argument::Reference(name) if name == "reversed"));
        let reversed = bare || state.flag("reversed", context)?;
        state.values.set("reversed", if reversed { "true" } else { "false" });
        Ok(())
    }
}

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![Arc::new(ImageList), Arc::new(ImageListItem)]
}
