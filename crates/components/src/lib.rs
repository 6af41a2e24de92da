//! Material Design components for the materialweb template tags.
//!
//! Every component type is a [`ComponentSpec`](materialweb_node::ComponentSpec)
//! constant, plus a hook implementation where the markup depends on kwargs or
//! on what an ancestor wrote into the context. [`material`] registers all of
//! them:
//!
//! ```
//! use materialweb_node::Context;
//!
//! let library = materialweb_components::material().unwrap();
//! let nodes = library.parse(r#"{% Button mode="raised" %}Save{% endButton %}"#).unwrap();
//! let html = nodes.render(&mut Context::new()).unwrap();
//! assert!(html.contains("mdc-button--raised"));
//! ```
//!
//! ## Context keys
//!
//! Containers pass options to their descendants through the keys in
//! [`support`]. The context is flat, so a value written by one container is
//! still visible after the container closes, until another component writes
//! the same key.

mod banner;
mod button;
mod card;
mod checkbox;
mod data_table;
mod drawer;
mod image_list;
mod lists;
mod menu;
mod select;
mod snackbar;
pub mod support;
mod textfield;
mod top_app_bar;

pub use button::{Button, ButtonIcon, IconButton, ToggleButton};
pub use card::{Card, CardActions, CardMedia};
pub use checkbox::{CheckBox, CheckBoxInput};
pub use data_table::{DataTable, Pager};
pub use image_list::{ImageList, ImageListItem};
pub use lists::{List, ListContent, ListItem, SelectList, SelectListItem};
pub use menu::{Menu, MenuGroup};
pub use select::{Select, SelectItem};
pub use textfield::{TextArea, TextField};

use materialweb_node::Component;
use materialweb_parser::{ParseError, TagLibrary};
use std::sync::Arc;

/// Every Material component type, in registration order.
pub fn components() -> Vec<Arc<dyn Component>> {
    [
        banner::components(),
        button::components(),
        card::components(),
        checkbox::components(),
        data_table::components(),
        drawer::components(),
        image_list::components(),
        lists::components(),
        menu::components(),
        select::components(),
        snackbar::components(),
        textfield::components(),
        top_app_bar::components(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// A tag library with every Material component registered under its tag name.
pub fn material() -> Result<TagLibrary, ParseError> {
    let mut library = TagLibrary::new();
    library.register_all(components())?;
    log::debug!("Registered {} Material components", library.len());
    Ok(library)
}

#[cfg(test)]
pub(crate) mod testing {
    use materialweb_forms::BoundField;
    use materialweb_node::{Context, IdStrategy, RenderError};
    use serde_json::Value;
    use std::sync::Arc;

    fn sequential(context: Context) -> Context {
        context.with_id_strategy(IdStrategy::Sequential { prefix: "t".into() })
    }

    pub fn render_in(source: &str, mut context: Context) -> String {
        let _ = env_logger::builder().is_test(true).try_init();
        let nodes = super::material().unwrap().parse(source).unwrap();
        nodes.render(&mut context).unwrap()
    }

    pub fn try_render(source: &str, data: Value) -> Result<String, RenderError> {
        let _ = env_logger::builder().is_test(true).try_init();
        let nodes = super::material().unwrap().parse(source).unwrap();
        nodes.render(&mut sequential(Context::from_value(data)))
    }

    pub fn render(source: &str, data: Value) -> String {
        try_render(source, data).unwrap()
    }

    pub fn render_with<const N: usize>(source: &str, data: Value, fields: [(&str, BoundField); N]) -> String {
        let mut context = sequential(Context::from_value(data));
        for (path, field) in fields {
            context.bind_field(path, Arc::new(field));
        }
        render_in(source, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;
    use serde_json::json;

    #[test]
    fn every_component_registers() {
        let library = material().unwrap();
        assert_eq!(library.len(), components().len());
        for tag in ["Button", "Card_Actions", "DataTable_ColHeader", "Select_Item", "TopAppBar_Menu"] {
            assert!(library.contains(tag), "{tag}");
        }
    }

    #[test]
    fn ancestor_classes_reach_nested_buttons() {
        let html = render(
            r#"{% Card %}{% Card_Actions %}{% Button %}{% Button_Icon %}share{% endButton_Icon %}Share{% endButton %}{% endCard_Actions %}{% endCard %}"#,
            json!({}),
        );
        let card = html.find("mdc-card ").unwrap();
        let actions = html.find("mdc-card__actions").unwrap();
        let button = html.find("mdc-card__action--button").unwrap();
        let icon = html.find("mdc-card__action--icon").unwrap();
        assert!(card < actions && actions < button && button < icon, "{html}");
    }

    #[test]
    fn card_action_classes_leak_to_later_siblings() {
        let html = render(
            r#"{% Card_Actions %}{% endCard_Actions %}{% Button %}x{% endButton %}"#,
            json!({}),
        );
        assert!(html.contains("mdc-button--touch mdc-card__action mdc-card__action--button"), "{html}");
    }
}
