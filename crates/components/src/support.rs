//! Context keys that ancestors write for their descendants, and helpers to
//! read and write them.

use materialweb_node::{Context, RenderError, RenderState};
use materialweb_types::Value;
use materialweb_types::value::{class_tokens, display, is_truthy};

/// Classes every `Button`, `IconButton` and `ToggleButton` below adds.
pub const BUTTON_CLASS: &str = "button_class";
/// Classes `Button_Icon` and `IconButton` add, taking precedence over [`BUTTON_CLASS`].
pub const BUTTON_ICON_CLASS: &str = "button_icon_class";
/// Mode of the enclosing `SelectList` or `ImageList`.
pub const LIST_MODE: &str = "list_mode";
/// Selected value(s) of the enclosing `SelectList`.
pub const LIST_VALUE: &str = "list_value";
/// Attributes a `Menu` asks its `List` to carry.
pub const LIST_PROPS: &str = "list_props";
/// Attributes a `Menu` asks each `List_Item` to carry.
pub const LIST_ITEM_PROPS: &str = "list_item_props";
/// Classes a `Menu_Group` asks image `List_Content` to add.
pub const LIST_IMAGE_CLASS: &str = "list_image_class";
/// Checkbox input name of the enclosing `DataTable`.
pub const TABLE_NAME: &str = "table_name";
/// Whether rows of the enclosing `DataTable` carry a selection checkbox.
pub const TABLE_SELECTABLE: &str = "table_selectable";
pub const TABLE_MOVABLE: &str = "table_movable";
/// Id of the current selectable row's header cell.
pub const TABLE_ROW_HEADER: &str = "id_row_header";

/// Class tokens stored under `key`, or `None` when nothing was written.
pub fn context_classes(context: &Context, key: &str) -> Option<Vec<String>> {
    context.get(key).map(class_tokens)
}

pub fn set_context_classes(context: &mut Context, key: &str, classes: &[&str]) {
    context.insert(key, classes.to_vec());
}

/// `(name, value)` attribute pairs stored as `[["role", "menu"], ...]`.
pub fn context_pairs(context: &Context, key: &str) -> Vec<(String, String)> {
    let Some(Value::Array(items)) = context.get(key) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item.as_array().map(Vec::as_slice) {
            Some([name, value]) => Some((display(name).into_owned(), display(value).into_owned())),
            _ => None,
        })
        .collect()
}

pub fn set_context_pairs(context: &mut Context, key: &str, pairs: &[(&str, &str)]) {
    let items: Vec<Value> = pairs
        .iter()
        .map(|(name, value)| Value::from(vec![*name, *value]))
        .collect();
    context.insert(key, items);
}

pub fn context_flag(context: &Context, key: &str) -> bool {
    context.get(key).is_some_and(is_truthy)
}

pub fn context_string(context: &Context, key: &str) -> String {
    context
        .get(key)
        .map(|value| display(value).into_owned())
        .unwrap_or_default()
}

/// The label before HTML escaping, for attributes the widget escapes itself.
pub fn raw_label(state: &RenderState<'_>, context: &Context) -> Result<String, RenderError> {
    if let Some(label) = state.kwarg("label", context)? {
        return Ok(display(&label).into_owned());
    }
    Ok(state
        .field
        .as_ref()
        .map(|field| field.label().to_string())
        .unwrap_or_default())
}
