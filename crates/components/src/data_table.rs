//! Data tables: <https://material.io/components/data-tables>
//!
//! `DataTable` publishes its row options through the context; rows and
//! header rows read them to decide whether to render selection checkboxes.
//! A `pager` value adds the pagination footer.

use crate::button::IconButton;
use crate::support::{
    BUTTON_CLASS, BUTTON_ICON_CLASS, TABLE_MOVABLE, TABLE_NAME, TABLE_ROW_HEADER, TABLE_SELECTABLE, context_flag,
    context_string,
};
use materialweb_node::{
    Component, ComponentSpec, Context, Node, RenderError, RenderState, Template, Templates, format_with,
};
use materialweb_types::escape_html;
use materialweb_types::value::{display, is_truthy};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

const PAGE_SIZES: [u64; 3] = [10, 25, 100];

/// One page of a paginated result, as passed in `pager=`.
///
/// ```json
/// {"number": 2, "per_page": 25, "num_pages": 4, "count": 80}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pager {
    /// 1-based number of the current page.
    pub number: u64,
    pub per_page: u64,
    pub num_pages: u64,
    /// Total number of items over all pages.
    pub count: u64,
}

impl Pager {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    /// 1-based index of the first item on this page, 0 for an empty result.
    /// `None` when the page lies beyond what a `u64` can count.
    pub fn start_index(&self) -> Option<u64> {
        if self.count == 0 {
            return Some(0);
        }
        self.number.saturating_sub(1).checked_mul(self.per_page)?.checked_add(1)
    }

    pub fn end_index(&self) -> Option<u64> {
        Some(self.number.checked_mul(self.per_page)?.min(self.count))
    }
}

/// Replaces (or adds) the `name` query parameter of a request path.
fn page_url(full_path: &str, name: &str, page: u64) -> String {
    let (path, query) = full_path.split_once('?').unwrap_or((full_path, ""));
    let param = format!("{}={}", name, page);
    let mut replaced = false;
    let mut params: Vec<String> = Vec::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let key = pair.split_once('=').map_or(pair, |(key, _)| key);
        if key != name {
            params.push(pair.to_string());
        } else if !replaced {
            params.push(param.clone());
            replaced = true;
        }
    }
    if !replaced {
        params.push(param);
    }
    format!("{}?{}", path, params.join("&"))
}

pub struct DataTable;

const DATA_TABLE: ComponentSpec = ComponentSpec {
    name: "DataTable",
    wants_children: true,
    extra_props: &["name", "pager", "page_name", "row_selectable", "row_movable"],
    default_tag: "table",
    templates: Templates::Shared(Template::Static(r#"<div class="mdc-data-table">
  <div class="mdc-data-table__table-container">
    <{tag} aria-label="{label}" {props} class="mdc-data-table__table {class}">
      {child}
    </{tag}>
  </div>
  {pagination}
</div>"#)),
    ..ComponentSpec::DEFAULT
};

const PAGINATION: &str = r#"<div class="mdc-data-table__pagination">
  <div class="mdc-data-table__pagination-trailing">
    <div class="mdc-data-table__pagination-rows-per-page">
      <div class="mdc-data-table__pagination-rows-per-page-label">
        {label_rows_per_page}
      </div>

      <div class="mdc-select mdc-select--outlined mdc-select--no-label mdc-data-table__pagination-rows-per-page-select">
        <div role="button" aria-haspopup="listbox"
            aria-labelledby="{id_page_size}" tabindex="0"
            class="mdc-select__anchor">
          <span id="{id_page_size}" class="mdc-select__selected-text">
            {page_size}
          </span>
          <span class="mdc-select__dropdown-icon">
            <svg
                class="mdc-select__dropdown-icon-graphic"
                viewBox="7 10 10 5">
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
          <span class="mdc-notched-outline mdc-notched-outline--notched">
            <span class="mdc-notched-outline__leading"></span>
            <span class="mdc-notched-outline__trailing"></span>
          </span>
        </div>

        <div role="listbox"
            class="mdc-select__menu mdc-menu mdc-menu-surface mdc-menu-surface--fullwidth">
          <ul class="mdc-list">
            {page_size_options}
          </ul>
        </div>
      </div>
    </div>

    <div class="mdc-data-table__pagination-navigation">
      <div class="mdc-data-table__pagination-total">
        {start}‑{end} {label_of} {total_items}
      </div>
      {first_button}
      {prev_button}
      {next_button}
      {last_button}
    </div>
  </div>
</div>"#;

const PAGE_SIZE_OPTION: &str = r#"<li class="mdc-list-item{selected_class}" aria-selected="{selected}" role="option" data-value="{size}">
              <span class="mdc-list-item__text">{size}</span>
            </li>"#;

/// The navigation buttons of one pagination footer.
struct PagerButton {
    icon: &'static str,
    label: &'static str,
    marker: &'static str,
    class: &'static str,
    page: Option<u64>,
}

impl PagerButton {
    fn build(&self, context: &Context, full_path: &str, page_name: &str) -> Result<Node, RenderError> {
        let builder = Node::builder(Arc::new(IconButton))
            .kwarg("label", context.gettext(self.label))
            .kwarg(self.marker, "true")
            .kwarg("class", self.class)
            .text(self.icon);
        let builder = match self.page {
            Some(page) => builder.kwarg("href", page_url(full_path, page_name, page)),
            None => builder.kwarg("type", "button").kwarg("disabled", "disabled"),
        };
        builder.build()
    }
}

impl DataTable {
    fn render_pagination(
        &self,
        state: &RenderState<'_>,
        context: &mut Context,
        pager: Pager,
    ) -> Result<String, RenderError> {
        if pager.number == 0 || pager.per_page == 0 {
            return Err(RenderError::invalid_value(
                state.component(),
                "pager",
                "page number and page size start at 1",
            ));
        }
        let (Some(start), Some(end)) = (pager.start_index(), pager.end_index()) else {
            return Err(RenderError::invalid_value(
                state.component(),
                "pager",
                "page number times page size does not fit in 64 bits",
            ));
        };
        let page_name = state
            .kwarg_string("page_name", context)?
            .unwrap_or_else(|| "page".to_string());
        let full_path = context
            .lookup("request.full_path")
            .map(|value| display(value).into_owned())
            .unwrap_or_default();

        let back = pager.has_previous();
        let forward = pager.has_next();
        let buttons = [
            PagerButton {
                icon: "first_page",
                label: "First Page",
                marker: "data-first-page",
                class: "mdc-data-table__pagination-button material-icons",
                page: back.then_some(1),
            },
            PagerButton {
                icon: "chevron_left",
                label: "Previous Page",
                marker: "data-prev-page",
                class: "mdc-data-table__pagination-button material-icons",
                page: back.then(|| pager.number - 1),
            },
            PagerButton {
                icon: "chevron_right",
                label: "Next Page",
                marker: "data-next-page",
                class: "material-icons mdc-data-table__pagination-button",
                page: forward.then(|| pager.number + 1),
            },
            PagerButton {
                icon: "last_page",
                label: "Last Page",
                marker: "data-last-page",
                class: "material-icons mdc-data-table__pagination-button",
                page: forward.then_some(pager.num_pages),
            },
        ];

        // Button classes left by an earlier action row must not reach the pager.
        let inherited = [BUTTON_CLASS, BUTTON_ICON_CLASS].map(|key| (key, context.remove(key)));
        let mut values: BTreeMap<&str, String> = BTreeMap::new();
        let rendered = ["first_button", "prev_button", "next_button", "last_button"]
            .into_iter()
            .zip(&buttons)
            .try_for_each(|(key, button)| {
                let node = button.build(context, &full_path, &page_name)?;
                values.insert(key, node.render(context)?);
                Ok::<(), RenderError>(())
            });
        for (key, value) in inherited {
            if let Some(value) = value {
                context.insert(key, value);
            }
        }
        rendered?;

        let mut options = Vec::with_capacity(PAGE_SIZES.len());
        for size in PAGE_SIZES {
            let selected = size == pager.per_page;
            let size = size.to_string();
            let option = format_with(state.component(), PAGE_SIZE_OPTION, |name| match name {
                "selected_class" => Some(Cow::Borrowed(if selected { " mdc-list-item--selected" } else { "" })),
                "selected" => Some(Cow::Borrowed(if selected { "true" } else { "false" })),
                "size" => Some(Cow::Borrowed(size.as_str())),
                _ => None,
            })?;
            options.push(option);
        }

        values.insert("page_size_options", options.join("\n            "));
        values.insert("page_size", pager.per_page.to_string());
        values.insert("total_items", pager.count.to_string());
        values.insert("start", start.to_string());
        values.insert("end", end.to_string());
        values.insert("label_rows_per_page", escape_html(&context.gettext("Rows per page")).into_owned());
        values.insert("label_of", escape_html(&context.gettext("of")).into_owned());
        values.insert("id_page_size", format!("{}-pagesize", state.values.id));

        format_with(state.component(), PAGINATION, |name| {
            values.get(name).map(|value| Cow::Borrowed(value.as_str()))
        })
    }
}

impl Component for DataTable {
    fn spec(&self) -> &ComponentSpec {
        &DATA_TABLE
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        let name = state.kwarg_string("name", context)?.unwrap_or_default();
        let selectable = state.flag("row_selectable", context)?;
        let movable = state.flag("row_movable", context)?;
        context.insert(TABLE_NAME, name);
        context.insert(TABLE_SELECTABLE, selectable);
        context.insert(TABLE_MOVABLE, movable);

        let pagination = match state.kwarg("pager", context)? {
            Some(value) if is_truthy(&value) => {
                let pager: Pager = serde_json::from_value(value)
                    .map_err(|err| RenderError::invalid_value(state.component(), "pager", err.to_string()))?;
                log::debug!("Paginating {} at page {} of {}", state.values.id, pager.number, pager.num_pages);
                self.render_pagination(state, context, pager)?
            }
            _ => String::new(),
        };
        state.values.set("pagination", pagination);
        Ok(())
    }
}

const DATA_TABLE_HEAD: ComponentSpec = ComponentSpec {
    name: "DataTable_Head",
    wants_children: true,
    default_tag: "thead",
    templates: Templates::Shared(Template::Static(r#"<{tag} {props} class="{class}">{child}</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

pub struct DataTableHeadRow;

const DATA_TABLE_HEAD_ROW: ComponentSpec = ComponentSpec {
    name: "DataTable_Head_Row",
    wants_children: true,
    default_tag: "tr",
    templates: Templates::Shared(Template::Static(r#"<{tag} {props} class="mdc-data-table__header-row {class}">
  {select_checkbox}
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

const HEAD_ROW_CHECKBOX: &str = r#"<th role="columnheader" scope="col"
    class="mdc-data-table__header-cell mdc-data-table__header-cell--checkbox">
  <div class="mdc-checkbox mdc-data-table__header-row-checkbox mdc-checkbox--selected">
    <input type="checkbox" aria-label="{label_toggle_all}"
        class="mdc-checkbox__native-control" />
    <div class="mdc-checkbox__background">
      <svg viewBox="0 0 24 24" class="mdc-checkbox__checkmark">
        <path fill="none" d="M1.73,12.91 8.1,19.28 22.79,4.59"
            class="mdc-checkbox__checkmark-path" />
      </svg>
      <div class="mdc-checkbox__mixedmark"></div>
    </div>
    <div class="mdc-checkbox__ripple"></div>
  </div>
</th>"#;

impl Component for DataTableHeadRow {
    fn spec(&self) -> &ComponentSpec {
        &DATA_TABLE_HEAD_ROW
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        let checkbox = if context_flag(context, TABLE_SELECTABLE) {
            let label = escape_html(&context.gettext("Toggle all rows")).into_owned();
            format_with(state.component(), HEAD_ROW_CHECKBOX, |name| {
                (name == "label_toggle_all").then(|| Cow::Borrowed(label.as_str()))
            })?
        } else {
            String::new()
        };
        state.values.set("select_checkbox", checkbox);
        Ok(())
    }
}

/// Adds the numeric modifier for `type="num"` cells.
fn numeric_cell(state: &mut RenderState<'_>, context: &Context, class: &str) -> Result<(), RenderError> {
    if state.kwarg_string("type", context)?.as_deref() == Some("num") {
        state.values.add_class(class);
    }
    Ok(())
}

pub struct DataTableHeadCol;

const DATA_TABLE_HEAD_COL: ComponentSpec = ComponentSpec {
    name: "DataTable_Head_Col",
    wants_children: true,
    extra_props: &["type"],
    default_tag: "th",
    templates: Templates::Shared(Template::Static(r#"<{tag} role="columnheader" scope="col" {props}
    class="mdc-data-table__header-cell {class}">{child}</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for DataTableHeadCol {
    fn spec(&self) -> &ComponentSpec {
        &DATA_TABLE_HEAD_COL
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        numeric_cell(state, context, "mdc-data-table__header-cell--numeric")
    }
}

const DATA_TABLE_BODY: ComponentSpec = ComponentSpec {
    name: "DataTable_Body",
    wants_children: true,
    default_tag: "tbody",
    templates: Templates::Shared(Template::Static(r#"<{tag} {props} class="mdc-data-table__content {class}">
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

/// A body row. In a selectable table it starts with a checkbox labelled by
/// the row's `DataTable_ColHeader`.
pub struct DataTableRow;

const DATA_TABLE_ROW: ComponentSpec = ComponentSpec {
    name: "DataTable_Row",
    wants_children: true,
    extra_props: &["value"],
    default_tag: "tr",
    templates: Templates::Shared(Template::Static(r#"<{tag} {props} class="mdc-data-table__row {class}">
  {select_checkbox}
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

const ROW_CHECKBOX: &str = r#"<td class="mdc-data-table__cell mdc-data-table__cell--checkbox">
  <div class="mdc-checkbox mdc-data-table__row-checkbox">
    <input name="{name}" value="{value}" type="checkbox"
        aria-labelledby="{id_row_header}"
        class="mdc-checkbox__native-control" />
    <div class="mdc-checkbox__background">
      <svg viewBox="0 0 24 24" class="mdc-checkbox__checkmark">
        <path fill="none" d="M1.73,12.91 8.1,19.28 22.79,4.59"
            class="mdc-checkbox__checkmark-path" />
      </svg>
      <div class="mdc-checkbox__mixedmark"></div>
    </div>
    <div class="mdc-checkbox__ripple"></div>
  </div>
</td>"#;

impl Component for DataTableRow {
    fn spec(&self) -> &ComponentSpec {
        &DATA_TABLE_ROW
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if !context_flag(context, TABLE_SELECTABLE) {
            state.values.set("select_checkbox", "");
            return Ok(());
        }
        let header = format!("{}-header", state.values.id);
        context.insert(TABLE_ROW_HEADER, header.as_str());

        let name = escape_html(&context_string(context, TABLE_NAME)).into_owned();
        let value = state
            .kwarg("value", context)?
            .map(|value| escape_html(&display(&value)).into_owned())
            .unwrap_or_default();
        let checkbox = format_with(state.component(), ROW_CHECKBOX, |key| match key {
            "name" => Some(Cow::Borrowed(name.as_str())),
            "value" => Some(Cow::Borrowed(value.as_str())),
            "id_row_header" => Some(Cow::Borrowed(header.as_str())),
            _ => None,
        })?;
        state.values.set("select_checkbox", checkbox);
        Ok(())
    }
}

pub struct DataTableCol;

const DATA_TABLE_COL: ComponentSpec = ComponentSpec {
    name: "DataTable_Col",
    wants_children: true,
    extra_props: &["type"],
    default_tag: "td",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} {props} class="mdc-data-table__cell {class}">{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

impl Component for DataTableCol {
    fn spec(&self) -> &ComponentSpec {
        &DATA_TABLE_COL
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        numeric_cell(state, context, "mdc-data-table__cell--numeric")
    }
}

pub struct DataTableColHeader;

const DATA_TABLE_COL_HEADER: ComponentSpec = ComponentSpec {
    name: "DataTable_ColHeader",
    wants_children: true,
    extra_props: &["type"],
    default_tag: "th",
    templates: Templates::Shared(Template::Static(
        r#"<{tag} scope="row" {props} class="mdc-data-table__cell {class}">{child}</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

impl Component for DataTableColHeader {
    fn spec(&self) -> &ComponentSpec {
        &DATA_TABLE_COL_HEADER
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        numeric_cell(state, context, "mdc-data-table__cell--numeric")?;
        if context.contains(TABLE_ROW_HEADER) {
            state.values.push_prop("id", context_string(context, TABLE_ROW_HEADER));
        }
        Ok(())
    }
}

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::new(DataTable),
        Arc::new(DATA_TABLE_HEAD),
        Arc::new(DataTableHeadRow),
        Arc::new(DataTableHeadCol),
        Arc::new(DATA_TABLE_BODY),
        Arc::new(DataTableRow),
        Arc::new(DataTableCol),
        Arc::new(DataTableColHeader),
    ]
}
