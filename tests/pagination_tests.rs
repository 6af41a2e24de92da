mod common;

use common::{TestResult, env, render};
use materialweb::{Catalog, Environment, Error, RenderConfig, RenderError};
use serde_json::json;
use std::sync::Arc;

const TABLE: &str = r#"{% DataTable pager=page %}{% DataTable_Body %}{% DataTable_Row %}{% DataTable_Col %}Tea{% endDataTable_Col %}{% endDataTable_Row %}{% endDataTable_Body %}{% endDataTable %}"#;

#[test]
fn middle_page_links_both_ways() -> TestResult {
    let html = render(
        TABLE,
        json!({"page": {"number": 2, "per_page": 10, "num_pages": 3, "count": 25}}),
    )?;
    assert!(html.contains("11‑20 of 25"), "{html}");
    assert!(html.contains(r#"data-first-page="true" href="?page=1""#), "{html}");
    assert!(html.contains(r#"data-prev-page="true" href="?page=1""#));
    assert!(html.contains(r#"data-next-page="true" href="?page=3""#));
    assert!(html.contains(r#"data-last-page="true" href="?page=3""#));
    assert!(!html.contains("disabled"));
    assert!(html.contains(r#"aria-selected="true" role="option" data-value="10""#));
    Ok(())
}

#[test]
fn last_page_disables_forward_buttons() -> TestResult {
    let html = render(
        TABLE,
        json!({
            "page": {"number": 3, "per_page": 10, "num_pages": 3, "count": 25},
            "request": {"full_path": "/teas?page=3&sort=name"}
        }),
    )?;
    assert!(html.contains("21‑25 of 25"), "{html}");
    assert!(html.contains(r#"data-prev-page="true" href="/teas?page=2&amp;sort=name""#), "{html}");
    assert!(html.contains(r#"data-next-page="true" type="button" disabled="disabled""#));
    assert!(html.contains(r#"data-last-page="true" type="button" disabled="disabled""#));
    Ok(())
}

#[test]
fn pagination_labels_are_translated() -> TestResult {
    let mut catalog = Catalog::new();
    catalog.insert("Rows per page", "Rader per side");
    catalog.insert("of", "av");
    catalog.insert("Next Page", "Neste side");
    let env = Environment::builder()
        .with_translator(Arc::new(catalog))
        .with_config(RenderConfig::new().with_sequential_ids("p"))
        .build()?;
    let html = env.render_str(
        TABLE,
        json!({"page": {"number": 1, "per_page": 25, "num_pages": 1, "count": 3}}),
    )?;
    assert!(html.contains("Rader per side"), "{html}");
    assert!(html.contains("1‑3 av 3"));
    assert!(html.contains(r#"title="Neste side""#));
    Ok(())
}

#[test]
fn table_without_pager_has_no_footer() -> TestResult {
    let html = render(TABLE, json!({"page": null}))?;
    assert!(!html.contains("mdc-data-table__pagination"), "{html}");
    assert!(html.contains(">Tea</td>"));
    Ok(())
}

#[test]
fn zero_page_size_is_rejected() {
    let err = env()
        .render_str(TABLE, json!({"page": {"number": 1, "per_page": 0, "num_pages": 1, "count": 0}}))
        .unwrap_err();
    assert!(
        matches!(err, Error::Render(RenderError::InvalidValue { ref key, .. }) if key == "pager"),
        "{err:?}"
    );
}
