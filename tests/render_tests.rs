mod common;

use common::{TestResult, assert_in_order, attr_value, env, render};
use materialweb::{Catalog, Environment, Error, ParseError, RenderConfig, RenderError};
use serde_json::json;
use std::sync::Arc;

#[test]
fn default_mode_is_the_first_available() -> TestResult {
    let html = render("{% Button %}Go{% endButton %}", json!({}))?;
    assert!(html.contains("mdc-button--outlined"), "{html}");

    let html = render("{% Button mode=m %}Go{% endButton %}", json!({"m": ""}))?;
    assert!(html.contains("mdc-button--outlined"), "falsy mode falls back: {html}");
    Ok(())
}

#[test]
fn unknown_mode_names_mode_component_and_choices() {
    let err = render(r#"{% Button mode="text" %}Go{% endButton %}"#, json!({})).unwrap_err();
    match err {
        Error::Render(RenderError::UnsupportedMode {
            component,
            mode,
            available,
        }) => {
            assert_eq!(component, "Button");
            assert_eq!(mode, "text");
            assert!(available.contains("outlined") && available.contains("raised"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn falsy_props_are_dropped_except_empty_strings() -> TestResult {
    let html = render(
        "{% Button a=a b=b c=c d=d %}Go{% endButton %}",
        json!({"a": false, "b": "", "c": 0, "d": "x"}),
    )?;
    assert!(
        html.contains(r#"class="mdc-button mdc-button--touch mdc-button--outlined" b="" d="x">"#),
        "{html}"
    );
    Ok(())
}

#[test]
fn duplicate_props_keep_the_last_value() -> TestResult {
    let html = render(r#"{% ToggleButton state=True aria-pressed="false" %}"#, json!({}))?;
    assert_eq!(html.matches("aria-pressed").count(), 1, "{html}");
    assert_eq!(attr_value(&html, "aria-pressed"), Some("true"));
    Ok(())
}

#[test]
fn hook_classes_follow_the_given_classes() -> TestResult {
    let html = render(r#"{% ToggleButton class="foo bar" state=True %}"#, json!({}))?;
    assert_eq!(
        attr_value(&html, "class"),
        Some("mdc-icon-button toggle foo bar mdc-icon-button--on")
    );
    Ok(())
}

#[test]
fn toggle_state_controls_on_class_and_pressed() -> TestResult {
    let source = r#"{% ToggleButton state=liked icon_when_on="favorite" icon_when_off="favorite_border" %}"#;

    let on = render(source, json!({"liked": true}))?;
    assert!(on.contains("mdc-icon-button--on") && on.contains(r#"aria-pressed="true""#), "{on}");

    let off = render(source, json!({"liked": false}))?;
    assert!(!off.contains("mdc-icon-button--on") && !off.contains("aria-pressed"), "{off}");
    assert!(off.contains(">favorite_border</i>"));
    Ok(())
}

#[test]
fn fresh_ids_differ_between_renders() -> TestResult {
    let env = Environment::material()?;
    let template = env.compile(
        r#"{% SelectList mode="radio" %}{% SelectList_Item name="size" value="s" %}Small{% endSelectList_Item %}{% endSelectList %}"#,
    )?;
    let first = template.render(&mut env.context())?;
    let second = template.render(&mut env.context())?;

    let a = attr_value(&first, "for").map(str::to_owned);
    let b = attr_value(&second, "for").map(str::to_owned);
    assert!(a.is_some() && b.is_some());
    assert_ne!(a, b);
    assert_eq!(a.as_deref().map(str::len), Some(32));
    Ok(())
}

#[test]
fn form_bound_ids_are_stable() -> TestResult {
    let env = Environment::material()?;
    let template = env.compile("{% TextField form.email %}")?;
    let data = json!({"_fields": {"form.email": {"widget": "email", "label": "Email"}}});
    let first = template.render(&mut env.context_from_value(data.clone())?)?;
    let second = template.render(&mut env.context_from_value(data)?)?;
    assert_eq!(first, second);
    assert!(first.contains(r#"id="id_email""#), "{first}");
    Ok(())
}

#[test]
fn nested_components_contain_each_other() -> TestResult {
    let html = render(
        "{% List %}{% List_Item %}{% List_Content %}Copy{% endList_Content %}{% endList_Item %}{% endList %}",
        json!({}),
    )?;
    assert!(html.starts_with(r#"<ul class="mdc-list ""#), "{html}");
    assert!(html.ends_with("</ul>"), "{html}");
    assert_in_order(
        &html,
        &[
            r#"<li class="mdc-list-item ""#,
            r#"<span class="mdc-list-item__text" >Copy</span>"#,
            "</li>",
            "</ul>",
        ],
    );
    Ok(())
}

#[test]
fn ancestor_writes_reach_descendant_hooks() -> TestResult {
    let html = render(
        "{% Menu %}{% List %}{% List_Item %}Undo{% endList_Item %}{% endList %}{% endMenu %}",
        json!({}),
    )?;
    assert_in_order(&html, &[r#"class="mdc-menu mdc-menu-surface "#, r#"role="menu""#, r#"role="menuitem""#]);
    Ok(())
}

#[test]
fn variables_are_escaped_and_missing_ones_render_empty() -> TestResult {
    let html = render(
        "{% Button %}{{ user.name }}{{ missing }}{% endButton %}",
        json!({"user": {"name": "<Ann>"}}),
    )?;
    assert!(html.contains("&lt;Ann&gt;"), "{html}");
    assert!(!html.contains("<Ann>"));
    Ok(())
}

#[test]
fn strict_variables_reject_missing_references() -> TestResult {
    let env = Environment::builder()
        .with_config(RenderConfig::new().with_strict_variables(true))
        .build()?;
    let err = env
        .render_str("{% Button %}{{ missing }}{% endButton %}", json!({}))
        .unwrap_err();
    assert!(matches!(err, Error::Render(RenderError::UnresolvedReference(_))), "{err:?}");
    Ok(())
}

#[test]
fn unresolved_kwarg_reference_is_an_error() {
    let err = render("{% Button mode=nowhere.at.all %}x{% endButton %}", json!({})).unwrap_err();
    assert!(matches!(err, Error::Render(RenderError::UnresolvedReference(_))), "{err:?}");
}

#[test]
fn template_syntax_errors_carry_a_location() {
    let err = env().compile("<p>\n{% Shiny %}").unwrap_err();
    match err {
        Error::Parse(ParseError::UnknownTag { tag, location }) => {
            assert_eq!(tag, "Shiny");
            assert_eq!(location.line, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = env().compile("{% Button %}never closed").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Unclosed { .. })), "{err:?}");
}

#[test]
fn trans_uses_the_environment_catalog() -> TestResult {
    let mut catalog = Catalog::new();
    catalog.insert("Save", "Lagre");
    let env = Environment::builder().with_translator(Arc::new(catalog)).build()?;
    let html = env.render_str(
        r#"{% load material %}{% Button %}{% trans "Save" %}{# not rendered #}{% endButton %}"#,
        json!({}),
    )?;
    assert!(html.contains("Lagre"), "{html}");
    assert!(!html.contains("not rendered"));
    Ok(())
}
