mod common;

use common::{TestResult, attr_value, env};
use serde_json::json;
use std::thread;

const PAGE: &str = r#"{% TopAppBar %}{% TopAppBar_Left %}{% TopAppBar_Title %}{{ title }}{% endTopAppBar_Title %}{% endTopAppBar_Left %}{% endTopAppBar %}
{% Card %}{% Card_Actions %}{% Button mode="raised" %}{{ action }}{% endButton %}{% endCard_Actions %}{% endCard %}
{% SelectList mode="checkbox" value=picked %}{% SelectList_Item name="tea" value="green" %}Green{% endSelectList_Item %}{% SelectList_Item name="tea" value="black" %}Black{% endSelectList_Item %}{% endSelectList %}"#;

#[test]
fn one_compiled_template_renders_on_many_threads() -> TestResult {
    let env = env();
    let template = env.compile(PAGE)?;

    let outputs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let env = &env;
                let template = &template;
                scope.spawn(move || {
                    let data = json!({
                        "title": format!("Page {n}"),
                        "action": format!("Go {n}"),
                        "picked": if n % 2 == 0 { "green" } else { "black" },
                    });
                    let mut context = env.context_from_value(data)?;
                    template.render(&mut context)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("render thread panicked"))
            .collect::<Result<Vec<String>, materialweb::Error>>()
    })?;

    for (n, html) in outputs.iter().enumerate() {
        assert!(html.contains(&format!(">Page {n}</span>")), "{html}");
        assert!(html.contains(&format!("Go {n}")));

        let picked = if n % 2 == 0 { "green" } else { "black" };
        for item in html.split("<li").skip(1) {
            let checked = item.contains(r#"checked="checked""#);
            assert_eq!(checked, item.contains(&format!(r#"value="{picked}""#)), "{item}");
        }
    }
    // Every context counts its ids from the start.
    let first_id = attr_value(&outputs[0], "for");
    assert!(first_id.is_some_and(|id| id.starts_with('t')));
    assert!(outputs.iter().all(|html| attr_value(html, "for") == first_id));
    assert_ne!(outputs[0], outputs[1]);
    Ok(())
}

#[test]
fn renders_do_not_share_context_writes() -> TestResult {
    let env = env();
    let actions = env.compile("{% Card_Actions %}{% endCard_Actions %}")?;
    let button = env.compile("{% Button %}x{% endButton %}")?;

    let mut first = env.context();
    actions.render(&mut first)?;
    let leaked = button.render(&mut first)?;
    assert!(leaked.contains("mdc-card__action--button"), "{leaked}");

    let fresh = button.render(&mut env.context())?;
    assert!(!fresh.contains("mdc-card__action"), "{fresh}");
    Ok(())
}
