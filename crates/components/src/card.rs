//! Cards: <https://material.io/components/cards>

use crate::support::{BUTTON_CLASS, BUTTON_ICON_CLASS, set_context_classes};
use materialweb_node::{Component, ComponentSpec, Context, RenderError, RenderState, Template, Templates};
use std::sync::Arc;

pub struct Card;

const CARD: ComponentSpec = ComponentSpec {
    name: "Card",
    wants_children: true,
    modes: &["elevated", "outlined"],
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-card {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for Card {
    fn spec(&self) -> &ComponentSpec {
        &CARD
    }

    fn prepare(&self, state: &mut RenderState<'_>, _context: &mut Context) -> Result<(), RenderError> {
        match state.mode {
            "elevated" => state.values.add_class("mdc-card--elevated"),
            "outlined" => state.values.add_class("mdc-card--outlined"),
            _ => {}
        }
        Ok(())
    }
}

const CARD_PRIMARY_ACTION: ComponentSpec = ComponentSpec {
    name: "Card_PrimaryAction",
    wants_children: true,
    templates: Templates::Shared(Template::Static(
        r#"<{tag} class="mdc-card__primary-action {class}" tabindex="0" {props}>
  {child}
</{tag}>"#,
    )),
    ..ComponentSpec::DEFAULT
};

pub struct CardMedia;

const CARD_MEDIA: ComponentSpec = ComponentSpec {
    name: "Card_Media",
    wants_children: true,
    modes: &["default", "square"],
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-card__media {class}" {props}>
  <div class="mdc-card__media-content">{child}</div>
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for CardMedia {
    fn spec(&self) -> &ComponentSpec {
        &CARD_MEDIA
    }

    fn prepare(&self, state: &mut RenderState<'_>, _context: &mut Context) -> Result<(), RenderError> {
        if state.is_mode("square") {
            state.values.add_class("mdc-card__media--square");
        }
        Ok(())
    }
}

/// The action row of a card. Buttons inside pick up the card action classes.
pub struct CardActions;

const CARD_ACTIONS: ComponentSpec = ComponentSpec {
    name: "Card_Actions",
    wants_children: true,
    modes: &["default", "full_bleed"],
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-card__actions {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

impl Component for CardActions {
    fn spec(&self) -> &ComponentSpec {
        &CARD_ACTIONS
    }

    fn prepare(&self, state: &mut RenderState<'_>, context: &mut Context) -> Result<(), RenderError> {
        if state.is_mode("full_bleed") {
            state.values.add_class("mdc-card__actions--full-bleed");
        }
        set_context_classes(context, BUTTON_CLASS, &["mdc-card__action", "mdc-card__action--button"]);
        set_context_classes(context, BUTTON_ICON_CLASS, &["mdc-card__action", "mdc-card__action--icon"]);
        Ok(())
    }
}

const CARD_CONTENT: ComponentSpec = ComponentSpec {
    name: "Card_Content",
    wants_children: true,
    templates: Templates::Shared(Template::Static(r#"<{tag} class="mdc-card__content {class}" {props}>
  {child}
</{tag}>"#)),
    ..ComponentSpec::DEFAULT
};

pub(crate) fn components() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::new(Card),
        Arc::new(CARD_PRIMARY_ACTION),
        Arc::new(CardMedia),
        Arc::new(CardActions),
        Arc::new(CARD_CONTENT),
    ]
}

#[cfg(test)]
mod tests {
    use crate::testing::render;
    use serde_json::json;

    const CARD: &str = r##"{% Card mode=card_mode %}
  {% Card_Media mode="square" %}Title{% endCard_Media %}
  {% Card_Actions mode="full_bleed" %}
    {% Button tag="a" href="#" %}{% Button_Label %}Read{% endButton_Label %}{% endButton %}
  {% endCard_Actions %}
{% endCard %}"##;

    #[test]
    fn card_nests_media_and_actions() {
        let html = render(CARD, json!({"card_mode": "outlined"}));
        let card = html.find(r#"class="mdc-card mdc-card--outlined""#).unwrap();
        let actions = html.find("mdc-card__actions mdc-card__actions--full-bleed").unwrap();
        let label = html.find("Read").unwrap();
        assert!(card < actions && actions < label);
        assert!(html.contains(r#"class="mdc-card__media mdc-card__media--square""#));
        assert!(
            html.contains(
                r##"<a class="mdc-button mdc-button--touch mdc-card__action mdc-card__action--button mdc-button--outlined" href="#">"##
            ),
            "{html}"
        );
    }

    #[test]
    fn card_defaults_to_elevated() {
        let html = render(r#"{% Card %}{% Card_Content %}x{% endCard_Content %}{% endCard %}"#, json!({}));
        assert!(html.starts_with(r#"<div class="mdc-card mdc-card--elevated" >"#), "{html}");
        assert!(html.contains(r#"<div class="mdc-card__content " >"#));
    }
}
