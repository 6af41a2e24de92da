//! Component types: the fixed definition shared by every invocation of a tag.

use crate::context::Context;
use crate::error::RenderError;
use crate::state::RenderState;
use materialweb_types::WidgetAttrs;
use std::borrow::Cow;
use std::fmt;

/// Props consumed by the render pipeline itself and never passed through.
pub const RESERVED_PROPS: [&str; 4] = ["mode", "tag", "class", "label"];

const DEFAULT_MODES: &[&str] = &["default"];

/// Builds a template from the render state, for markup that depends on context.
pub type TemplateFn = fn(&RenderState<'_>, &Context) -> String;

#[derive(Clone, Copy)]
pub enum Template {
    Static(&'static str),
    Dynamic(TemplateFn),
}

impl Template {
    pub fn source(&self, state: &RenderState<'_>, context: &Context) -> Cow<'static, str> {
        match self {
            Template::Static(source) => Cow::Borrowed(source),
            Template::Dynamic(build) => Cow::Owned(build(state, context)),
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Static(source) => f.debug_tuple("Static").field(source).finish(),
            Template::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// The template table of a component type.
#[derive(Debug, Clone, Copy)]
pub enum Templates {
    /// One template used for every mode.
    Shared(Template),
    /// One template per mode name.
    PerMode(&'static [(&'static str, Template)]),
}

/// The static definition of a component type.
///
/// Definitions are plain constants built from [`ComponentSpec::DEFAULT`]:
///
/// ```
/// use materialweb_node::{ComponentSpec, Template, Templates};
///
/// const CHIP: ComponentSpec = ComponentSpec {
///     name: "Chip",
///     wants_children: true,
///     templates: Templates::Shared(Template::Static(
///         r#"<{tag} class="mdc-chip {class}" {props}>{child}</{tag}>"#,
///     )),
///     ..ComponentSpec::DEFAULT
/// };
/// assert_eq!(CHIP.modes(), ["default"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ComponentSpec {
    pub name: &'static str,
    pub wants_children: bool,
    pub wants_form_field: bool,
    /// Render the bound field as a hidden input instead of its widget.
    pub hide_form_field: bool,
    /// Supported modes; the first one is used when none is requested.
    /// Empty means the single mode `default`.
    pub modes: &'static [&'static str],
    /// Props read by the component itself and excluded from pass-through.
    pub extra_props: &'static [&'static str],
    pub default_tag: &'static str,
    pub templates: Templates,
}

impl ComponentSpec {
    pub const DEFAULT: ComponentSpec = ComponentSpec {
        name: "",
        wants_children: false,
        wants_form_field: false,
        hide_form_field: false,
        modes: &[],
        extra_props: &[],
        default_tag: "div",
        templates: Templates::Shared(Template::Static("")),
    };

    pub fn modes(&self) -> &'static [&'static str] {
        if self.modes.is_empty() {
            DEFAULT_MODES
        } else {
            self.modes
        }
    }

    /// Picks the mode for one render. `None` selects the first mode.
    ///
    /// A component without declared modes always renders as `"default"`;
    /// a requested mode is ignored with a warning.
    pub fn resolve_mode(&self, requested: Option<&str>) -> Result<&'static str, RenderError> {
        if self.modes.is_empty() {
            if let Some(requested) = requested {
                log::warn!("{} has no modes; ignoring mode '{}'", self.name, requested);
            }
            return Ok(DEFAULT_MODES[0]);
        }
        let modes = self.modes();
        let Some(requested) = requested else {
            return Ok(modes[0]);
        };
        modes
            .iter()
            .find(|mode| **mode == requested)
            .copied()
            .ok_or_else(|| RenderError::UnsupportedMode {
                component: self.name.to_string(),
                mode: requested.to_string(),
                available: modes.join(", "),
            })
    }

    pub fn template(&self, mode: &str) -> Result<Template, RenderError> {
        match self.templates {
            Templates::Shared(template) => Ok(template),
            Templates::PerMode(table) => table
                .iter()
                .find(|(name, _)| *name == mode)
                .map(|(_, template)| *template)
                .ok_or_else(|| RenderError::MissingTemplate {
                    component: self.name.to_string(),
                    mode: mode.to_string(),
                }),
        }
    }

    /// Checks that every mode has a template.
    pub fn validate(&self) -> Result<(), RenderError> {
        for mode in self.modes() {
            self.template(mode)?;
        }
        Ok(())
    }

    /// Whether a keyword prop is forwarded to the rendered attribute list.
    pub fn is_pass_through(&self, key: &str) -> bool {
        !RESERVED_PROPS.contains(&key) && !self.extra_props.contains(&key)
    }
}

/// A component type: a [`ComponentSpec`] plus optional render hooks.
///
/// Hooks run once per render with a fresh [`RenderState`]. They must not keep
/// state of their own; anything a descendant needs goes into the [`Context`].
pub trait Component: Send + Sync {
    fn spec(&self) -> &ComponentSpec;

    /// Adjusts the assembled values before children render and the template
    /// is formatted. Writes to `context` are visible to every descendant.
    fn prepare(&self, _state: &mut RenderState<'_>, _context: &mut Context) -> Result<(), RenderError> {
        Ok(())
    }

    /// Adjusts the attributes handed to the bound field's widget.
    fn prepare_attributes(
        &self,
        _state: &RenderState<'_>,
        _context: &Context,
        _attrs: &mut WidgetAttrs,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}

/// A component type that needs no hooks is just its spec.
impl Component for ComponentSpec {
    fn spec(&self) -> &ComponentSpec {
        self
    }
}
