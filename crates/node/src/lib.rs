//! The component rendering contract.
//!
//! A [`Node`] is one invocation of a component type in a template. Rendering
//! it resolves its arguments against a [`Context`], assembles a
//! [`RenderValues`] map, lets the component's hooks adjust it, renders child
//! content and finally substitutes the values into the template chosen by
//! mode.
//!
//! ## Key Abstractions
//!
//! - **[`ComponentSpec`]**: the static definition of a component type
//! - **[`Component`]**: a spec plus the `prepare`/`prepare_attributes` hooks
//! - **[`Node`]** / **[`NodeList`]**: the parsed template tree
//! - **[`Context`]**: variables, bound fields and render services for one render

mod component;
mod context;
mod error;
mod format;
mod ids;
mod node;
mod nodelist;
mod state;

pub use component::{Component, ComponentSpec, RESERVED_PROPS, Template, TemplateFn, Templates};
pub use context::Context;
pub use error::RenderError;
pub use format::{format_template, format_with};
pub use ids::{IdGenerator, IdStrategy};
pub use node::{Node, NodeBuilder};
pub use nodelist::{NodeList, TemplateNode};
pub use state::{RenderState, RenderValues};

pub use materialweb_types::{Argument, FormField, Translator, Value, WidgetAttrs};
