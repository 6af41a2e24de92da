//! Material Design components as server-side template tags.
//!
//! The workspace crates hold the pieces: the rendering contract
//! ([`materialweb_node`]), the template parser ([`materialweb_parser`]), a form
//! field provider ([`materialweb_forms`]) and the component set
//! ([`materialweb_components`]). This crate ties them together into an
//! [`Environment`] that compiles and renders templates:
//!
//! ```
//! use materialweb::{Environment, RenderConfig};
//! use serde_json::json;
//!
//! let env = Environment::builder()
//!     .with_config(RenderConfig::new().with_sequential_ids("id"))
//!     .build()
//!     .unwrap();
//! let html = env
//!     .render_str(r#"{% Button mode="raised" %}{{ verb }}{% endButton %}"#, json!({"verb": "Save"}))
//!     .unwrap();
//! assert!(html.contains("mdc-button--raised"));
//! assert!(html.contains("Save"));
//! ```

pub mod config;
pub mod environment;
pub mod error;

pub use config::RenderConfig;
pub use environment::{CompiledTemplate, Environment, EnvironmentBuilder, FIELDS_KEY};
pub use error::Error;

pub use materialweb_forms::{BoundField, Form, Widget};
pub use materialweb_node::{Context, IdStrategy, RenderError};
pub use materialweb_parser::{ParseError, TagLibrary};
pub use materialweb_types::{Catalog, Translator};
