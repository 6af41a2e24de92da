//! Compiling and rendering templates against one tag library.

use crate::config::RenderConfig;
use crate::error::Error;
use materialweb_forms::BoundField;
use materialweb_node::{Context, NodeList, Translator, Value};
use materialweb_parser::TagLibrary;
use materialweb_types::Identity;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Context data key holding bound form fields rather than variables.
///
/// The value is an object from field path (as written in templates, e.g.
/// `form.email`) to a [`BoundField`]. A field without a `name` takes the last
/// segment of its path.
pub const FIELDS_KEY: &str = "_fields";

/// A builder for creating an [`Environment`].
pub struct EnvironmentBuilder {
    library: Option<TagLibrary>,
    translator: Arc<dyn Translator>,
    config: RenderConfig,
}

impl Default for EnvironmentBuilder {
    fn default() -> Self {
        Self {
            library: None,
            translator: Arc::new(Identity),
            config: RenderConfig::default(),
        }
    }
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `library` instead of the Material component set.
    pub fn with_library(mut self, library: TagLibrary) -> Self {
        self.library = Some(library);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consumes the builder. Without an explicit library the full Material
    /// set is registered.
    pub fn build(self) -> Result<Environment, Error> {
        let library = match self.library {
            Some(library) => library,
            None => materialweb_components::material()?,
        };
        log::debug!("Environment ready with {} tags", library.len());
        Ok(Environment {
            library: Arc::new(library),
            translator: self.translator,
            config: self.config,
        })
    }
}

/// A tag library plus the services every render gets. Cheap to clone and
/// safe to share between threads.
#[derive(Clone)]
pub struct Environment {
    library: Arc<TagLibrary>,
    translator: Arc<dyn Translator>,
    config: RenderConfig,
}

impl Environment {
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    /// The Material components with default settings.
    pub fn material() -> Result<Self, Error> {
        EnvironmentBuilder::new().build()
    }

    pub fn library(&self) -> &TagLibrary {
        &self.library
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn compile(&self, source: &str) -> Result<CompiledTemplate, Error> {
        let nodes = self.library.parse(source)?;
        log::debug!("Compiled template into {} top-level nodes", nodes.len());
        Ok(CompiledTemplate {
            name: None,
            nodes: Arc::new(nodes),
        })
    }

    pub fn compile_file<P: AsRef<Path>>(&self, path: P) -> Result<CompiledTemplate, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("Failed to read template from '{}': {}", path.display(), e),
            ))
        })?;
        let mut template = self.compile(&source)?;
        template.name = Some(path.display().to_string());
        Ok(template)
    }

    /// An empty context carrying this environment's translator and config.
    pub fn context(&self) -> Context {
        self.config.apply(Context::new().with_translator(Arc::clone(&self.translator)))
    }

    /// A context whose variables are the keys of `data`, except
    /// [`FIELDS_KEY`], which is bound as form fields.
    pub fn context_from_value(&self, data: Value) -> Result<Context, Error> {
        let mut data = match data {
            Value::Object(map) => map,
            Value::Null => Default::default(),
            other => {
                return Err(Error::Context(format!(
                    "expected a JSON object at the top level, found {other}"
                )));
            }
        };

        let fields = match data.remove(FIELDS_KEY) {
            Some(fields) => serde_json::from_value::<BTreeMap<String, BoundField>>(fields)?,
            None => BTreeMap::new(),
        };

        let mut context = self.context();
        context.extend(Value::Object(data));
        for (path, mut field) in fields {
            if field.name.is_empty() {
                field.name = path.rsplit('.').next().unwrap_or_default().to_string();
            }
            log::trace!("Binding form field '{}' at '{}'", field.name, path);
            context.bind_field(path, Arc::new(field));
        }
        Ok(context)
    }

    pub fn context_from_json(&self, json: &str) -> Result<Context, Error> {
        self.context_from_value(serde_json::from_str(json)?)
    }

    /// Compiles and renders `source` in one step.
    pub fn render_str(&self, source: &str, data: Value) -> Result<String, Error> {
        let template = self.compile(source)?;
        let mut context = self.context_from_value(data)?;
        template.render(&mut context)
    }
}

/// A parsed template. Rendering never mutates it, so one compiled template
/// can serve any number of renders, each with its own [`Context`].
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    name: Option<String>,
    nodes: Arc<NodeList>,
}

impl CompiledTemplate {
    /// The file the template was loaded from, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn nodes(&self) -> &NodeList {
        &self.nodes
    }

    pub fn render(&self, context: &mut Context) -> Result<String, Error> {
        let html = self.nodes.render(context)?;
        log::debug!(
            "Rendered {} ({} bytes)",
            self.name.as_deref().unwrap_or("<string>"),
            html.len()
        );
        Ok(html)
    }
}
