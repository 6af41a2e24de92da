// src/error.rs
use materialweb_node::RenderError;
use materialweb_parser::ParseError;
use thiserror::Error;

/// Everything that can go wrong between reading a template and writing HTML.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Context data that is valid JSON but has the wrong shape.
    #[error("Invalid context data: {0}")]
    Context(String),
}
