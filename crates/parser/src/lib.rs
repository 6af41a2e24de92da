//! Compiles component templates.
//!
//! The syntax is a small Django subset:
//!
//! - `{% Tag arg key=value key="literal" %}` invokes a component; tags that
//!   take children are closed with `{% endTag %}`
//! - `{{ path.to.value }}` outputs a context value, HTML-escaped
//! - `{% trans "Text" %}` and `{% trans "Text" as name %}` translate
//! - `{% load ... %}` is accepted and ignored, `{# ... #}` is a comment

mod error;
mod lexer;
mod library;
mod parser;

pub use error::{Location, ParseError};
pub use lexer::{Token, TokenKind, split_contents, tokenize};
pub use library::TagLibrary;
pub use parser::{TagParser, parse_params};
