//! Foundation types shared by every materialweb crate.
//!
//! Nothing in here knows about components or templates. The crate defines the
//! vocabulary the rendering contract is written in:
//!
//! - **[`Value`]** and its truthiness/display rules
//! - **[`Argument`]**: a literal or a deferred reference into a [`Scope`]
//! - **[`AttrList`]** and **[`WidgetAttrs`]**: attribute collections with the
//!   exact merge semantics the components rely on
//! - **[`FormField`]** and **[`Translator`]**: the interfaces of the form and
//!   translation collaborators

pub mod argument;
pub mod attrs;
pub mod escape;
pub mod field;
pub mod i18n;
pub mod value;

pub use argument::{Argument, ResolveError, Scope};
pub use attrs::{AttrList, WidgetAttrs};
pub use escape::escape_html;
pub use field::{Choice, FormField};
pub use i18n::{Catalog, Identity, Translator};
pub use value::Value;
