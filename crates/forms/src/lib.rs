//! A self-contained form-field provider.
//!
//! [`BoundField`] implements [`FormField`](materialweb_types::FormField) for the
//! common HTML widgets and can be deserialized from JSON, which is how the CLI
//! and the tests supply fields to a render context. [`Form`] groups fields under
//! a name so a template can refer to them as `form.email`.

mod field;
mod form;
mod widget;

pub use field::BoundField;
pub use form::Form;
pub use widget::Widget;
