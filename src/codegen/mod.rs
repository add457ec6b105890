//! Symbol to component code generation
//!
//! [`resolve`] turns a raw icon id into a component name and
//! [`MarkupGenerator`] renders a symbol's shapes into component markup.

pub mod colors;
pub mod markup;
pub mod naming;

pub use colors::{ColorSet, CURRENT_COLOR};
pub use markup::{GeneratedMarkup, MarkupError, MarkupGenerator, DEFAULT_FILL};
pub use naming::resolve;
