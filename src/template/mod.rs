//! Template system for generated files
//!
//! Templates are plain text with `#name#` placeholders. The generator ships
//! built-in Vue templates and can read replacements from a directory.
//!
//! # Example
//!
//! ```rust
//! use iconfont_codegen::template::{Bindings, Placeholder, Template};
//!
//! let template = Template::parse("inline", "export type IconNames = #cases#;");
//! let bindings = Bindings::new().set(Placeholder::Cases, "'Home' | 'User'");
//! assert_eq!(template.render(&bindings), "export type IconNames = 'Home' | 'User';");
//! ```

mod lexer;
mod registry;
mod render;

pub use registry::{DirTemplates, EmbeddedTemplates, TemplateError, TemplateKind, TemplateProvider};
pub use render::{
    cases_list, cases_union, exports_list, imports_list, Bindings, Placeholder, Template,
};
