//! Template lookup by name

use std::path::PathBuf;

use log::debug;
use thiserror::Error;

use super::render::Template;

/// Errors that can occur while loading templates
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No template is registered under this name
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// Error reading an override file
    #[error("error reading template file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The templates a run renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// One component per icon
    SingleIcon,
    /// Barrel module re-exporting every icon
    BarrelIndex,
    /// Single component rendering any icon by name
    ComponentIndex,
    /// Type declaration listing the icon names
    TypeDeclaration,
}

impl TemplateKind {
    /// File name of the template, also used for override lookup
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::SingleIcon => "SingleIcon.vue",
            TemplateKind::BarrelIndex => "Index.js",
            TemplateKind::ComponentIndex => "Index.vue",
            TemplateKind::TypeDeclaration => "Icon.d.ts",
        }
    }
}

/// Source of raw template text
pub trait TemplateProvider {
    fn source(&self, name: &str) -> Result<String, TemplateError>;

    /// Load and parse a template
    fn load(&self, kind: TemplateKind) -> Result<Template, TemplateError> {
        let name = kind.file_name();
        Ok(Template::parse(name, self.source(name)?))
    }
}

/// Templates compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateProvider for EmbeddedTemplates {
    fn source(&self, name: &str) -> Result<String, TemplateError> {
        let text = match name {
            "SingleIcon.vue" => include_str!("../../templates/SingleIcon.vue"),
            "Index.js" => include_str!("../../templates/Index.js"),
            "Index.vue" => include_str!("../../templates/Index.vue"),
            "Icon.d.ts" => include_str!("../../templates/Icon.d.ts"),
            _ => {
                return Err(TemplateError::NotFound {
                    name: name.to_string(),
                })
            }
        };
        Ok(text.to_string())
    }
}

/// Templates read from a directory, falling back to the embedded set
#[derive(Debug, Clone)]
pub struct DirTemplates {
    dir: PathBuf,
}

impl DirTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateProvider for DirTemplates {
    fn source(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.dir.join(name);
        if !path.is_file() {
            debug!(name, dir:? = self.dir; "No template override, using built-in");
            return EmbeddedTemplates.source(name);
        }

        debug!(path:? = path; "Loading template override");
        std::fs::read_to_string(&path).map_err(|source| TemplateError::Read { path, source })
    }
}
