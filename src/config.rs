//! Generator configuration
//!
//! Configuration is read from a TOML file. Every key is optional:
//!
//! ```toml
//! save_dir = "src/components/iconfont"
//! trim_icon_prefix = "icon"
//! default_icon_size = 18
//! unit = "px"
//! aggregate = "barrel"          # or "single-component"
//! collapse_single_color = true
//! emit_types = true
//! template_dir = "iconfont-templates"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::template::TemplateKind;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Default component size, written into templates as-is
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IconSize {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSize::Integer(n) => write!(f, "{}", n),
            IconSize::Float(n) => write!(f, "{}", n),
            IconSize::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for IconSize {
    /// Numbers parse as numbers, anything else is kept as text
    fn from(value: &str) -> Self {
        if let Ok(n) = value.parse::<i64>() {
            IconSize::Integer(n)
        } else if let Ok(n) = value.parse::<f64>() {
            IconSize::Float(n)
        } else {
            IconSize::Text(value.to_string())
        }
    }
}

/// Shape of the aggregate file written after all icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AggregateMode {
    /// `index.js` re-exporting every icon component
    Barrel,
    /// `Index.vue` rendering any icon by its name
    SingleComponent,
}

impl AggregateMode {
    pub fn file_name(self) -> &'static str {
        match self {
            AggregateMode::Barrel => "index.js",
            AggregateMode::SingleComponent => "Index.vue",
        }
    }

    pub fn template(self) -> TemplateKind {
        match self {
            AggregateMode::Barrel => TemplateKind::BarrelIndex,
            AggregateMode::SingleComponent => TemplateKind::ComponentIndex,
        }
    }
}

/// Settings for one generator run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory; its files are removed before generation
    pub save_dir: PathBuf,
    /// Prefix removed from icon ids before naming components
    pub trim_icon_prefix: Option<String>,
    pub default_icon_size: IconSize,
    /// CSS length unit appended to numeric sizes
    pub unit: String,
    pub aggregate: AggregateMode,
    /// Let single-color icons follow `currentColor`
    pub collapse_single_color: bool,
    /// Write `index.d.ts` with the icon name union
    pub emit_types: bool,
    /// Directory with template overrides
    pub template_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("src/components/iconfont"),
            trim_icon_prefix: None,
            default_icon_size: IconSize::Integer(18),
            unit: "px".to_string(),
            aggregate: AggregateMode::Barrel,
            collapse_single_color: true,
            emit_types: true,
            template_dir: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    pub fn with_trim_icon_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.trim_icon_prefix = Some(prefix.into());
        self
    }

    pub fn with_default_icon_size(mut self, size: IconSize) -> Self {
        self.default_icon_size = size;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_aggregate(mut self, mode: AggregateMode) -> Self {
        self.aggregate = mode;
        self
    }

    pub fn with_collapse_single_color(mut self, collapse: bool) -> Self {
        self.collapse_single_color = collapse;
        self
    }

    pub fn with_emit_types(mut self, emit: bool) -> Self {
        self.emit_types = emit;
        self
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }
}
