//! iconfont-codegen - Vue icon components from iconfont sprite sheets
//!
//! This library reads an SVG sprite sheet made of `<symbol>` elements and
//! generates one component per symbol, an aggregate module and a type
//! declaration listing every component name.
//!
//! # Example
//!
//! ```rust
//! use iconfont_codegen::{generate, Config, MemorySink};
//!
//! let sprite = r##"<svg>
//!   <symbol id="icon-sun" viewBox="0 0 1024 1024"><path d="M0 0" fill="#f5a623"/></symbol>
//!   <symbol id="icon-moon" viewBox="0 0 1024 1024"><path d="M1 1"/></symbol>
//! </svg>"##;
//!
//! let config = Config::new().with_save_dir("icons");
//! let mut sink = MemorySink::new();
//! let summary = generate(sprite, &config, &mut sink).unwrap();
//!
//! assert_eq!(summary.names(), vec!["IconSun", "IconMoon"]);
//! assert!(sink.get("icons/IconSun.vue").is_some());
//! assert!(sink.get("icons/index.js").unwrap().contains("IconSun,\nIconMoon"));
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod sprite;
pub mod template;

pub use codegen::{resolve, ColorSet, MarkupGenerator};
pub use config::{AggregateMode, Config, ConfigError, IconSize};
pub use error::SpriteError;
pub use generator::{GenerateError, GeneratedIcon, Generator, RunSummary, WriteStatus};
pub use output::{FileSink, FsSink, MemorySink};
pub use sprite::{ShapeChild, ShapeNode, SpriteSheet, SymbolNode};

use thiserror::Error;

use template::{DirTemplates, EmbeddedTemplates};

/// Errors that can occur during a generation run
#[derive(Debug, Error)]
pub enum RunError {
    /// Error reading the sprite sheet
    #[error("sprite error: {0}")]
    Sprite(#[from] SpriteError),

    /// Error generating or writing files
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Parse `source` as a sprite sheet and generate all files into `sink`
///
/// Templates come from `config.template_dir` when set, with built-in
/// templates filling any gaps.
pub fn generate(
    source: &str,
    config: &Config,
    sink: &mut dyn FileSink,
) -> Result<RunSummary, RunError> {
    let sheet = sprite::parse(source)?;
    generate_symbols(&sheet.symbols, config, sink)
}

/// Generate all files for already parsed symbols
pub fn generate_symbols(
    symbols: &[SymbolNode],
    config: &Config,
    sink: &mut dyn FileSink,
) -> Result<RunSummary, RunError> {
    let summary = match &config.template_dir {
        Some(dir) => Generator::new(config, &DirTemplates::new(dir)).run(symbols, sink)?,
        None => Generator::new(config, &EmbeddedTemplates).run(symbols, sink)?,
    };
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRITE: &str = r##"<svg>
  <symbol id="icon-sun" viewBox="0 0 16 16"><path d="M0 0" fill="#ff0000"/></symbol>
</svg>"##;

    #[test]
    fn test_generate_from_sprite() {
        let config = Config::new().with_save_dir("out");
        let mut sink = MemorySink::new();
        let summary = generate(SPRITE, &config, &mut sink).unwrap();
        assert_eq!(summary.names(), vec!["IconSun"]);
        assert!(sink
            .get("out/IconSun.vue")
            .unwrap()
            .contains(r#"<svg viewBox="0 0 16 16""#));
    }

    #[test]
    fn test_generate_sprite_error() {
        let mut sink = MemorySink::new();
        let err = generate("not a sprite", &Config::new(), &mut sink).unwrap_err();
        assert!(matches!(err, RunError::Sprite(SpriteError::NoSvgElement)));
    }

    #[test]
    fn test_generate_markup_error() {
        let symbols = [SymbolNode::new("icon-x", "0 0 1 1").with_shape("", ShapeNode::new())];
        let mut sink = MemorySink::new();
        let err = generate_symbols(&symbols, &Config::new(), &mut sink).unwrap_err();
        assert!(matches!(err, RunError::Generate(GenerateError::Markup(_))));
    }

    #[test]
    fn test_generate_with_template_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Index.js"), "export default [#cases#];").unwrap();
        let config = Config::new()
            .with_save_dir("out")
            .with_template_dir(dir.path());
        let mut sink = MemorySink::new();

        generate(SPRITE, &config, &mut sink).unwrap();
        assert_eq!(sink.get("out/index.js"), Some("export default [IconSun];"));
    }
}
