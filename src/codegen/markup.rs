//! Component markup generation from one symbol
//!
//! Every shape of a symbol becomes a self-closing element inside a root
//! `<svg>` that binds size and color variables of the generated component.
//! Fill colors are lifted out of the markup into a [`ColorSet`] and replaced
//! by `var(--svg-color-N)` references so the component can recolor them.

use heck::ToLowerCamelCase;
use thiserror::Error;

use super::colors::ColorSet;
use crate::sprite::{ShapeChild, ShapeNode, SymbolNode};

/// Tags that receive a default fill when they have none
pub const FILL_TAGS: &[&str] = &["path"];

/// Fill used when a fill-bearing shape does not declare one
pub const DEFAULT_FILL: &str = "#333333";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    /// A child element without a tag name cannot be rendered
    #[error("unable to transform unnamed element in symbol \"{symbol}\"")]
    UnnamedElement { symbol: String },
}

/// Markup and colors of one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMarkup {
    pub markup: String,
    pub colors: ColorSet,
}

/// Generator settings shared by every symbol of a run
#[derive(Debug, Clone)]
pub struct MarkupGenerator {
    /// Replace a single distinct color by `currentColor`
    pub collapse_single_color: bool,
}

impl Default for MarkupGenerator {
    fn default() -> Self {
        Self {
            collapse_single_color: true,
        }
    }
}

impl MarkupGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether single-color icons follow `currentColor`
    pub fn with_collapse_single_color(mut self, collapse: bool) -> Self {
        self.collapse_single_color = collapse;
        self
    }

    /// Render `symbol` with its root element indented by `base_indent` spaces
    pub fn generate(
        &self,
        symbol: &SymbolNode,
        base_indent: usize,
    ) -> Result<GeneratedMarkup, MarkupError> {
        let mut walk = SymbolWalk::new(base_indent);

        walk.open_root(&symbol.view_box);
        for (tag, child) in &symbol.children {
            if tag.is_empty() {
                return Err(MarkupError::UnnamedElement {
                    symbol: symbol.id.clone(),
                });
            }
            match child {
                ShapeChild::Single(shape) if shape.has_attributes() => walk.element(tag, shape),
                ShapeChild::Single(_) => {}
                ShapeChild::Sequence(shapes) => {
                    for shape in shapes {
                        walk.element(tag, shape);
                    }
                }
            }
        }
        walk.close_root();

        let colors = if self.collapse_single_color {
            walk.colors.collapse_single()
        } else {
            walk.colors
        };
        Ok(GeneratedMarkup {
            markup: walk.out,
            colors,
        })
    }
}

/// State of one tree walk; never shared between symbols
struct SymbolWalk {
    base_indent: usize,
    colors: ColorSet,
    out: String,
}

impl SymbolWalk {
    fn new(base_indent: usize) -> Self {
        Self {
            base_indent,
            colors: ColorSet::new(),
            out: String::new(),
        }
    }

    fn indent(&mut self, extra: usize) {
        self.out.push_str(&" ".repeat(self.base_indent + extra));
    }

    fn open_root(&mut self, view_box: &str) {
        self.indent(0);
        self.out.push_str(&format!(
            r#"<svg viewBox="{}" :width="size" :height="size" :style="variables" v-bind="$attrs">"#,
            view_box
        ));
        self.out.push('\n');
    }

    fn close_root(&mut self) {
        self.indent(0);
        self.out.push_str("</svg>");
    }

    fn element(&mut self, tag: &str, shape: &ShapeNode) {
        self.indent(2);
        self.out.push('<');
        self.out.push_str(tag);
        self.attributes(tag, shape);
        self.out.push('\n');
        self.indent(2);
        self.out.push_str("/>\n");
    }

    fn attributes(&mut self, tag: &str, shape: &ShapeNode) {
        if !shape.has_attributes() {
            return;
        }

        let fill_bearing = FILL_TAGS.contains(&tag);
        for (name, value) in &shape.attributes {
            if fill_bearing && name == "fill" && value.is_empty() {
                self.attribute(name, DEFAULT_FILL);
            } else {
                self.attribute(name, value);
            }
        }
        if fill_bearing && !shape.attributes.contains_key("fill") {
            self.attribute("fill", DEFAULT_FILL);
        }
    }

    fn attribute(&mut self, name: &str, value: &str) {
        self.out.push('\n');
        self.indent(4);
        if name == "fill" {
            let slot = self.colors.slot(value);
            self.out
                .push_str(&format!(r#"fill="var(--svg-color-{})""#, slot));
        } else {
            self.out
                .push_str(&format!(r#"{}="{}""#, name.to_lower_camel_case(), value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::colors::CURRENT_COLOR;
    use pretty_assertions::assert_eq;

    fn path(d: &str, fill: Option<&str>) -> ShapeNode {
        let shape = ShapeNode::new().with_attr("d", d);
        match fill {
            Some(fill) => shape.with_attr("fill", fill),
            None => shape,
        }
    }

    fn colors(generated: &GeneratedMarkup) -> Vec<&str> {
        generated.colors.iter().collect()
    }

    #[test]
    fn test_full_markup_layout() {
        let symbol = SymbolNode::new("icon-dot", "0 0 1024 1024")
            .with_shape("path", path("M0 0", Some("#111111")))
            .with_shape("path", path("M1 1", Some("#222222")));

        let generated = MarkupGenerator::new().generate(&symbol, 2).unwrap();
        let expected = r#"  <svg viewBox="0 0 1024 1024" :width="size" :height="size" :style="variables" v-bind="$attrs">
    <path
      d="M0 0"
      fill="var(--svg-color-0)"
    />
    <path
      d="M1 1"
      fill="var(--svg-color-1)"
    />
  </svg>"#;
        assert_eq!(generated.markup, expected);
    }

    #[test]
    fn test_color_slots_are_deduplicated() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1")
            .with_shape("path", path("A", Some("#111111")))
            .with_shape("path", path("B", Some("#222222")))
            .with_shape("path", path("C", Some("#111111")));

        let generated = MarkupGenerator::new().generate(&symbol, 0).unwrap();
        assert_eq!(colors(&generated), vec!["#111111", "#222222"]);

        let slots: Vec<&str> = generated
            .markup
            .lines()
            .filter(|l| l.contains("fill="))
            .map(str::trim)
            .collect();
        assert_eq!(
            slots,
            vec![
                r#"fill="var(--svg-color-0)""#,
                r#"fill="var(--svg-color-1)""#,
                r#"fill="var(--svg-color-0)""#,
            ]
        );
    }

    #[test]
    fn test_single_color_collapses_to_current_color() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1")
            .with_shape("path", path("A", Some("#ff0000")))
            .with_shape("path", path("B", Some("#ff0000")));

        let on = MarkupGenerator::new().generate(&symbol, 0).unwrap();
        assert_eq!(colors(&on), vec![CURRENT_COLOR]);

        let off = MarkupGenerator::new()
            .with_collapse_single_color(false)
            .generate(&symbol, 0)
            .unwrap();
        assert_eq!(colors(&off), vec!["#ff0000"]);
        assert_eq!(on.markup, off.markup);
    }

    #[test]
    fn test_path_without_fill_gets_default_last() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1").with_shape(
            "path",
            ShapeNode::new().with_attr("d", "M0").with_attr("p-id", "7"),
        );

        let generated = MarkupGenerator::new()
            .with_collapse_single_color(false)
            .generate(&symbol, 0)
            .unwrap();
        assert_eq!(colors(&generated), vec![DEFAULT_FILL]);
        assert!(generated
            .markup
            .contains("  <path\n    d=\"M0\"\n    pId=\"7\"\n    fill=\"var(--svg-color-0)\"\n  />"));
    }

    #[test]
    fn test_default_fill_shares_slot_with_explicit() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1")
            .with_shape("path", path("A", Some(DEFAULT_FILL)))
            .with_shape("path", path("B", None))
            .with_shape("path", path("C", Some("#00ff00")));

        let generated = MarkupGenerator::new().generate(&symbol, 0).unwrap();
        assert_eq!(colors(&generated), vec![DEFAULT_FILL, "#00ff00"]);
    }

    #[test]
    fn test_empty_fill_on_path_is_defaulted_in_place() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1").with_shape(
            "path",
            ShapeNode::new().with_attr("fill", "").with_attr("d", "M0"),
        );

        let generated = MarkupGenerator::new()
            .with_collapse_single_color(false)
            .generate(&symbol, 0)
            .unwrap();
        assert_eq!(colors(&generated), vec![DEFAULT_FILL]);
        let fill_at = generated.markup.find("fill=").unwrap();
        let d_at = generated.markup.find(r#"d="M0""#).unwrap();
        assert!(fill_at < d_at);
    }

    #[test]
    fn test_non_path_fill_is_not_defaulted() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1")
            .with_shape("circle", ShapeNode::new().with_attr("r", "4"));

        let generated = MarkupGenerator::new().generate(&symbol, 0).unwrap();
        assert!(generated.colors.is_empty());
        assert!(!generated.markup.contains("fill="));
    }

    #[test]
    fn test_non_path_explicit_fill_still_uses_slot() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1")
            .with_shape("circle", ShapeNode::new().with_attr("fill", "#abcdef"))
            .with_shape("path", path("M0", Some("#123456")));

        let generated = MarkupGenerator::new().generate(&symbol, 0).unwrap();
        assert_eq!(colors(&generated), vec!["#abcdef", "#123456"]);
    }

    #[test]
    fn test_sequence_order_is_preserved() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1")
            .with_shape("path", path("A", Some("#000")))
            .with_shape("path", path("B", Some("#000")))
            .with_shape("path", path("C", Some("#000")));

        let generated = MarkupGenerator::new().generate(&symbol, 0).unwrap();
        let a = generated.markup.find(r#"d="A""#).unwrap();
        let b = generated.markup.find(r#"d="B""#).unwrap();
        let c = generated.markup.find(r#"d="C""#).unwrap();
        assert!(a < b && b < c);
        assert_eq!(generated.markup.matches("<path").count(), 3);
    }

    #[test]
    fn test_attribute_names_are_camel_cased() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1").with_shape(
            "rect",
            ShapeNode::new()
                .with_attr("stroke-width", "2")
                .with_attr("fill-rule", "evenodd"),
        );

        let generated = MarkupGenerator::new().generate(&symbol, 0).unwrap();
        assert!(generated.markup.contains(r#"strokeWidth="2""#));
        assert!(generated.markup.contains(r#"fillRule="evenodd""#));
    }

    #[test]
    fn test_single_child_without_attributes_is_skipped() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1")
            .with_shape("title", ShapeNode::new())
            .with_shape("path", path("A", Some("#000")));

        let generated = MarkupGenerator::new().generate(&symbol, 0).unwrap();
        assert!(!generated.markup.contains("<title"));
        assert!(generated.markup.contains("<path"));
    }

    #[test]
    fn test_sequence_entry_without_attributes_renders_bare() {
        let symbol = SymbolNode::new("icon-a", "0 0 1 1")
            .with_shape("path", path("A", Some("#000")))
            .with_shape("path", ShapeNode::new());

        let generated = MarkupGenerator::new()
            .with_collapse_single_color(false)
            .generate(&symbol, 0)
            .unwrap();
        assert!(generated.markup.contains("  <path\n  />\n"));
        assert_eq!(colors(&generated), vec!["#000"]);
    }

    #[test]
    fn test_unnamed_element_is_an_error() {
        let symbol = SymbolNode::new("icon-broken", "0 0 1 1")
            .with_shape("", path("A", Some("#000")));

        let err = MarkupGenerator::new().generate(&symbol, 4).unwrap_err();
        assert_eq!(
            err,
            MarkupError::UnnamedElement {
                symbol: "icon-broken".to_string()
            }
        );
    }

    #[test]
    fn test_symbol_without_children() {
        let symbol = SymbolNode::new("icon-empty", "0 0 8 8");
        let generated = MarkupGenerator::new().generate(&symbol, 4).unwrap();
        assert_eq!(
            generated.markup,
            "    <svg viewBox=\"0 0 8 8\" :width=\"size\" :height=\"size\" :style=\"variables\" v-bind=\"$attrs\">\n    </svg>"
        );
        assert!(generated.colors.is_empty());
    }

    #[test]
    fn test_each_symbol_starts_with_fresh_colors() {
        let generator = MarkupGenerator::new().with_collapse_single_color(false);
        let first = SymbolNode::new("a", "0 0 1 1").with_shape("path", path("A", Some("#111")));
        let second = SymbolNode::new("b", "0 0 1 1").with_shape("path", path("B", Some("#222")));

        generator.generate(&first, 0).unwrap();
        let generated = generator.generate(&second, 0).unwrap();
        assert_eq!(colors(&generated), vec!["#222"]);
        assert!(generated.markup.contains("var(--svg-color-0)"));
    }

    #[test]
    fn test_prefixed_attribute_names_are_camel_cased() {
        let symbol = SymbolNode::new("icon-t", "0 0 1 1").with_shape(
            "text",
            ShapeNode::new()
                .with_attr("xml:space", "preserve")
                .with_attr("xlink:href", "#a"),
        );
        let generated = MarkupGenerator::new().generate(&symbol, 0).unwrap();
        assert!(generated.markup.contains(r#"xmlSpace="preserve""#));
        assert!(generated.markup.contains(r##"xlinkHref="#a""##));
    }
}
