//! Map sprite-sheet XML onto the symbol model

use log::debug;
use roxmltree::{Document, Node, ParsingOptions};

use super::model::{ShapeNode, SymbolNode};
use crate::error::{offset_of, SpriteError};

/// All symbols of one sprite sheet, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSheet {
    pub symbols: Vec<SymbolNode>,
}

/// Parse a sprite sheet
///
/// The input may be a plain SVG document or any text embedding one, such as
/// the `iconfont.js` loader script; the outermost `<svg>...</svg>` fragment
/// is used. Reported spans always refer to the full input.
pub fn parse(source: &str) -> Result<SpriteSheet, SpriteError> {
    let start = source.find("<svg").ok_or(SpriteError::NoSvgElement)?;
    let end = source
        .rfind("</svg>")
        .map(|i| i + "</svg>".len())
        .filter(|&end| end > start)
        .ok_or(SpriteError::NoSvgElement)?;
    let fragment = &source[start..end];

    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(fragment, options).map_err(|err| {
        let pos = err.pos();
        let offset = start + offset_of(fragment, pos.row, pos.col);
        SpriteError::Xml {
            span: offset..offset + 1,
            message: err.to_string(),
        }
    })?;

    let symbols = doc
        .descendants()
        .filter(|node| node.has_tag_name("symbol"))
        .map(|node| read_symbol(node, start))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(symbols = symbols.len(); "Parsed sprite sheet");
    Ok(SpriteSheet { symbols })
}

fn read_symbol(node: Node<'_, '_>, base: usize) -> Result<SymbolNode, SpriteError> {
    let range = node.range();
    let span = base + range.start..base + range.end;
    let require = |attribute: &'static str| {
        node.attribute(attribute)
            .ok_or_else(|| SpriteError::MissingAttribute {
                attribute,
                span: span.clone(),
            })
    };

    let mut symbol = SymbolNode::new(require("id")?, require("viewBox")?);

    for child in node.children().filter(Node::is_element) {
        if child.children().any(|n| n.is_element()) {
            debug!(
                symbol = symbol.id.as_str(),
                tag = child.tag_name().name();
                "Ignoring nested elements"
            );
        }
        symbol.push_shape(child.tag_name().name(), read_shape(child));
    }

    Ok(symbol)
}

fn read_shape(node: Node<'_, '_>) -> ShapeNode {
    let mut shape = ShapeNode::new();
    for attr in node.attributes() {
        // Namespaced attributes keep their document prefix (`xlink:href`, `xml:space`)
        let name = match attr.namespace().and_then(|ns| node.lookup_prefix(ns)) {
            Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, attr.name()),
            _ => attr.name().to_string(),
        };
        shape.attributes.insert(name, attr.value().to_string());
    }
    shape
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::ShapeChild;

    const SPRITE: &str = r##"<svg>
  <symbol id="icon-sun" viewBox="0 0 1024 1024">
    <path d="M1 1" fill="#ff0000" />
    <path d="M2 2" />
  </symbol>
  <symbol id="icon-moon" viewBox="0 0 16 16">
    <circle cx="8" cy="8" r="4" />
  </symbol>
</svg>"##;

    #[test]
    fn test_parse_symbols_in_order() {
        let sheet = parse(SPRITE).expect("Should parse");
        let ids: Vec<&str> = sheet.symbols.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["icon-sun", "icon-moon"]);
        assert_eq!(sheet.symbols[1].view_box, "0 0 16 16");
    }

    #[test]
    fn test_parse_groups_repeated_tags() {
        let sheet = parse(SPRITE).expect("Should parse");
        match &sheet.symbols[0].children["path"] {
            ShapeChild::Sequence(paths) => {
                assert_eq!(paths.len(), 2);
                assert_eq!(paths[0].attributes["fill"], "#ff0000");
                assert!(!paths[1].attributes.contains_key("fill"));
            }
            other => panic!("expected sequence, got {:?}", other),
        }
        assert!(matches!(
            sheet.symbols[1].children["circle"],
            ShapeChild::Single(_)
        ));
    }

    #[test]
    fn test_parse_embedded_in_script() {
        let script = format!("window._iconfont_svg_string_1='{}',function(){{}}();", SPRITE);
        let sheet = parse(&script).expect("Should parse");
        assert_eq!(sheet.symbols.len(), 2);
    }

    #[test]
    fn test_parse_symbols_inside_defs() {
        let source = r#"<svg><defs><symbol id="a" viewBox="0 0 1 1"><path d="M0"/></symbol></defs></svg>"#;
        let sheet = parse(source).expect("Should parse");
        assert_eq!(sheet.symbols.len(), 1);
    }

    #[test]
    fn test_parse_xlink_attribute_keeps_prefix() {
        let source = r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><symbol id="a" viewBox="0 0 1 1"><use xlink:href="#b"/></symbol></svg>"##;
        let sheet = parse(source).expect("Should parse");
        match &sheet.symbols[0].children["use"] {
            ShapeChild::Single(shape) => assert_eq!(shape.attributes["xlink:href"], "#b"),
            other => panic!("expected single, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_xml_namespace_attribute_keeps_prefix() {
        let source = r#"<svg><symbol id="a" viewBox="0 0 1 1"><text xml:space="preserve" x="1">A</text></symbol></svg>"#;
        let sheet = parse(source).expect("Should parse");
        match &sheet.symbols[0].children["text"] {
            ShapeChild::Single(shape) => {
                let names: Vec<&str> = shape.attributes.keys().map(String::as_str).collect();
                assert_eq!(names, vec!["xml:space", "x"]);
            }
            other => panic!("expected single, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_view_box_is_reported() {
        let source = r#"<svg><symbol id="a"><path d="M0"/></symbol></svg>"#;
        let err = parse(source).unwrap_err();
        match err {
            SpriteError::MissingAttribute { attribute, span } => {
                assert_eq!(attribute, "viewBox");
                assert_eq!(&source[span.start..span.start + 7], "<symbol");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_no_svg_element() {
        assert!(matches!(
            parse("just text").unwrap_err(),
            SpriteError::NoSvgElement
        ));
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse("<svg><symbol id=\"a\"></svg>").unwrap_err();
        assert!(matches!(err, SpriteError::Xml { .. }));
    }
}
