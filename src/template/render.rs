//! Placeholder substitution for component templates

use std::collections::HashMap;
use std::fmt;

use log::warn;

use super::lexer::{lex, Span, Token};

/// Placeholders understood by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    ComponentName,
    Size,
    Unit,
    IconContent,
    SvgColors,
    Cases,
    Imports,
    Exports,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Placeholder::ComponentName,
        Placeholder::Size,
        Placeholder::Unit,
        Placeholder::IconContent,
        Placeholder::SvgColors,
        Placeholder::Cases,
        Placeholder::Imports,
        Placeholder::Exports,
    ];

    /// Name as written between the hash marks
    pub fn as_str(self) -> &'static str {
        match self {
            Placeholder::ComponentName => "componentName",
            Placeholder::Size => "size",
            Placeholder::Unit => "unit",
            Placeholder::IconContent => "iconContent",
            Placeholder::SvgColors => "svgColors",
            Placeholder::Cases => "cases",
            Placeholder::Imports => "imports",
            Placeholder::Exports => "exports",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}#", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(Span),
    Slot { name: String, span: Span },
}

/// A template split into literal text and placeholder slots
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let tokens = lex(&source);
        let mut segments: Vec<Segment> = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            if let [(Token::Hash, open), (Token::Word, word), (Token::Hash, close), ..] = &tokens[i..]
            {
                let slot = &source[word.clone()];
                if slot.starts_with(|c: char| c.is_ascii_alphabetic()) {
                    segments.push(Segment::Slot {
                        name: slot.to_string(),
                        span: open.start..close.end,
                    });
                    i += 3;
                    continue;
                }
            }

            let span = tokens[i].1.clone();
            match segments.last_mut() {
                Some(Segment::Text(prev)) if prev.end == span.start => prev.end = span.end,
                _ => segments.push(Segment::Text(span)),
            }
            i += 1;
        }

        Self {
            name: name.into(),
            source,
            segments,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placeholder names used by this template, in order of appearance
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot { name, .. } => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Substitute every bound placeholder
    ///
    /// Slots without a binding are kept verbatim; names the generator does
    /// not know are reported once per render.
    pub fn render(&self, bindings: &Bindings) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(span) => out.push_str(&self.source[span.clone()]),
                Segment::Slot { name, span } => {
                    match Placeholder::from_name(name).and_then(|p| bindings.get(p)) {
                        Some(value) => out.push_str(value),
                        None => out.push_str(&self.source[span.clone()]),
                    }
                }
            }
        }

        let unknown: Vec<&str> = self
            .slots()
            .filter(|name| Placeholder::from_name(name).is_none())
            .collect();
        if !unknown.is_empty() {
            let placeholders = unknown.join(", ");
            warn!(
                template = self.name.as_str(),
                placeholders = placeholders.as_str();
                "Template uses unknown placeholders, kept as written"
            );
        }

        out
    }
}

/// Values substituted into a template
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<Placeholder, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.values.insert(placeholder, value.into());
        self
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }
}

/// Case list of the aggregate template: one name per line
pub fn cases_list(names: &[String]) -> String {
    names.join(",\n")
}

/// Case list of the type declaration: a union of string literals
pub fn cases_union(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// One import statement per generated component
pub fn imports_list(names: &[String], extension: &str) -> String {
    names
        .iter()
        .map(|name| format!("import {} from './{}.{}';", name, name, extension))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One export statement per generated component
pub fn exports_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("export {{ {} }};", name))
        .collect::<Vec<_>>()
        .join("\n")
}
