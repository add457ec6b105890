//! Error types for reading sprite sheets

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum SpriteError {
    #[error("no <svg> element found in sprite input")]
    NoSvgElement,

    #[error("malformed sprite XML at {span:?}: {message}")]
    Xml { span: Span, message: String },

    #[error("<symbol> at {span:?} is missing the `{attribute}` attribute")]
    MissingAttribute {
        attribute: &'static str,
        span: Span,
    },
}

impl SpriteError {
    /// Byte range the error points at, if it has one
    pub fn span(&self) -> Option<Span> {
        match self {
            SpriteError::NoSvgElement => None,
            SpriteError::Xml { span, .. } | SpriteError::MissingAttribute { span, .. } => {
                Some(span.clone())
            }
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("Error: {}\n", self);
        };

        let message = match self {
            SpriteError::Xml { message, .. } => message.clone(),
            SpriteError::MissingAttribute { attribute, .. } => {
                format!("symbol has no `{}` attribute", attribute)
            }
            SpriteError::NoSvgElement => self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}\n", self),
        }
    }
}

/// Convert a 1-based row/column position into a byte offset of `source`
pub(crate) fn offset_of(source: &str, row: u32, col: u32) -> usize {
    let mut offset = 0;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        if index + 1 == row as usize {
            let column = line
                .char_indices()
                .nth(col.saturating_sub(1) as usize)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            return offset + column;
        }
        offset += line.len();
    }
    source.len()
}
