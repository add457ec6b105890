//! Ordered color accumulator for one symbol

use indexmap::IndexSet;
use serde::Serialize;

/// Value that makes an icon follow the surrounding text color
pub const CURRENT_COLOR: &str = "currentColor";

/// Distinct fill colors of one symbol, in order of first appearance
///
/// The position of a color is the index of the CSS variable slot it is
/// rendered as, so insertion order must never change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorSet {
    colors: IndexSet<String>,
}

impl ColorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a color if unseen and return its slot index
    pub fn slot(&mut self, color: &str) -> usize {
        match self.colors.get_index_of(color) {
            Some(index) => index,
            None => self.colors.insert_full(color.to_string()).0,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    /// Replace a single-color set by [`CURRENT_COLOR`]
    pub fn collapse_single(self) -> Self {
        if self.len() == 1 {
            Self::from_iter([CURRENT_COLOR])
        } else {
            self
        }
    }

    /// Render as a JSON array literal, e.g. `["#111111","#222222"]`
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }
}

impl<S: Into<String>> FromIterator<S> for ColorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().map(Into::into).collect(),
        }
    }
}
