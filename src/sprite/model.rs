//! In-memory shape of a parsed sprite sheet

use indexmap::IndexMap;

/// Ordered attribute table of one drawable element
pub type Attributes = IndexMap<String, String>;

/// One drawable primitive, such as a `<path>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeNode {
    pub attributes: Attributes,
}

impl ShapeNode {
    /// Create a shape with no attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, keeping insertion order
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Whether the element carried any attributes at all
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

/// All children of a symbol that share one tag name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeChild {
    /// The tag appeared exactly once
    Single(ShapeNode),
    /// The tag appeared several times, in render order
    Sequence(Vec<ShapeNode>),
}

impl ShapeChild {
    /// Fold another occurrence of the same tag into this child
    fn push(&mut self, shape: ShapeNode) {
        match self {
            ShapeChild::Single(first) => {
                let first = std::mem::take(first);
                *self = ShapeChild::Sequence(vec![first, shape]);
            }
            ShapeChild::Sequence(shapes) => shapes.push(shape),
        }
    }
}

/// One `<symbol>` of the sprite sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolNode {
    /// Raw icon id, e.g. `icon-home`
    pub id: String,
    /// Passed through verbatim to the generated root element
    pub view_box: String,
    /// Children grouped by tag name, in order of first appearance
    pub children: IndexMap<String, ShapeChild>,
}

impl SymbolNode {
    pub fn new(id: impl Into<String>, view_box: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            view_box: view_box.into(),
            children: IndexMap::new(),
        }
    }

    /// Add a shape under `tag`; repeated tags collapse into a sequence
    pub fn push_shape(&mut self, tag: impl Into<String>, shape: ShapeNode) {
        let tag = tag.into();
        match self.children.get_mut(&tag) {
            Some(child) => child.push(shape),
            None => {
                self.children.insert(tag, ShapeChild::Single(shape));
            }
        }
    }

    /// Builder form of [`SymbolNode::push_shape`]
    pub fn with_shape(mut self, tag: impl Into<String>, shape: ShapeNode) -> Self {
        self.push_shape(tag, shape);
        self
    }
}
