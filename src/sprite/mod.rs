//! Sprite sheet input
//!
//! The model types describe one iconfont sprite sheet as a list of symbols,
//! each holding its drawable children grouped by tag name. The parser maps
//! sprite-sheet XML onto that model.

pub mod model;
mod parse;

pub use model::{Attributes, ShapeChild, ShapeNode, SymbolNode};
pub use parse::{parse, SpriteSheet};
