use lexihover_types::{NodeId, Point, Rect};

use crate::chain::PopupNode;

/// Text node and char offset under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextHit {
    pub node: NodeId,
    pub offset: usize,
}

/// Text layout services of the hosting document. Coordinates are page space,
/// offsets count chars.
pub trait Page {
    /// Caret position under `point`, if any text is there
    fn hit_test(&self, point: Point) -> Option<TextHit>;

    fn text_content(&self, node: NodeId) -> Option<String>;

    /// Enclosing node, for hosts with nested elements
    fn parent(&self, _node: NodeId) -> Option<NodeId> {
        None
    }

    /// Bounding box of the chars `start..end` of `node`
    fn rect_of(&self, node: NodeId, start: usize, end: usize) -> Option<Rect>;

    /// Replace the document selection with `start..end` of `node`
    fn select_range(&mut self, node: NodeId, start: usize, end: usize)
    -> Result<(), SelectionError>;
}

/// Presentation side of the popup chain. Calls mirror chain mutations 1:1.
pub trait PopupRenderer {
    fn show_popup(&mut self, index: usize, popup: &PopupNode);

    fn remove_popup(&mut self, index: usize);
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeId),

    #[error("Range {start}..{end} out of bounds for node {node:?}")]
    OutOfBounds {
        node: NodeId,
        start: usize,
        end: usize,
    },

    #[error("Selection unavailable: {0}")]
    Unavailable(String),
}
