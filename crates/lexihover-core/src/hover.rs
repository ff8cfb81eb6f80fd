use lexihover_types::{NodeId, Point, Rect};

use crate::boundary;
use crate::host::Page;

/// Word currently under the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    pub word: String,
    pub node: NodeId,
    /// Char offset of the word within the node text
    pub offset: usize,
    pub rect: Rect,
}

/// Find the word under `point` and check that its rendered box really
/// contains the point.
pub fn resolve_hover<P: Page + ?Sized>(page: &P, point: Point) -> Option<HoverTarget> {
    let hit = page.hit_test(point)?;
    let (node, text) = text_node(page, hit.node)?;

    let span = boundary::resolve(&text, hit.offset)?;
    let rect = page.rect_of(node, span.start, span.end())?;

    if !rect.contains(point) {
        tracing::debug!(
            "Pointer ({}, {}) outside box of '{}', ignoring",
            point.x,
            point.y,
            span.word
        );
        return None;
    }

    Some(HoverTarget {
        word: span.word,
        node,
        offset: span.start,
        rect,
    })
}

/// Climb out of blank nodes, keeping the first one with visible text
fn text_node<P: Page + ?Sized>(page: &P, mut node: NodeId) -> Option<(NodeId, String)> {
    let mut text = page.text_content(node).unwrap_or_default();

    while text.trim().is_empty() {
        node = page.parent(node)?;
        text = page.text_content(node).unwrap_or_default();
    }

    Some((node, text))
}
