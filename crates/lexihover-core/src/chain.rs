use lexihover_config::popup::PopupConfig;
use lexihover_types::{Point, Rect, Viewport};
use serde::Serialize;

use crate::dictionary::DictionaryEntry;
use crate::host::PopupRenderer;

/// One open popup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupNode {
    /// Word the popup was spawned for, as matched in the dictionary
    pub anchor_word: String,
    pub entries: Vec<DictionaryEntry>,
    /// Top-left corner in page coordinates
    pub position: Point,
}

/// Open popups ordered by depth. Index 0 was spawned from page text, every
/// later one from inside its predecessor.
#[derive(Debug)]
pub struct PopupChain {
    nodes: Vec<PopupNode>,
    geometry: PopupConfig,
}

impl PopupChain {
    pub fn new(geometry: PopupConfig) -> Self {
        Self {
            nodes: Vec::new(),
            geometry,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[PopupNode] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&PopupNode> {
        self.nodes.get(index)
    }

    pub fn geometry(&self) -> &PopupConfig {
        &self.geometry
    }

    /// Full box of a popup, border included
    pub fn bounds(&self, node: &PopupNode) -> Rect {
        Rect::new(
            node.position.x,
            node.position.y,
            self.geometry.outer_width(),
            self.geometry.outer_height(),
        )
    }

    /// Deepest popup containing `point`
    pub fn hovered_index(&self, point: Point) -> Option<usize> {
        self.nodes
            .iter()
            .rposition(|node| self.bounds(node).contains(point))
    }

    /// Keep `0..=index`, or nothing for `None`. Returns how many popups were
    /// closed; they are removed deepest first.
    pub fn truncate_after<R: PopupRenderer + ?Sized>(
        &mut self,
        index: Option<usize>,
        renderer: &mut R,
    ) -> usize {
        let keep = index.map_or(0, |i| i + 1).min(self.nodes.len());
        let removed = self.nodes.len() - keep;

        for i in (keep..self.nodes.len()).rev() {
            renderer.remove_popup(i);
        }
        self.nodes.truncate(keep);

        if removed > 0 {
            tracing::debug!("Closed {} popup(s), {} left", removed, keep);
        }

        removed
    }

    pub fn push<R: PopupRenderer + ?Sized>(&mut self, node: PopupNode, renderer: &mut R) -> usize {
        let index = self.nodes.len();
        renderer.show_popup(index, &node);
        self.nodes.push(node);
        index
    }

    /// Place a popup under `anchor`, shifted left/up when it would overflow
    /// the viewport
    pub fn place(&self, anchor: Rect, viewport: Viewport) -> Point {
        let width = self.geometry.outer_width();
        let height = self.geometry.outer_height();

        let mut x = anchor.x;
        let mut y = anchor.bottom() + self.geometry.border;

        if x + width > viewport.right() {
            x = viewport.right() - width;
        }

        if y + height > viewport.bottom() {
            y = viewport.bottom() - height;
        }

        Point::new(x, y)
    }
}
