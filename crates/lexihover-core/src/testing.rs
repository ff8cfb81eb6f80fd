//! In-memory collaborators for unit tests

use std::collections::HashMap;

use lexihover_config::popup::PopupConfig;
use lexihover_types::{NodeId, Point, Rect};

use crate::chain::PopupNode;
use crate::dictionary::{Definition, Dictionary, DictionaryEntry, DictionaryMetadata};
use crate::host::{Page, PopupRenderer, SelectionError, TextHit};

pub(crate) const CELL_WIDTH: f64 = 10.0;
pub(crate) const LINE_HEIGHT: f64 = 20.0;

const POPUP_NODE_BASE: u64 = 1000;

pub(crate) fn entry(title: &str, definition: &str) -> DictionaryEntry {
    DictionaryEntry {
        title: title.to_string(),
        part_of_speech: "zn".to_string(),
        definitions: vec![Definition {
            text: definition.to_string(),
            examples: None,
        }],
    }
}

#[derive(Default)]
pub(crate) struct MemoryDictionary {
    words: HashMap<String, Vec<DictionaryEntry>>,
}

impl MemoryDictionary {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, word: &str, entries: Vec<DictionaryEntry>) -> Self {
        self.words.insert(word.to_string(), entries);
        self
    }
}

impl Dictionary for MemoryDictionary {
    fn lookup_exact(&self, word: &str) -> Vec<DictionaryEntry> {
        self.words.get(word).cloned().unwrap_or_default()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "memory".to_string(),
            language: "nl".to_string(),
            entry_count: self.words.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RenderCall {
    Show(usize, String),
    Remove(usize),
}

struct TextRun {
    text: String,
    origin: Point,
}

impl TextRun {
    fn offset_at(&self, point: Point) -> Option<usize> {
        let width = self.text.chars().count() as f64 * CELL_WIDTH;

        let on_line = point.y >= self.origin.y && point.y < self.origin.y + LINE_HEIGHT;
        let on_text = point.x >= self.origin.x && point.x <= self.origin.x + width;

        (on_line && on_text).then(|| ((point.x - self.origin.x) / CELL_WIDTH) as usize)
    }
}

/// Monospace page with one text line per node. Each shown popup gets a box
/// that hides whatever is below it and a single line holding its first
/// definition.
#[derive(Default)]
pub(crate) struct FakeHost {
    page: Vec<TextRun>,
    popups: Vec<(Rect, TextRun)>,
    pub(crate) render_calls: Vec<RenderCall>,
    pub(crate) selection: Option<(NodeId, usize, usize)>,
    pub(crate) fail_selection: bool,
}

impl FakeHost {
    pub(crate) fn with_page(lines: &[&str]) -> Self {
        let page = lines
            .iter()
            .enumerate()
            .map(|(i, line)| TextRun {
                text: line.to_string(),
                origin: Point::new(0.0, i as f64 * LINE_HEIGHT),
            })
            .collect();

        Self {
            page,
            ..Self::default()
        }
    }

    fn run(&self, node: NodeId) -> Option<&TextRun> {
        match node.0.checked_sub(POPUP_NODE_BASE) {
            Some(i) => self.popups.get(i as usize).map(|(_, run)| run),
            None => self.page.get(node.0 as usize),
        }
    }
}

impl Page for FakeHost {
    fn hit_test(&self, point: Point) -> Option<TextHit> {
        if let Some(i) = self.popups.iter().rposition(|(bounds, _)| bounds.contains(point)) {
            let offset = self.popups[i].1.offset_at(point)?;
            return Some(TextHit {
                node: NodeId(POPUP_NODE_BASE + i as u64),
                offset,
            });
        }

        self.page.iter().enumerate().find_map(|(i, run)| {
            run.offset_at(point).map(|offset| TextHit {
                node: NodeId(i as u64),
                offset,
            })
        })
    }

    fn text_content(&self, node: NodeId) -> Option<String> {
        self.run(node).map(|run| run.text.clone())
    }

    fn rect_of(&self, node: NodeId, start: usize, end: usize) -> Option<Rect> {
        let run = self.run(node)?;
        Some(Rect::new(
            run.origin.x + start as f64 * CELL_WIDTH,
            run.origin.y,
            (end - start) as f64 * CELL_WIDTH,
            LINE_HEIGHT,
        ))
    }

    fn select_range(&mut self, node: NodeId, start: usize, end: usize) -> Result<(), SelectionError> {
        if self.fail_selection {
            return Err(SelectionError::Unavailable("node rejects ranges".to_string()));
        }

        let run = self.run(node).ok_or(SelectionError::UnknownNode(node))?;
        if end > run.text.chars().count() {
            return Err(SelectionError::OutOfBounds { node, start, end });
        }

        self.selection = Some((node, start, end));
        Ok(())
    }
}

impl PopupRenderer for FakeHost {
    fn show_popup(&mut self, index: usize, popup: &PopupNode) {
        assert_eq!(index, self.popups.len(), "popups must be shown in order");

        let geometry = PopupConfig::default();
        let bounds = Rect::new(
            popup.position.x,
            popup.position.y,
            geometry.outer_width(),
            geometry.outer_height(),
        );
        let text = popup
            .entries
            .first()
            .and_then(|entry| entry.definitions.first())
            .map(|definition| definition.text.clone())
            .unwrap_or_default();

        self.popups.push((
            bounds,
            TextRun {
                text,
                origin: Point::new(
                    popup.position.x + geometry.border,
                    popup.position.y + geometry.border,
                ),
            },
        ));
        self.render_calls
            .push(RenderCall::Show(index, popup.anchor_word.clone()));
    }

    fn remove_popup(&mut self, index: usize) {
        assert_eq!(index + 1, self.popups.len(), "popups must be removed deepest first");

        self.popups.pop();
        self.render_calls.push(RenderCall::Remove(index));
    }
}
