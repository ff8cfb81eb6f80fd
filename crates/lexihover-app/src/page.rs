use lexihover_config::page::PageConfig;
use lexihover_config::popup::PopupConfig;
use lexihover_core::chain::PopupNode;
use lexihover_core::host::{Page, PopupRenderer, SelectionError, TextHit};
use lexihover_types::{NodeId, Point, Rect};

/// One laid-out line of text
struct TextRun {
    node: NodeId,
    text: String,
    len: usize,
    origin: Point,
}

struct RenderedPopup {
    bounds: Rect,
    lines: Vec<TextRun>,
}

/// Monospace rendering of a plain-text page plus the popups shown over it.
/// Every line is its own text node; popup text is hit-testable so lookups
/// can chain.
pub struct ReplayPage {
    layout: PageConfig,
    popup: PopupConfig,
    lines: Vec<TextRun>,
    popups: Vec<RenderedPopup>,
    next_node: u64,
    selection: Option<(NodeId, usize, usize)>,
}

impl ReplayPage {
    pub fn new(text: &str, layout: PageConfig, popup: PopupConfig) -> Self {
        let mut page = Self {
            layout,
            popup,
            lines: Vec::new(),
            popups: Vec::new(),
            next_node: 0,
            selection: None,
        };

        for (row, line) in text.lines().enumerate() {
            let origin = Point::new(0.0, row as f64 * layout.line_height);
            let run = page.run(line.to_string(), origin);
            page.lines.push(run);
        }

        tracing::debug!("Laid out page with {} lines", page.lines.len());
        page
    }

    fn run(&mut self, text: String, origin: Point) -> TextRun {
        let node = NodeId(self.next_node);
        self.next_node += 1;

        TextRun {
            node,
            len: text.chars().count(),
            text,
            origin,
        }
    }

    fn find(&self, node: NodeId) -> Option<&TextRun> {
        self.lines
            .iter()
            .chain(self.popups.iter().flat_map(|popup| popup.lines.iter()))
            .find(|run| run.node == node)
    }

    fn offset_in(&self, run: &TextRun, point: Point) -> Option<usize> {
        let width = run.len as f64 * self.layout.cell_width;

        let on_line = point.y >= run.origin.y && point.y < run.origin.y + self.layout.line_height;
        let on_text = point.x >= run.origin.x && point.x <= run.origin.x + width;

        (on_line && on_text).then(|| ((point.x - run.origin.x) / self.layout.cell_width) as usize)
    }

    fn hit_in(&self, runs: &[TextRun], point: Point) -> Option<TextHit> {
        runs.iter().find_map(|run| {
            self.offset_in(run, point).map(|offset| TextHit {
                node: run.node,
                offset,
            })
        })
    }

    pub fn popup_count(&self) -> usize {
        self.popups.len()
    }

    /// Text lines of a shown popup
    pub fn popup_lines(&self, index: usize) -> Vec<&str> {
        self.popups
            .get(index)
            .map(|popup| popup.lines.iter().map(|run| run.text.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn selection(&self) -> Option<(NodeId, usize, usize)> {
        self.selection
    }

    pub fn selected_text(&self) -> Option<String> {
        let (node, start, end) = self.selection?;
        let run = self.find(node)?;
        Some(run.text.chars().skip(start).take(end - start).collect())
    }

    /// Popup contents as display lines, before clipping
    fn popup_text(&self, popup: &PopupNode) -> Vec<String> {
        let inner_width = self.popup.width - self.layout.padding * 2.0;
        let columns = ((inner_width / self.layout.cell_width) as usize).max(1);

        let mut out = Vec::new();
        for (i, entry) in popup.entries.iter().enumerate() {
            if i > 0 {
                out.push(String::new());
            }
            out.extend(wrap(&format!("{} ({})", entry.title, entry.part_of_speech), columns));

            for (n, definition) in entry.definitions.iter().enumerate() {
                out.extend(wrap(&format!("{}. {}", n + 1, definition.text), columns));

                for example in definition.examples.iter().flatten() {
                    let line = match &example.translation {
                        Some(translation) => format!("  {} ({})", example.original, translation),
                        None => format!("  {}", example.original),
                    };
                    out.extend(wrap(&line, columns));
                }
            }
        }
        out
    }
}

impl Page for ReplayPage {
    fn hit_test(&self, point: Point) -> Option<TextHit> {
        // A popup hides everything below it, even where it has no text
        if let Some(popup) = self.popups.iter().rev().find(|popup| popup.bounds.contains(point)) {
            return self.hit_in(&popup.lines, point);
        }

        self.hit_in(&self.lines, point)
    }

    fn text_content(&self, node: NodeId) -> Option<String> {
        self.find(node).map(|run| run.text.clone())
    }

    fn rect_of(&self, node: NodeId, start: usize, end: usize) -> Option<Rect> {
        let run = self.find(node)?;
        if start > end || end > run.len {
            return None;
        }

        Some(Rect::new(
            run.origin.x + start as f64 * self.layout.cell_width,
            run.origin.y,
            (end - start) as f64 * self.layout.cell_width,
            self.layout.line_height,
        ))
    }

    fn select_range(&mut self, node: NodeId, start: usize, end: usize) -> Result<(), SelectionError> {
        let run = self.find(node).ok_or(SelectionError::UnknownNode(node))?;
        if start > end || end > run.len {
            return Err(SelectionError::OutOfBounds { node, start, end });
        }

        self.selection = Some((node, start, end));
        Ok(())
    }
}

impl PopupRenderer for ReplayPage {
    fn show_popup(&mut self, index: usize, popup: &PopupNode) {
        let bounds = Rect::new(
            popup.position.x,
            popup.position.y,
            self.popup.outer_width(),
            self.popup.outer_height(),
        );

        let inset = self.popup.border + self.layout.padding;
        let rows = ((self.popup.height - self.layout.padding * 2.0) / self.layout.line_height) as usize;

        let text = self.popup_text(popup);
        let clipped = text.len().saturating_sub(rows);
        let mut lines = Vec::new();
        for (row, line) in text.into_iter().take(rows).enumerate() {
            let origin = Point::new(
                bounds.x + inset,
                bounds.y + inset + row as f64 * self.layout.line_height,
            );
            lines.push(self.run(line, origin));
        }

        tracing::info!(
            "Popup {} for '{}' at ({}, {}), {} line(s) clipped",
            index,
            popup.anchor_word,
            bounds.x,
            bounds.y,
            clipped
        );

        self.popups.push(RenderedPopup { bounds, lines });
    }

    fn remove_popup(&mut self, index: usize) {
        if index + 1 != self.popups.len() {
            tracing::warn!(
                "Removing popup {} out of order, {} shown",
                index,
                self.popups.len()
            );
        }
        self.popups.truncate(index);
        tracing::info!("Popup {} closed", index);
    }
}

/// Greedy word wrap on chars. Words longer than a line are split; leading
/// spaces are kept as indentation.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut started = false;

    for word in text.split(' ') {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > columns {
            if started {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                started = false;
            }
            lines.push(word.drain(..columns).collect());
        }

        let needed = if started { current_len + 1 + word.len() } else { word.len() };
        if needed > columns {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            started = false;
        }

        if started {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
        started = true;
    }

    if started || lines.is_empty() {
        lines.push(current);
    }

    lines
}
