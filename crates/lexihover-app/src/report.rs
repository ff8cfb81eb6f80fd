use lexihover_core::Session;
use serde::Serialize;

use crate::page::ReplayPage;

/// Final state of a replay, printed as JSON
#[derive(Debug, Serialize)]
pub struct ChainReport {
    pub popups: Vec<PopupReport>,
    pub selection: Option<SelectionReport>,
}

#[derive(Debug, Serialize)]
pub struct PopupReport {
    pub index: usize,
    pub anchor_word: String,
    pub x: f64,
    pub y: f64,
    pub titles: Vec<String>,
    /// Rendered text, after clipping
    pub lines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SelectionReport {
    pub node: u64,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl ChainReport {
    pub fn from_session(session: &Session<ReplayPage>) -> Self {
        let page = session.host();

        let popups = session
            .chain()
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| PopupReport {
                index,
                anchor_word: node.anchor_word.clone(),
                x: node.position.x,
                y: node.position.y,
                titles: node.entries.iter().map(|entry| entry.title.clone()).collect(),
                lines: page.popup_lines(index).into_iter().map(String::from).collect(),
            })
            .collect();

        let selection = page.selection().map(|(node, start, end)| SelectionReport {
            node: node.0,
            start,
            end,
            text: page.selected_text().unwrap_or_default(),
        });

        Self { popups, selection }
    }
}
