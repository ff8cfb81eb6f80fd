use std::sync::Arc;

use lexihover_config::popup::PopupConfig;
use lexihover_types::{Point, Viewport};

use crate::chain::{PopupChain, PopupNode};
use crate::dictionary::Dictionary;
use crate::host::{Page, PopupRenderer};
use crate::hover;
use crate::lookup::LookupAdapter;

/// Why a query attempt stopped, or what it spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Modifier is up
    NotHeld,
    /// Pointer is over a different popup than when the modifier went down
    LeftHeldPopup,
    NoWord,
    NotFound,
    /// The same popup is already open in that slot
    AlreadyShown,
    Spawned { index: usize },
}

/// Per-page lookup state: the popup chain plus pointer and modifier tracking.
/// Every transition runs to completion before the next event is handled.
pub struct Session<H> {
    host: H,
    chain: PopupChain,
    lookup: LookupAdapter,
    viewport: Viewport,
    /// Page coordinates
    pointer: Point,
    modifier_held: bool,
    /// Popup hovered when the modifier went down
    held_at: Option<usize>,
}

impl<H: Page + PopupRenderer> Session<H> {
    pub fn new(host: H, geometry: PopupConfig, viewport: Viewport) -> Self {
        Self {
            host,
            chain: PopupChain::new(geometry),
            lookup: LookupAdapter::pending(),
            viewport,
            pointer: Point::default(),
            modifier_held: false,
            held_at: None,
        }
    }

    pub fn with_dictionary(mut self, dictionary: Arc<dyn Dictionary>) -> Self {
        self.attach_dictionary(dictionary);
        self
    }

    pub fn attach_dictionary(&mut self, dictionary: Arc<dyn Dictionary>) {
        self.lookup.attach(dictionary);
    }

    pub fn dictionary_failed(&mut self, reason: &str) {
        self.lookup.fail(reason);
    }

    pub fn chain(&self) -> &PopupChain {
        &self.chain
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn is_modifier_held(&self) -> bool {
        self.modifier_held
    }

    pub fn held_at(&self) -> Option<usize> {
        self.held_at
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.chain.hovered_index(self.pointer)
    }

    /// Key down for the modifier. Auto-repeat keeps the popup recorded by the
    /// first press.
    pub fn modifier_pressed(&mut self) -> QueryOutcome {
        if !self.modifier_held {
            self.modifier_held = true;
            self.held_at = self.hovered_index();
            tracing::debug!("Modifier down over popup {:?}", self.held_at);
        }

        self.attempt_query()
    }

    pub fn modifier_released(&mut self) {
        self.release("modifier up");
    }

    pub fn focus_lost(&mut self) {
        self.release("focus lost");
    }

    fn release(&mut self, why: &str) {
        if self.modifier_held {
            tracing::debug!("Lookup disarmed: {}", why);
        }
        self.modifier_held = false;
        self.held_at = None;
    }

    pub fn pointer_moved(&mut self, pointer: Point) -> QueryOutcome {
        self.pointer = pointer;

        if !self.modifier_held {
            return QueryOutcome::NotHeld;
        }

        self.attempt_query()
    }

    /// Scroll or resize. The pointer keeps its client position, so its page
    /// position moves with the viewport.
    pub fn viewport_changed(&mut self, viewport: Viewport, pointer: Point) {
        self.viewport = viewport;
        self.pointer = pointer;
    }

    /// Close every popup deeper than the hovered one, or all of them when the
    /// click is outside the chain. Returns how many were closed.
    pub fn primary_click(&mut self) -> usize {
        if self.chain.is_empty() {
            return 0;
        }

        let hovered = self.hovered_index();
        self.chain.truncate_after(hovered, &mut self.host)
    }

    pub fn attempt_query(&mut self) -> QueryOutcome {
        if !self.modifier_held {
            return QueryOutcome::NotHeld;
        }

        let hovered = self.hovered_index();
        if hovered != self.held_at {
            return QueryOutcome::LeftHeldPopup;
        }

        let Some(target) = hover::resolve_hover(&self.host, self.pointer) else {
            return QueryOutcome::NoWord;
        };

        let Some(found) = self.lookup.lookup(&target.word) else {
            tracing::debug!("No entries for '{}'", target.word);
            return QueryOutcome::NotFound;
        };

        // A popup's own headword inside it
        let own_word = hovered
            .and_then(|i| self.chain.get(i))
            .is_some_and(|node| node.anchor_word == found.word);
        if own_word {
            return QueryOutcome::AlreadyShown;
        }

        let position = self.chain.place(target.rect, self.viewport);
        let slot = hovered.map_or(0, |i| i + 1);

        let already_shown = self
            .chain
            .get(slot)
            .is_some_and(|node| node.anchor_word == found.word && node.position == position);
        if already_shown {
            return QueryOutcome::AlreadyShown;
        }

        self.chain.truncate_after(hovered, &mut self.host);

        let end = target.offset + found.word.chars().count();
        let index = self.chain.push(
            PopupNode {
                anchor_word: found.word,
                entries: found.entries,
                position,
            },
            &mut self.host,
        );

        tracing::debug!(
            "Spawned popup {} for '{}' at ({}, {})",
            index,
            target.word,
            position.x,
            position.y
        );

        if let Err(e) = self.host.select_range(target.node, target.offset, end) {
            tracing::debug!("Could not select '{}': {}", target.word, e);
        }

        QueryOutcome::Spawned { index }
    }
}
