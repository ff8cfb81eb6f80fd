use lexihover_config::input::InputConfig;
use lexihover_types::{InputEvent, Point};

use crate::host::{Page, PopupRenderer};
use crate::session::{QueryOutcome, Session};

/// Turns raw host events into session transitions
pub struct InputGateway<H> {
    session: Session<H>,
    modifier_key: String,
    primary_button: u16,
    /// Last pointer position in client coordinates
    client_pointer: Point,
}

impl<H: Page + PopupRenderer> InputGateway<H> {
    pub fn new(session: Session<H>, input: &InputConfig) -> Self {
        Self {
            session,
            modifier_key: input.modifier_key.clone(),
            primary_button: input.primary_button,
            client_pointer: Point::default(),
        }
    }

    pub fn session(&self) -> &Session<H> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<H> {
        &mut self.session
    }

    pub fn into_session(self) -> Session<H> {
        self.session
    }

    /// Apply one event. Returns the query outcome for events that may query.
    pub fn dispatch(&mut self, event: &InputEvent) -> Option<QueryOutcome> {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.client_pointer = Point::new(*x, *y);
                let page = self.session.viewport().to_page(self.client_pointer);
                Some(self.session.pointer_moved(page))
            }
            InputEvent::KeyDown { key, repeat } if *key == self.modifier_key => {
                // Auto-repeat of a press already seen only requeries
                if *repeat && self.session.is_modifier_held() {
                    return Some(self.session.attempt_query());
                }
                Some(self.session.modifier_pressed())
            }
            InputEvent::KeyUp { key } if *key == self.modifier_key => {
                self.session.modifier_released();
                None
            }
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => None,
            InputEvent::PointerDown { button } => {
                if *button == self.primary_button {
                    self.session.primary_click();
                }
                None
            }
            InputEvent::Blur => {
                self.session.focus_lost();
                None
            }
            InputEvent::Scroll { x, y } => {
                let mut viewport = self.session.viewport();
                viewport.scroll_x = *x;
                viewport.scroll_y = *y;
                self.session
                    .viewport_changed(viewport, viewport.to_page(self.client_pointer));
                None
            }
            InputEvent::Resize { width, height } => {
                let mut viewport = self.session.viewport();
                viewport.width = *width;
                viewport.height = *height;
                self.session
                    .viewport_changed(viewport, viewport.to_page(self.client_pointer));
                None
            }
        }
    }
}
