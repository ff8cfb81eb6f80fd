use serde::{Deserialize, Serialize};

/// Raw input coming from the hosting document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer moved, client (viewport) coordinates
    PointerMove { x: f64, y: f64 },
    KeyDown {
        key: String,
        #[serde(default)]
        repeat: bool,
    },
    KeyUp { key: String },
    PointerDown { button: u16 },
    /// Window lost focus
    Blur,
    /// Document scrolled to the given offset
    Scroll { x: f64, y: f64 },
    Resize { width: f64, height: f64 },
}

/// Opaque handle to a text node owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Edges count as inside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.y >= self.y && point.x <= self.right() && point.y <= self.bottom()
    }
}

/// Visible part of the page, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.scroll_x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }

    /// Convert a client-space point to page space
    pub fn to_page(&self, client: Point) -> Point {
        Point::new(client.x + self.scroll_x, client.y + self.scroll_y)
    }
}
