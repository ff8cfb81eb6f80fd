use serde::{Deserialize, Serialize};

fn default_width() -> f64 {
    350.0
}

fn default_height() -> f64 {
    150.0
}

fn default_border() -> f64 {
    2.0
}

/// Fixed popup box geometry
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PopupConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Border width, drawn on every side
    #[serde(default = "default_border")]
    pub border: f64,
}

impl PopupConfig {
    /// Width of the full box, border included
    pub fn outer_width(&self) -> f64 {
        self.width + self.border * 2.0
    }

    /// Height of the full box, border included
    pub fn outer_height(&self) -> f64 {
        self.height + self.border * 2.0
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            border: default_border(),
        }
    }
}
