use serde::{Deserialize, Serialize};

fn default_cell_width() -> f64 {
    8.0
}

fn default_line_height() -> f64 {
    16.0
}

fn default_viewport_width() -> f64 {
    1280.0
}

fn default_viewport_height() -> f64 {
    720.0
}

fn default_padding() -> f64 {
    4.0
}

/// Monospace layout used by the replay host
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct PageConfig {
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    /// Inner padding of popup text
    #[serde(default = "default_padding")]
    pub padding: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            line_height: default_line_height(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            padding: default_padding(),
        }
    }
}
