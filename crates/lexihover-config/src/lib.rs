use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::input::InputConfig;
use self::page::PageConfig;
use self::popup::PopupConfig;

pub mod dictionary;
pub mod input;
pub mod page;
pub mod popup;

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub popup: PopupConfig,
    pub input: InputConfig,
    pub dictionary: DictionaryConfig,
    pub page: PageConfig,

    /// Used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    pub fn new() -> Self {
        let log_filter = env::var("LEXIHOVER_LOG").unwrap_or_else(|_| default_log_filter());

        Config {
            popup: PopupConfig::default(),
            input: InputConfig::new(),
            dictionary: DictionaryConfig::new(),
            page: PageConfig::default(),

            log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            popup: PopupConfig::default(),
            input: InputConfig::default(),
            dictionary: DictionaryConfig::default(),
            page: PageConfig::default(),

            log_filter: default_log_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "popup": { "width": 400 }, "input": { "modifier_key": "Alt" } }"#)
                .unwrap();

        assert_eq!(config.popup.width, 400.0);
        assert_eq!(config.popup.height, 150.0);
        assert_eq!(config.popup.border, 2.0);
        assert_eq!(config.input.modifier_key, "Alt");
        assert_eq!(config.input.primary_button, 0);
        assert!(config.dictionary.enabled);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_outer_box_includes_border() {
        let popup = PopupConfig::default();
        assert_eq!(popup.outer_width(), 354.0);
        assert_eq!(popup.outer_height(), 154.0);
    }
}
