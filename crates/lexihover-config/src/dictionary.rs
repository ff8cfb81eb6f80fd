use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "dutch-dictionary.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Main dictionary asset
    #[serde(default = "default_path")]
    pub path: String,
    /// Merged over the main dictionary, later files win
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let path = env::var("LEXIHOVER_DICTIONARY").unwrap_or_else(|_| default_path());

        Self {
            path,
            ..Self::default()
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
            additional_paths: vec![],
        }
    }
}
