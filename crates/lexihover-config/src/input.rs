use std::env;

use serde::{Deserialize, Serialize};

fn default_modifier_key() -> String {
    "Shift".to_string()
}

fn default_primary_button() -> u16 {
    0
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    /// Key name that gates lookups while held
    #[serde(default = "default_modifier_key")]
    pub modifier_key: String,
    /// Pointer button that dismisses popups
    #[serde(default = "default_primary_button")]
    pub primary_button: u16,
}

impl InputConfig {
    pub fn new() -> Self {
        let modifier_key =
            env::var("LEXIHOVER_MODIFIER_KEY").unwrap_or_else(|_| default_modifier_key());

        Self {
            modifier_key,
            primary_button: default_primary_button(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            modifier_key: default_modifier_key(),
            primary_button: default_primary_button(),
        }
    }
}
