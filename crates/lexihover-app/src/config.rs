use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use lexihover_config::Config;

/// Picked up from the working directory when no config is given
const DEFAULT_CONFIG_FILE: &str = "lexihover.json";

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

/// Load the given config file, else `./lexihover.json`, else defaults with
/// environment overrides. Runs before logging is set up.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return load_config_file(path);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        return load_config_file(fallback);
    }

    Ok(Config::new())
}
