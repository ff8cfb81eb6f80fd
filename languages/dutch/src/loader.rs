use std::path::Path;

use lexihover_core::dictionary::LoadError;

use crate::dictionary::DutchDictionary;

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<DutchDictionary, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());

        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let json = std::fs::read_to_string(path)?;
        let dict = DutchDictionary::from_json(&json)?;
        tracing::info!(
            "Loaded {} words ({} entries) from {}",
            dict.word_count(),
            dict.entry_count(),
            path.display()
        );
        Ok(dict)
    }

    /// Load the main dictionary, then merge additional ones over it.
    /// Broken additional files are skipped.
    pub fn load_with_additional(
        path: &Path,
        additional_paths: &[String],
    ) -> Result<DutchDictionary, LoadError> {
        let mut dict = Self::load_from_file(path)?;

        for extra in additional_paths {
            match Self::load_from_file(Path::new(extra)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", extra);
                    dict = dict.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", extra, e);
                }
            }
        }

        Ok(dict)
    }
}
