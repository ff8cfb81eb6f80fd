use std::collections::HashMap;

use lexihover_core::dictionary::{
    Definition, Dictionary, DictionaryEntry, DictionaryMetadata, Example, LoadError,
};
use serde::Deserialize;
use serde_json::error::Category;

/// `[title, part_of_speech, definitions]`
#[derive(Debug, Clone, Deserialize)]
pub struct CompressedEntry(
    pub String,
    pub String,
    #[serde(default)] pub Option<Vec<CompressedDefinition>>,
);

/// `[text, examples?]`
#[derive(Debug, Clone, Deserialize)]
pub struct CompressedDefinition(
    pub String,
    #[serde(default)] pub Option<Vec<CompressedExample>>,
);

/// `[dutch, translation?]`
#[derive(Debug, Clone, Deserialize)]
pub struct CompressedExample(pub String, #[serde(default)] pub Option<String>);

impl CompressedEntry {
    pub fn to_verbose(&self) -> DictionaryEntry {
        let CompressedEntry(title, part_of_speech, definitions) = self;

        DictionaryEntry {
            title: title.clone(),
            part_of_speech: part_of_speech.clone(),
            definitions: definitions
                .iter()
                .flatten()
                .map(CompressedDefinition::to_verbose)
                .collect(),
        }
    }
}

impl CompressedDefinition {
    fn to_verbose(&self) -> Definition {
        let CompressedDefinition(text, examples) = self;

        Definition {
            text: text.clone(),
            examples: examples.as_ref().map(|examples| {
                examples
                    .iter()
                    .map(|CompressedExample(original, translation)| Example {
                        original: original.clone(),
                        translation: translation.clone(),
                    })
                    .collect()
            }),
        }
    }
}

/// Dutch dictionary keyed by exact-case word
#[derive(Debug, Default)]
pub struct DutchDictionary {
    words: HashMap<String, Vec<CompressedEntry>>,
}

impl DutchDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the compressed JSON asset
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let words = serde_json::from_str(json_str).map_err(|e| match e.classify() {
            Category::Data => LoadError::InvalidFormat(e.to_string()),
            _ => LoadError::ParseError(e.to_string()),
        })?;

        Ok(Self { words })
    }

    /// Number of distinct keys
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of entries over all keys
    pub fn entry_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// Merge another dictionary into this one.
    /// Keys present in both take the other dictionary's entries.
    pub fn merge(mut self, other: DutchDictionary) -> Self {
        for (word, entries) in other.words {
            if self.words.insert(word.clone(), entries).is_some() {
                tracing::debug!("Overriding entries for '{}'", word);
            }
        }

        self
    }
}

impl Dictionary for DutchDictionary {
    fn lookup_exact(&self, word: &str) -> Vec<DictionaryEntry> {
        self.words
            .get(word)
            .map(|entries| entries.iter().map(CompressedEntry::to_verbose).collect())
            .unwrap_or_default()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Dutch".to_string(),
            language: "nl".to_string(),
            entry_count: self.entry_count(),
        }
    }
}
