use serde::Serialize;

/// Read-only word store keyed by exact-case strings
pub trait Dictionary: Send + Sync {
    /// Entries stored under exactly this key, in dictionary order
    fn lookup_exact(&self, word: &str) -> Vec<DictionaryEntry>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Verbose dictionary entry as shown in a popup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DictionaryEntry {
    pub title: String,
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definition {
    pub text: String,
    /// `None` when the source had no example list at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub original: String,
    pub translation: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
