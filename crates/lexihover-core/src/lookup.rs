use std::sync::Arc;

use crate::dictionary::{Dictionary, DictionaryEntry};

/// Successful lookup: the key that matched and its entries
#[derive(Debug, Clone, PartialEq)]
pub struct LookupMatch {
    /// May be shorter than the queried word
    pub word: String,
    pub entries: Vec<DictionaryEntry>,
}

/// Look `word` up with lowercase fallback, dropping trailing chars until
/// something matches.
pub fn lookup(dictionary: &dyn Dictionary, word: &str) -> Option<LookupMatch> {
    let mut candidate = word.to_string();

    while !candidate.is_empty() {
        let mut entries = dictionary.lookup_exact(&candidate);

        let lower = candidate.to_lowercase();
        if lower != candidate {
            entries.extend(dictionary.lookup_exact(&lower));
        }

        if !entries.is_empty() {
            return Some(LookupMatch {
                word: candidate,
                entries,
            });
        }

        candidate.pop();
    }

    None
}

enum DictionaryStatus {
    Pending,
    Ready(Arc<dyn Dictionary>),
    Failed,
}

/// Gates lookups on the dictionary having finished loading
pub struct LookupAdapter {
    status: DictionaryStatus,
}

impl LookupAdapter {
    pub fn pending() -> Self {
        Self {
            status: DictionaryStatus::Pending,
        }
    }

    pub fn ready(dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            status: DictionaryStatus::Ready(dictionary),
        }
    }

    pub fn attach(&mut self, dictionary: Arc<dyn Dictionary>) {
        let metadata = dictionary.metadata();
        tracing::info!(
            "Dictionary {} ({}) ready with {} entries",
            metadata.name,
            metadata.language,
            metadata.entry_count
        );
        self.status = DictionaryStatus::Ready(dictionary);
    }

    /// Every later lookup misses
    pub fn fail(&mut self, reason: &str) {
        tracing::error!("Dictionary unavailable, lookups disabled: {}", reason);
        self.status = DictionaryStatus::Failed;
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.status, DictionaryStatus::Ready(_))
    }

    pub fn lookup(&self, word: &str) -> Option<LookupMatch> {
        match &self.status {
            DictionaryStatus::Ready(dictionary) => lookup(dictionary.as_ref(), word),
            DictionaryStatus::Pending => {
                tracing::debug!("Dictionary still loading, skipping '{}'", word);
                None
            }
            DictionaryStatus::Failed => None,
        }
    }
}

impl Default for LookupAdapter {
    fn default() -> Self {
        Self::pending()
    }
}
