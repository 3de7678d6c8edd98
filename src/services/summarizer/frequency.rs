// Frequency Scorer
// Normalized word-frequency table over a whole document

use std::collections::HashMap;

use crate::services::text_processor::tokenize_words;

/// Word -> count / max_count, built once per document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    max_count: usize,
}

impl FrequencyTable {
    /// Build the table from every alphabetic word in `text`.
    ///
    /// An empty table means the document had no qualifying words; every
    /// lookup then yields 0.0.
    pub fn build(text: &str) -> Self {
        Self::from_words(tokenize_words(text))
    }

    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for w in words {
            *counts.entry(w).or_insert(0) += 1;
        }
        let max_count = counts.values().copied().max().unwrap_or(0);
        Self { counts, max_count }
    }

    /// Normalized frequency in (0, 1], or 0.0 for unknown words.
    pub fn weight(&self, word: &str) -> f64 {
        if self.max_count == 0 {
            return 0.0;
        }
        self.counts
            .get(word)
            .map(|&c| c as f64 / self.max_count as f64)
            .unwrap_or(0.0)
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Mean weight of `words`; 0.0 when there are none.
    pub fn mean_weight(&self, words: &[String]) -> f64 {
        if words.is_empty() {
            return 0.0;
        }
        let total: f64 = words.iter().map(|w| self.weight(w)).sum();
        total / words.len() as f64
    }
}
