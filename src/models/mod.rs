// docsum Data Models
// Shared types passed between the summarizer core and its callers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SummarizeError;

// ============ Summary Mode ============

/// Target summary length, as a fraction of the document's sentence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum Mode {
    Short,
    #[default]
    Medium,
    Long,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Short, Mode::Medium, Mode::Long];

    /// Fraction of sentences kept for this mode.
    pub fn ratio(self) -> f64 {
        match self {
            Mode::Short => 0.08,
            Mode::Medium => 0.18,
            Mode::Long => 0.35,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Short => "Short",
            Mode::Medium => "Medium",
            Mode::Long => "Long",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Mode::Short),
            "medium" => Ok(Mode::Medium),
            "long" => Ok(Mode::Long),
            _ => Err(SummarizeError::InvalidMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = SummarizeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ============ Sentences ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSentence {
    /// 0-based position in the document.
    pub index: usize,
    pub score: f64,
    pub text: String,
    /// UTF-8 byte offset (0-based) into the summarized text.
    pub start: usize,
    /// UTF-8 byte offset (0-based, end-exclusive) into the summarized text.
    pub end: usize,
}

// ============ Summary Response ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub mode: Mode,
    pub summary: String,
    /// Every sentence of the document with its score, in document order.
    pub scored_sentences: Vec<ScoredSentence>,
    /// Indices of the sentences that make up `summary`, ascending.
    pub selected: Vec<usize>,
}

impl Summary {
    pub fn empty(mode: Mode) -> Self {
        Self {
            mode,
            summary: String::new(),
            scored_sentences: Vec::new(),
            selected: Vec::new(),
        }
    }

    pub fn sentence_count(&self) -> usize {
        self.scored_sentences.len()
    }

    pub fn selected_sentences(&self) -> impl Iterator<Item = &ScoredSentence> {
        self.selected
            .iter()
            .filter_map(move |&i| self.scored_sentences.get(i))
    }

    /// Highest-scoring sentences for the "key sentences" listing, best first.
    pub fn top_sentences(&self, n: usize) -> Vec<&ScoredSentence> {
        let mut ranked: Vec<&ScoredSentence> = self.scored_sentences.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(n);
        ranked
    }
}
