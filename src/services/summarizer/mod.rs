// Summarizer Module
// Extractive summarization core, a pure function of (text, mode):
// - frequency: normalized word-frequency table for the whole document
// - ranker: sentence scoring, selection count and stable top-k selection

pub mod frequency;
pub mod ranker;

pub use frequency::FrequencyTable;
pub use ranker::{score_sentences, score_spans, select_top, selection_count};

use tracing::debug;

use crate::error::SummarizeError;
use crate::models::{Mode, Summary};
use crate::services::sentence_segmenter::segment_sentences;

/// Summarize `text`, keeping the top sentences for `mode` in document order.
///
/// Empty input gives an empty summary. With a single sentence the summary
/// is the trimmed input.
pub fn summarize(text: &str, mode: Mode) -> Summary {
    let spans = segment_sentences(text);
    let table = FrequencyTable::build(text);
    let scored = score_spans(&spans, &table);

    if scored.len() <= 1 {
        debug!(sentences = scored.len(), mode = %mode, "summarizer.short_circuit");
        return Summary {
            mode,
            summary: text.trim().to_string(),
            selected: scored.iter().map(|s| s.index).collect(),
            scored_sentences: scored,
        };
    }

    let k = selection_count(scored.len(), mode);
    let selected = select_top(&scored, k);
    let summary = selected
        .iter()
        .map(|&i| scored[i].text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    debug!(
        sentences = scored.len(),
        vocabulary = table.len(),
        max_count = table.max_count(),
        selected = selected.len(),
        mode = %mode,
        "summarizer.done"
    );

    Summary {
        mode,
        summary,
        scored_sentences: scored,
        selected,
    }
}

/// Like [`summarize`], but rejects empty or whitespace-only documents.
pub fn summarize_checked(text: &str, mode: Mode) -> Result<Summary, SummarizeError> {
    if text.trim().is_empty() {
        return Err(SummarizeError::EmptyInput);
    }
    Ok(summarize(text, mode))
}

/// Summarize with a mode given as a string (`short`, `medium` or `long`).
pub fn summarize_with_mode_str(text: &str, mode: &str) -> Result<Summary, SummarizeError> {
    let mode: Mode = mode.parse()?;
    summarize_checked(text, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATS: &str = "Cats run. Cats run fast. Dogs sleep.";

    #[test]
    fn test_short_picks_best_sentence() {
        let result = summarize(CATS, Mode::Short);
        assert_eq!(result.summary, "Cats run.");
        assert_eq!(result.selected, vec![0]);
        assert_eq!(result.scored_sentences.len(), 3);
    }

    #[test]
    fn test_long_picks_two_in_document_order() {
        let result = summarize(CATS, Mode::Long);
        assert_eq!(result.summary, "Cats run. Cats run fast.");
        assert_eq!(result.selected, vec![0, 1]);
    }

    #[test]
    fn test_selected_sentences_keep_document_order() {
        let text = "Minor aside here. Rust makes systems fast. Another aside. Rust systems are fast and rust is fast.";
        let result = summarize(text, Mode::Long);
        assert_eq!(result.selected.len(), 2);
        assert!(result.selected.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(
            result.summary,
            "Rust makes systems fast. Rust systems are fast and rust is fast."
        );
    }

    #[test]
    fn test_empty_text() {
        let result = summarize("", Mode::Medium);
        assert_eq!(result.summary, "");
        assert!(result.scored_sentences.is_empty());
        assert!(result.selected.is_empty());
    }

    #[test]
    fn test_single_sentence_returns_trimmed_input() {
        for mode in Mode::ALL {
            let result = summarize("  One sentence only.  \n", mode);
            assert_eq!(result.summary, "One sentence only.");
            assert_eq!(result.selected, vec![0]);
        }
    }

    #[test]
    fn test_no_words_selects_leading_sentences() {
        let text = "1. 2. 3. 4. 5. 6.";
        let result = summarize(text, Mode::Long);
        assert_eq!(result.selected, vec![0, 1, 2]);
        assert_eq!(result.summary, "1. 2. 3.");
    }

    #[test]
    fn test_summarize_checked_rejects_blank_text() {
        assert_eq!(summarize_checked(" \n\t", Mode::Short), Err(SummarizeError::EmptyInput));
        assert!(summarize_checked(CATS, Mode::Short).is_ok());
    }

    #[test]
    fn test_summarize_with_mode_str() {
        let result = summarize_with_mode_str(CATS, "long").unwrap();
        assert_eq!(result.mode, Mode::Long);
        assert_eq!(
            summarize_with_mode_str(CATS, "huge"),
            Err(SummarizeError::InvalidMode("huge".to_string()))
        );
    }
}
