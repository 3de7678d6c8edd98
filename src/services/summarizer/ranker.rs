// Sentence Ranker/Selector
// Scores sentences by mean word frequency and picks a length-proportional top set

use super::frequency::FrequencyTable;
use crate::models::{Mode, ScoredSentence};
use crate::services::sentence_segmenter::{segment_sentences, SentenceSpan};
use crate::services::text_processor::tokenize_words;

/// Score each span against `table`. Sentences without qualifying words
/// score exactly 0.0 and stay in the list.
pub fn score_spans(spans: &[SentenceSpan], table: &FrequencyTable) -> Vec<ScoredSentence> {
    spans
        .iter()
        .enumerate()
        .map(|(index, span)| ScoredSentence {
            index,
            score: table.mean_weight(&tokenize_words(&span.text)),
            text: span.text.clone(),
            start: span.start,
            end: span.end,
        })
        .collect()
}

/// Segment `text` and score every sentence against the document's own table.
pub fn score_sentences(text: &str) -> Vec<ScoredSentence> {
    let table = FrequencyTable::build(text);
    score_spans(&segment_sentences(text), &table)
}

/// Number of sentences kept for `n` sentences: `max(1, ceil(n * ratio))`,
/// never more than `n`.
pub fn selection_count(n: usize, mode: Mode) -> usize {
    if n == 0 {
        return 0;
    }
    let k = (n as f64 * mode.ratio()).ceil() as usize;
    k.max(1).min(n)
}

/// Indices of the `k` best sentences, ascending.
///
/// The ranking sort is stable, so equal scores keep document order and the
/// lower index wins when `k` cuts through a tie.
pub fn select_top(scored: &[ScoredSentence], k: usize) -> Vec<usize> {
    let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut picked: Vec<usize> = ranked.into_iter().take(k).map(|s| s.index).collect();
    picked.sort_unstable();
    picked
}
