// Sentence Segmenter
// Rule-based sentence boundary detection with UTF-8 byte offsets

use serde::{Deserialize, Serialize};

/// Abbreviations that never end a sentence when followed by a single dot.
const ABBREVIATIONS: &[&str] = &[
    "e.g", "i.e", "vs", "mr", "mrs", "ms", "dr", "prof", "fig", "eq", "inc", "ltd", "st", "jr",
    "sr",
];

/// Words that open a new sentence after a lone capital letter: "plan A. Then".
const SENTENCE_STARTERS: &[&str] = &[
    "the", "then", "it", "this", "we", "he", "she", "they", "but", "and", "so", "in", "on",
    "there", "that", "these", "those", "our", "my", "his", "her", "its", "what", "when", "if",
    "as", "after", "however", "yes",
];

/// A sentence as an exact, trimmed slice of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub text: String,
    /// UTF-8 byte offset (0-based) into the source text.
    pub start: usize,
    /// UTF-8 byte offset (0-based, end-exclusive) into the source text.
    pub end: usize,
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…') || is_fullwidth_terminator(c)
}

fn is_fullwidth_terminator(c: char) -> bool {
    matches!(c, '。' | '！' | '？')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | ')' | ']' | '」' | '』')
}

/// Char index where the word ending at `pos` starts; dots are part of the
/// word so `e.g` survives.
fn word_start(chars: &[(usize, char)], pos: usize) -> usize {
    let mut k = pos;
    while k > 0 && (chars[k - 1].1.is_alphanumeric() || chars[k - 1].1 == '.') {
        k -= 1;
    }
    k
}

fn next_visible(chars: &[(usize, char)], from: usize) -> Option<char> {
    chars[from..]
        .iter()
        .map(|(_, c)| *c)
        .find(|c| !c.is_whitespace())
}

/// Lowercased alphabetic word starting at the first visible char from `from`.
fn next_word(chars: &[(usize, char)], from: usize) -> String {
    chars[from..]
        .iter()
        .map(|(_, c)| *c)
        .skip_while(|c| c.is_whitespace())
        .take_while(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Decide whether a dot run followed by whitespace is a false boundary.
fn is_suppressed_boundary(
    text: &str,
    chars: &[(usize, char)],
    run_start: usize,
    run_end: usize,
    after: usize,
) -> bool {
    let run = &chars[run_start..run_end];
    if !run.iter().all(|(_, c)| matches!(c, '.' | '…')) {
        return false;
    }

    let Some(next) = next_visible(chars, after) else {
        return false;
    };

    // Lowercase continuation: "Wait... what", "etc. and so on".
    if next.is_lowercase() {
        return true;
    }

    if run.len() != 1 || run[0].1 != '.' {
        return false;
    }

    let k = word_start(chars, run_start);
    if k == run_start {
        return false;
    }
    let original = &text[chars[k].0..chars[run_start].0];
    let word = original.to_lowercase();
    if ABBREVIATIONS.contains(&word.as_str()) {
        return true;
    }
    if word == "no" && next.is_ascii_digit() {
        return true;
    }

    // Initials: "J. R. R. Tolkien", unless a common opener follows.
    let mut it = original.chars();
    let is_initial = matches!((it.next(), it.next()), (Some(c), None) if c.is_uppercase());
    is_initial && !SENTENCE_STARTERS.contains(&next_word(chars, after).as_str())
}

fn push_span(text: &str, start: usize, end: usize, out: &mut Vec<SentenceSpan>) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let s = start + (raw.len() - raw.trim_start().len());
    out.push(SentenceSpan {
        text: trimmed.to_string(),
        start: s,
        end: s + trimmed.len(),
    });
}

/// Split text into sentences.
///
/// A boundary is a run of terminal punctuation, optionally followed by
/// closing quotes or brackets, then whitespace or end of text. Full-width
/// CJK terminators split without trailing whitespace. A dot followed by a
/// non-space character (decimals, URLs) never splits.
pub fn segment_sentences(text: &str) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    if text.trim().is_empty() {
        return spans;
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut current_start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut j = i;
        while j < chars.len() && is_terminator(chars[j].1) {
            j += 1;
        }
        let run_end = j;
        while j < chars.len() && is_closer(chars[j].1) {
            j += 1;
        }

        let boundary = if j >= chars.len() {
            true
        } else if chars[j].1.is_whitespace() {
            !is_suppressed_boundary(text, &chars, run_start, run_end, j)
        } else {
            chars[run_start..run_end]
                .iter()
                .any(|(_, c)| is_fullwidth_terminator(*c))
        };

        if boundary {
            let end = chars.get(j).map(|(b, _)| *b).unwrap_or(text.len());
            push_span(text, current_start, end, &mut spans);
            current_start = end;
        }
        i = j;
    }

    push_span(text, current_start, text.len(), &mut spans);
    spans
}

/// Sentence texts only, in document order.
pub fn split_sentences(text: &str) -> Vec<String> {
    segment_sentences(text).into_iter().map(|s| s.text).collect()
}
