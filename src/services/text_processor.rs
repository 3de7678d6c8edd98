// Text Processing Service
// Word tokenization and display helpers shared by the summarizer and the CLI

use regex::Regex;
use std::sync::OnceLock;

/// Contraction and possessive suffixes split off the stem, longest first.
const CLITICS: &[&str] = &["n't", "'ve", "'re", "'ll", "'s", "'d", "'m"];

static WORD_RE: OnceLock<Regex> = OnceLock::new();

/// Runs of word characters, joined through inner hyphens and apostrophes so
/// `well-known` and `don't` come out as single raw tokens.
fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\w+(?:[-'’]\w+)*").expect("word regex"))
}

/// Split a trailing clitic off a lowercased token: `rust's` -> `rust`,
/// `don't` -> `do`. Tokens without one come back unchanged.
fn strip_clitic(token: &str) -> &str {
    let normalized = token.replace('’', "'");
    for clitic in CLITICS {
        if normalized.len() > clitic.len() && normalized.ends_with(clitic) {
            let stem_chars = normalized[..normalized.len() - clitic.len()].chars().count();
            let end = token
                .char_indices()
                .nth(stem_chars)
                .map(|(i, _)| i)
                .unwrap_or(token.len());
            return &token[..end];
        }
    }
    token
}

/// Lowercased alphabetic word tokens, in order of appearance.
///
/// Clitics are split off and the stem kept (`Rust's` -> `rust`,
/// `didn't` -> `did`). Every other token with a non-alphabetic character is
/// dropped whole: numbers, `v2`, `3.14`, `well-known`, `o'clock`.
pub fn tokenize_words(text: &str) -> Vec<String> {
    word_re()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter_map(|raw| {
            let stem = strip_clitic(&raw);
            if !stem.is_empty() && stem.chars().all(char::is_alphabetic) {
                Some(stem.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// First `max_chars` characters with `...` appended when truncated.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

/// Single-line preview for tabular output.
pub fn preview_line(s: &str, max_chars: usize) -> String {
    preview(s, max_chars).replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_punctuation() {
        assert_eq!(tokenize_words("Cats run. Cats RUN fast!"), vec!["cats", "run", "cats", "run", "fast"]);
    }

    #[test]
    fn test_tokenize_drops_non_alphabetic_tokens() {
        let words = tokenize_words("In 2024 we shipped v2 and 3.14 didn't matter.");
        assert_eq!(words, vec!["in", "we", "shipped", "and", "did", "matter"]);
    }

    #[test]
    fn test_tokenize_drops_hyphenated_words() {
        assert!(tokenize_words("well-known").is_empty());
        assert_eq!(tokenize_words("a state-of-the-art tool"), vec!["a", "tool"]);
    }

    #[test]
    fn test_tokenize_keeps_possessive_and_contraction_stems() {
        assert_eq!(tokenize_words("Rust's well-known compiler don't"), vec!["rust", "compiler", "do"]);
        assert_eq!(
            tokenize_words("We're sure they'll say you've I'm he'd"),
            vec!["we", "sure", "they", "say", "you", "i", "he"]
        );
        assert_eq!(tokenize_words("Rust’s tools"), vec!["rust", "tools"]);
    }

    #[test]
    fn test_tokenize_drops_inner_apostrophe_words() {
        assert_eq!(tokenize_words("at five o'clock"), vec!["at", "five"]);
    }

    #[test]
    fn test_tokenize_keeps_unicode_letters() {
        assert_eq!(tokenize_words("Café Über"), vec!["café", "über"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize_words("").is_empty());
        assert!(tokenize_words("123 ... !!!").is_empty());
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        assert_eq!(preview("héllo world", 5), "héllo...");
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview_line("a\nb", 10), "a b");
    }
}
