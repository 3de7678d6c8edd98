use docsum_lib::services::sentence_segmenter::split_sentences;
use docsum_lib::{summarize, summarize_with_mode_str, Mode, SummarizeError};

const ARTICLE: &str = "\
Rust is a systems programming language focused on safety. \
The Rust compiler checks memory safety at compile time. \
Many teams adopt Rust for command line tools. \
Coffee breaks are popular in every office. \
Ownership rules let Rust manage memory without a garbage collector. \
The weather was mild on Tuesday. \
Cargo builds Rust projects and manages their dependencies. \
Some developers prefer tabs while others prefer spaces. \
Rust programs often run as fast as programs written in C++. \
Lunch was served at noon. \
The borrow checker enforces Rust ownership rules. \
Documentation for Rust lives at docs.rs and in the Rust book. \
Nobody remembered to water the plants.";

#[test]
fn summary_sentences_are_document_sentences_in_order() {
    let sentences = split_sentences(ARTICLE);
    for mode in Mode::ALL {
        let result = summarize(ARTICLE, mode);
        let mut last = None;
        for sel in result.selected_sentences() {
            let pos = sentences.iter().position(|s| *s == sel.text).expect("sentence from document");
            assert!(last.map_or(true, |l| pos > l));
            last = Some(pos);
        }
        let joined: Vec<&str> = result.selected_sentences().map(|s| s.text.as_str()).collect();
        assert_eq!(result.summary, joined.join(" "));
    }
}

#[test]
fn longer_modes_select_at_least_as_many_sentences() {
    let short = summarize(ARTICLE, Mode::Short).selected.len();
    let medium = summarize(ARTICLE, Mode::Medium).selected.len();
    let long = summarize(ARTICLE, Mode::Long).selected.len();
    assert_eq!(summarize(ARTICLE, Mode::Short).sentence_count(), 13);
    assert_eq!((short, medium, long), (2, 3, 5));
    assert!(short <= medium && medium <= long);
}

#[test]
fn every_sentence_is_scored() {
    let result = summarize(ARTICLE, Mode::Short);
    assert_eq!(result.scored_sentences.len(), 13);
    for (i, s) in result.scored_sentences.iter().enumerate() {
        assert_eq!(s.index, i);
        assert!((0.0..=1.0).contains(&s.score));
        assert_eq!(&ARTICLE[s.start..s.end], s.text);
    }
}

#[test]
fn salient_sentences_win() {
    let result = summarize(ARTICLE, Mode::Short);
    assert!(result.summary.contains("Rust"));
    assert!(!result.summary.contains("Lunch"));
}

#[test]
fn summarize_is_deterministic() {
    for mode in Mode::ALL {
        let a = summarize(ARTICLE, mode);
        let b = summarize(ARTICLE, mode);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn cats_scenario() {
    let text = "Cats run. Cats run fast. Dogs sleep.";
    assert_eq!(summarize(text, Mode::Short).summary, "Cats run.");
    assert_eq!(summarize(text, Mode::Medium).summary, "Cats run.");
    assert_eq!(summarize(text, Mode::Long).summary, "Cats run. Cats run fast.");

    let top = summarize(text, Mode::Short);
    let ranked: Vec<&str> = top.top_sentences(5).iter().map(|s| s.text.as_str()).collect();
    assert_eq!(ranked, vec!["Cats run.", "Cats run fast.", "Dogs sleep."]);
}

#[test]
fn tied_scores_prefer_earlier_sentences() {
    // Every word appears once, so every sentence scores 1.0.
    let text = "Alpha beta. Gamma delta. Epsilon zeta. Eta theta. Iota kappa. Lambda mu.";
    let result = summarize(text, Mode::Long);
    assert!(result.scored_sentences.iter().all(|s| s.score == 1.0));
    assert_eq!(result.selected, vec![0, 1, 2]);
    assert_eq!(result.summary, "Alpha beta. Gamma delta. Epsilon zeta.");
}

#[test]
fn degenerate_inputs() {
    for mode in Mode::ALL {
        assert_eq!(summarize("", mode).summary, "");
        assert_eq!(summarize("   ", mode).summary, "");
        assert_eq!(summarize("One sentence only.", mode).summary, "One sentence only.");
    }
}

#[test]
fn invalid_mode_string_is_rejected() {
    let err = summarize_with_mode_str(ARTICLE, "extra-long").unwrap_err();
    assert_eq!(err, SummarizeError::InvalidMode("extra-long".to_string()));
    assert_eq!(summarize_with_mode_str("   ", "short").unwrap_err(), SummarizeError::EmptyInput);
}

#[test]
fn possessives_and_contractions_count_toward_their_stems() {
    let text = "Rust's compiler is strict. The weather is mild today. Rust's tools help.";
    let result = summarize(text, Mode::Long);

    let scores: Vec<f64> = result.scored_sentences.iter().map(|s| s.score).collect();
    assert!((scores[0] - 0.75).abs() < 1e-9);
    assert!((scores[1] - 0.6).abs() < 1e-9);
    assert!((scores[2] - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(result.selected, vec![0, 2]);
    assert_eq!(result.summary, "Rust's compiler is strict. Rust's tools help.");

    let contractions = summarize("Cats don't run. Cats do sleep. Dogs bark.", Mode::Long);
    assert_eq!(contractions.selected, vec![0, 1]);
}

#[test]
fn hyphenated_words_do_not_contribute() {
    let plain = summarize("Rust's compiler is strict. The weather is mild today. Rust's tools help.", Mode::Long);
    let hyphenated = summarize(
        "Rust's well-known compiler is strict. The weather is mild today. Rust's tools help.",
        Mode::Long,
    );
    let plain_scores: Vec<f64> = plain.scored_sentences.iter().map(|s| s.score).collect();
    let hyphen_scores: Vec<f64> = hyphenated.scored_sentences.iter().map(|s| s.score).collect();
    assert_eq!(plain_scores, hyphen_scores);
    assert_eq!(hyphenated.selected, vec![0, 2]);
}
