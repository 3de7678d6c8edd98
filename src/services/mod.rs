// docsum Core Services

pub mod text_processor;
pub mod sentence_segmenter;
pub mod summarizer;
pub mod extraction;

pub use text_processor::*;
pub use sentence_segmenter::*;

// Re-export summarizer entry points
pub use summarizer::{
    score_sentences,
    score_spans,
    select_top,
    selection_count,
    summarize,
    summarize_checked,
    summarize_with_mode_str,
    FrequencyTable,
};
pub use extraction::{decode_text, extract_file, extract_text, FileKind};
