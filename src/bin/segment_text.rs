use anyhow::{Context, Result};
use clap::Parser;
use docsum_lib::models::ScoredSentence;
use docsum_lib::services::extraction::extract_file;
use docsum_lib::services::summarizer::{score_spans, FrequencyTable};
use docsum_lib::services::sentence_segmenter::segment_sentences;
use docsum_lib::services::text_processor::{preview_line, tokenize_words};
use serde::Serialize;
use std::path::PathBuf;

/// Dump sentence segmentation and frequency scores for a document
#[derive(Parser, Debug)]
#[command(name = "segment_text")]
struct Cli {
    /// Input file (.txt, .md, .pdf, .docx)
    path: PathBuf,

    /// Number of sentences to print
    #[arg(long, default_value_t = 50)]
    sentences: usize,

    /// Number of vocabulary entries to print
    #[arg(long, default_value_t = 20)]
    words: usize,

    /// Write the full sentence list as JSON
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    docsum_lib::init_logging(false);

    let text = extract_file(&cli.path).with_context(|| format!("reading {}", cli.path.display()))?;
    let spans = segment_sentences(&text);
    let table = FrequencyTable::build(&text);
    let scored = score_spans(&spans, &table);

    println!("File: {}", cli.path.display());
    println!("Extracted: {} chars ({} bytes)", text.chars().count(), text.len());
    println!("Vocabulary: {} words (max count {})", table.len(), table.max_count());
    println!();

    println!("Sentences: {}", scored.len());
    for s in scored.iter().take(cli.sentences) {
        println!(
            "[S{:04}] bytes=[{},{}] chars={} score={:.3}  {}",
            s.index,
            s.start,
            s.end,
            s.text.chars().count(),
            s.score,
            preview_line(&s.text, 120)
        );
    }
    if scored.len() > cli.sentences {
        println!("... ({} more sentences)", scored.len() - cli.sentences);
    }

    let mut vocabulary: Vec<(String, usize)> = tokenize_words(&text)
        .into_iter()
        .map(|w| {
            let c = table.count(&w);
            (w, c)
        })
        .collect();
    vocabulary.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    vocabulary.dedup_by(|a, b| a.0 == b.0);
    println!();
    println!("Top words:");
    for (word, count) in vocabulary.iter().take(cli.words) {
        println!("  {:<20} count={} weight={:.3}", word, count, table.weight(word));
    }

    if let Some(out_path) = cli.out {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Output<'a> {
            file: String,
            extracted_chars: usize,
            extracted_bytes: usize,
            vocabulary_size: usize,
            max_count: usize,
            sentences: &'a [ScoredSentence],
        }

        let out = Output {
            file: cli.path.display().to_string(),
            extracted_chars: text.chars().count(),
            extracted_bytes: text.len(),
            vocabulary_size: table.len(),
            max_count: table.max_count(),
            sentences: &scored,
        };

        let json = serde_json::to_string_pretty(&out)?;
        std::fs::write(&out_path, json).with_context(|| format!("writing {}", out_path.display()))?;
        println!();
        println!("Wrote JSON: {}", out_path.display());
    }

    Ok(())
}
