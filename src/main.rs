use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use docsum_lib::models::{Mode, Summary};
use docsum_lib::services::extraction::{decode_text, extract_file};
use docsum_lib::services::summarizer::summarize_checked;
use docsum_lib::services::text_processor::preview;
use docsum_lib::{init_logging, startup_elapsed_ms, SummarizeError};
use std::fmt::Write as _;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Extractive document summarizer (no API key, no model download)
#[derive(Parser, Debug)]
#[command(name = "docsum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug logs on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a document (file, --text, or stdin)
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug)]
struct SummarizeArgs {
    /// Input file (.txt, .md, .pdf, .docx); reads stdin when omitted
    file: Option<PathBuf>,

    /// Text to summarize instead of a file
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Summary length: short, medium or long
    #[arg(long, short, value_parser = parse_mode, default_value = "medium")]
    mode: Mode,

    /// Number of key sentences to list
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Do not list key sentences
    #[arg(long)]
    no_top: bool,

    /// Print the beginning of the extracted text first
    #[arg(long)]
    preview: bool,

    /// Characters shown by --preview
    #[arg(long, default_value_t = 3000)]
    preview_chars: usize,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Also write the summary text to this file
    #[arg(long, short)]
    out: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<Mode, SummarizeError> {
    s.parse()
}

fn read_input(args: &SummarizeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return extract_file(path).with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("reading stdin")?;
    Ok(decode_text(&buf))
}

fn format_summary(summary: &Summary, top_n: Option<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} summary", summary.mode);
    let _ = writeln!(out, "{}", summary.summary);

    if let Some(n) = top_n {
        let top = summary.top_sentences(n);
        if !top.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Top key sentences");
            for (rank, sentence) in top.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", rank + 1, sentence.text);
                let _ = writeln!(out, "   score: {:.3}", sentence.score);
            }
        }
    }
    out
}

fn run_summarize(args: SummarizeArgs) -> Result<()> {
    let text = read_input(&args)?;

    if args.preview && !text.trim().is_empty() {
        println!("Preview (first {} chars)", args.preview_chars);
        println!("{}", preview(&text, args.preview_chars));
        println!();
    }

    let summary = match summarize_checked(&text, args.mode) {
        Ok(s) => s,
        Err(SummarizeError::EmptyInput) => {
            bail!("No text available. Pass a file (txt/pdf/docx), --text, or pipe text on stdin.")
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        mode = %args.mode,
        chars = text.chars().count(),
        sentences = summary.sentence_count(),
        selected = summary.selected.len(),
        elapsed_ms = startup_elapsed_ms(),
        "summary.generated"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let top_n = (!args.no_top).then_some(args.top);
        print!("{}", format_summary(&summary, top_n));
    }

    if let Some(out) = &args.out {
        std::fs::write(out, &summary.summary)
            .with_context(|| format!("writing {}", out.display()))?;
        eprintln!("Wrote summary: {}", out.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Summarize(args) => run_summarize(args),
    }
}
