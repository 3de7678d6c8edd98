//! Error types for the summarizer core and the text extraction service.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("invalid summary mode '{0}' (expected short, medium or long)")]
    InvalidMode(String),

    #[error("no text available to summarize")]
    EmptyInput,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("image OCR is not available for {0}; paste the text instead")]
    ImageOcrUnavailable(String),

    #[error("failed to read PDF: {0}")]
    Pdf(String),

    #[error("failed to read DOCX: {0}")]
    Docx(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
