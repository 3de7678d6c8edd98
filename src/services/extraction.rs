// Text Extraction Service
// Turns uploaded file bytes into plain text for the summarizer

use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

use crate::error::ExtractError;

const DOCX_BODY_PART: &str = "word/document.xml";

static PARAGRAPH_RE: OnceLock<Regex> = OnceLock::new();
static TEXT_RUN_RE: OnceLock<Regex> = OnceLock::new();

fn paragraph_re() -> &'static Regex {
    PARAGRAPH_RE.get_or_init(|| {
        Regex::new(r"(?s)<w:p(?:\s[^>]*)?>(.*?)</w:p>").expect("paragraph regex")
    })
}

fn text_run_re() -> &'static Regex {
    TEXT_RUN_RE.get_or_init(|| {
        Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab/>").expect("text run regex")
    })
}

/// Supported input kinds, by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Pdf,
    Docx,
    Image,
}

impl FileKind {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        match ext.as_deref() {
            None | Some("txt") | Some("md") | Some("text") => Some(FileKind::Text),
            Some("pdf") => Some(FileKind::Pdf),
            Some("docx") => Some(FileKind::Docx),
            Some("png") | Some("jpg") | Some("jpeg") => Some(FileKind::Image),
            Some(_) => None,
        }
    }
}

/// Decode text bytes as UTF-8, falling back to Latin-1.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warn!(valid_up_to = e.valid_up_to(), "[extract] input is not UTF-8, decoding as Latin-1");
            bytes.iter().map(|&b| b as char).collect()
        }
    }
}

pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Paragraph text of a `document.xml` body, one line per paragraph.
pub fn docx_xml_to_text(xml: &str) -> String {
    paragraph_re()
        .captures_iter(xml)
        .map(|para| {
            let body = para.get(1).map(|m| m.as_str()).unwrap_or("");
            text_run_re()
                .captures_iter(body)
                .map(|run| match run.get(1) {
                    Some(t) => unescape_xml(t.as_str()),
                    None => "\t".to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut part = archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ExtractError::Docx(format!("{}: {}", DOCX_BODY_PART, e)))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(docx_xml_to_text(&xml))
}

/// Extract plain text from an uploaded file, dispatching on its extension.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let kind = FileKind::from_file_name(file_name)
        .ok_or_else(|| ExtractError::UnsupportedFormat(file_name.to_string()))?;

    let text = match kind {
        FileKind::Text => decode_text(bytes),
        FileKind::Pdf => extract_pdf_text(bytes)?,
        FileKind::Docx => extract_docx_text(bytes)?,
        FileKind::Image => return Err(ExtractError::ImageOcrUnavailable(file_name.to_string())),
    };

    info!(
        file = file_name,
        kind = ?kind,
        bytes = bytes.len(),
        chars = text.chars().count(),
        "[extract] text extracted"
    );
    Ok(text)
}

/// Read `path` and extract its text.
pub fn extract_file(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    extract_text(&file_name, &bytes)
}
