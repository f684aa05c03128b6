//! Per-file text extraction for the document loader.
//!
//! Keyed by file extension rather than content sniffing: the loader only hands
//! this module files it already matched against the configured globs. PDF text
//! comes out of `pdf-extract`; plain text is decoded permissively so a stray
//! invalid byte never aborts a load.

use std::path::Path;

/// Extraction error. The loader converts this into an inline corpus warning;
/// it never aborts the whole load.
#[derive(Debug)]
pub enum ExtractError {
    UnsupportedExtension(String),
    Io(String),
    Pdf(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::UnsupportedExtension(ext) => {
                write!(f, "unsupported extension: {}", ext)
            }
            ExtractError::Io(e) => write!(f, "read failed: {}", e),
            ExtractError::Pdf(e) => write!(f, "PDF extraction failed: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Extracts plain text from a file on disk, dispatching on its extension
/// (case-insensitive). Returns UTF-8 text or an error the caller can embed
/// as a warning.
pub fn extract_file(path: &Path) -> Result<String, ExtractError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => extract_pdf(path),
        "txt" => extract_txt(path),
        other => Err(ExtractError::UnsupportedExtension(other.to_string())),
    }
}

fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::Io(e.to_string()))?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Plain text with lossy decoding: invalid UTF-8 sequences are replaced with
/// U+FFFD instead of failing the file.
fn extract_txt(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::Io(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
