//! Core data types that flow through the load → prompt → inference pipeline.
//!
//! Both entities are request-scoped: a corpus is rebuilt on every interaction
//! and an answer is discarded after display. Nothing here is persisted.

use serde::Serialize;

/// One file considered by the document loader.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusFile {
    /// Path relative to the configured documents directory.
    pub name: String,
    /// Number of characters this file contributed to the corpus.
    pub chars: usize,
    /// Extraction error, if the file could not be read. A failed file still
    /// appears in the listing; its text is replaced by an inline warning.
    pub error: Option<String>,
}

impl CorpusFile {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// The concatenated text of every eligible document, in sorted filename order.
#[derive(Debug, Clone, Default)]
pub struct DocumentCorpus {
    /// Extracted text, each file's contribution followed by a newline.
    /// Already truncated to the configured budget when necessary.
    pub text: String,
    /// Every file that was considered, readable or not.
    pub files: Vec<CorpusFile>,
    /// Whether the middle of the corpus was dropped to fit the budget.
    pub truncated: bool,
}

impl DocumentCorpus {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
