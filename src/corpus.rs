//! Document loader: scans the configured directory, extracts text from every
//! eligible file, and concatenates it into a single [`DocumentCorpus`].
//!
//! The corpus is rebuilt from disk on every interaction. Per-file extraction
//! failures become inline warning markers instead of aborting the load, and a
//! corpus that exceeds the character budget keeps its head and tail while the
//! middle is replaced by [`TRUNCATION_MARKER`].

use anyhow::{bail, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::config::DocumentsConfig;
use crate::extract;
use crate::models::{CorpusFile, DocumentCorpus};

/// Inserted between the retained head and tail when the corpus overflows the
/// character budget. Part of the prompt the model sees.
pub const TRUNCATION_MARKER: &str = "\n\n[... middle of documents omitted to fit the limit ...]\n\n";

pub fn load_corpus(config: &DocumentsConfig) -> Result<DocumentCorpus> {
    let root = &config.dir;
    if !root.exists() {
        bail!("Documents directory does not exist: {}", root.display());
    }

    let include_set = build_globset(&config.include_globs)?;

    let mut names = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();
        if include_set.is_match(&rel_str) {
            names.push(rel_str);
        }
    }

    // Sort for deterministic ordering
    names.sort();

    let mut corpus = DocumentCorpus::default();
    for name in names {
        let path = root.join(&name);
        match extract::extract_file(&path) {
            Ok(text) => {
                let chars = text.chars().count();
                corpus.text.push_str(&text);
                corpus.text.push('\n');
                corpus.files.push(CorpusFile {
                    name,
                    chars,
                    error: None,
                });
            }
            Err(e) => {
                // Partial-failure tolerance: the file is named in the corpus
                // itself so the model (and the user) can see the gap.
                corpus
                    .text
                    .push_str(&format!("[WARNING: could not read {}: {}]\n", name, e));
                corpus.files.push(CorpusFile {
                    name,
                    chars: 0,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    if let Some(truncated) = truncate_middle(&corpus.text, config.max_chars) {
        corpus.text = truncated;
        corpus.truncated = true;
    }

    Ok(corpus)
}

/// Head-and-tail truncation: keeps the first and last `max_chars / 2` Unicode
/// scalar values and drops the middle. Returns `None` when the text fits.
///
/// The result size depends only on `max_chars`, not on how large the overflow
/// was. Counting is char-based, not byte-based, so multi-byte text is never
/// split inside a code point.
pub fn truncate_middle(text: &str, max_chars: usize) -> Option<String> {
    let total = text.chars().count();
    if total <= max_chars {
        return None;
    }
    let half = max_chars / 2;
    let head: String = text.chars().take(half).collect();
    let tail: String = text.chars().skip(total - half).collect();
    let mut out = String::with_capacity(head.len() + TRUNCATION_MARKER.len() + tail.len());
    out.push_str(&head);
    out.push_str(TRUNCATION_MARKER);
    out.push_str(&tail);
    Some(out)
}

/// Builds a case-insensitive glob set, so `*.pdf` also matches `SCAN.PDF`.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(GlobBuilder::new(pattern).case_insensitive(true).build()?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn docs_config(dir: PathBuf, max_chars: usize) -> DocumentsConfig {
        DocumentsConfig {
            dir,
            max_chars,
            include_globs: vec!["*.pdf".to_string(), "*.txt".to_string()],
        }
    }

    #[test]
    fn txt_corpus_is_sorted_concatenation_with_newlines() {
        let tmp = tempfile::tempdir().unwrap();
        // Written out of order on purpose; load order must be by name.
        std::fs::write(tmp.path().join("b.txt"), "second").unwrap();
        std::fs::write(tmp.path().join("a.txt"), "first").unwrap();

        let corpus = load_corpus(&docs_config(tmp.path().into(), 10_000)).unwrap();
        assert_eq!(corpus.text, "first\nsecond\n");
        let names: Vec<&str> = corpus.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert!(!corpus.truncated);
    }

    #[test]
    fn non_matching_extensions_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "kept").unwrap();
        std::fs::write(tmp.path().join("b.md"), "dropped").unwrap();
        std::fs::write(tmp.path().join("c.docx"), "dropped").unwrap();

        let corpus = load_corpus(&docs_config(tmp.path().into(), 10_000)).unwrap();
        assert_eq!(corpus.text, "kept\n");
        assert_eq!(corpus.files.len(), 1);
    }

    #[test]
    fn uppercase_extensions_match() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("LOUD.TXT"), "heard").unwrap();

        let corpus = load_corpus(&docs_config(tmp.path().into(), 10_000)).unwrap();
        assert_eq!(corpus.text, "heard\n");
    }

    #[test]
    fn unreadable_file_becomes_warning_and_others_survive() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "alpha").unwrap();
        std::fs::write(tmp.path().join("broken.pdf"), "not a pdf").unwrap();
        std::fs::write(tmp.path().join("z.txt"), "omega").unwrap();

        let corpus = load_corpus(&docs_config(tmp.path().into(), 10_000)).unwrap();
        assert!(corpus.text.contains("alpha"));
        assert!(corpus.text.contains("omega"));
        assert!(corpus.text.contains("[WARNING: could not read broken.pdf:"));

        let failed: Vec<&CorpusFile> = corpus.files.iter().filter(|f| !f.is_ok()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].name, "broken.pdf");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = load_corpus(&docs_config("/no/such/dir".into(), 10_000)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn overflow_keeps_head_and_tail_only() {
        let text: String = "abcdefghij".repeat(100); // 1000 chars
        let out = truncate_middle(&text, 100).unwrap();
        let head: String = text.chars().take(50).collect();
        let tail: String = text.chars().skip(1000 - 50).collect();
        assert_eq!(out, format!("{}{}{}", head, TRUNCATION_MARKER, tail));
    }

    #[test]
    fn truncated_length_is_independent_of_overflow_size() {
        let small_overflow = "x".repeat(101);
        let huge_overflow = "x".repeat(1_000_000);
        let a = truncate_middle(&small_overflow, 100).unwrap();
        let b = truncate_middle(&huge_overflow, 100).unwrap();
        assert_eq!(a.chars().count(), b.chars().count());
        assert_eq!(
            a.chars().count(),
            100 + TRUNCATION_MARKER.chars().count()
        );
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // Vietnamese text: multi-byte code points must not be split.
        let text = "Điều ".repeat(100); // 500 chars, > 500 bytes
        let out = truncate_middle(&text, 10).unwrap();
        // Head is the first 5 chars ("Điều "), tail the last 5.
        assert!(out.starts_with(&format!("Điều {}", TRUNCATION_MARKER)));
        assert!(out.ends_with("Điều "));
        assert_eq!(out.chars().count(), 10 + TRUNCATION_MARKER.chars().count());
    }

    #[test]
    fn exact_budget_is_not_truncated() {
        let text = "x".repeat(100);
        assert!(truncate_middle(&text, 100).is_none());
    }

    #[test]
    fn empty_directory_yields_empty_corpus() {
        let tmp = tempfile::tempdir().unwrap();
        let corpus = load_corpus(&docs_config(tmp.path().into(), 10_000)).unwrap();
        assert!(corpus.is_empty());
        assert!(corpus.files.is_empty());
    }
}
