use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::corpus;

/// Lists the files that would contribute to the corpus, with extracted
/// character counts and modified times. Used by `docqa sources` to verify
/// configuration before serving.
pub fn list_sources(config: &Config) -> Result<()> {
    let corpus = corpus::load_corpus(&config.documents)?;

    println!(
        "{:<40} {:>10} {:<20} STATUS",
        "FILE", "CHARS", "MODIFIED"
    );
    for file in &corpus.files {
        let modified = std::fs::metadata(config.documents.dir.join(&file.name))
            .and_then(|m| m.modified())
            .map(|t| {
                let dt: DateTime<Utc> = t.into();
                dt.format("%Y-%m-%d %H:%M:%S").to_string()
            })
            .unwrap_or_else(|_| "-".to_string());
        let status = if file.is_ok() {
            "ok".to_string()
        } else {
            format!("failed: {}", file.error.as_deref().unwrap_or("unknown"))
        };
        println!("{:<40} {:>10} {:<20} {}", file.name, file.chars, modified, status);
    }

    let total_chars: usize = corpus.files.iter().map(|f| f.chars).sum();
    println!();
    println!(
        "{} file(s), {} chars extracted, budget {} chars{}",
        corpus.files.len(),
        total_chars,
        config.documents.max_chars,
        if corpus.truncated { " (truncated)" } else { "" }
    );
    if corpus.is_empty() {
        println!("warning: corpus is empty; every answer will report 'not found'");
    }

    Ok(())
}
