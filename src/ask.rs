//! The question-answering pipeline: load documents, assemble the prompt, call
//! the inference endpoint, normalize the response.
//!
//! One blocking sequence per question; the corpus is re-read from disk every
//! time, so edits to the documents directory are picked up without restarts.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::corpus;
use crate::llm::GenerateClient;
use crate::models::CorpusFile;
use crate::normalize;
use crate::prompt;

/// A normalized answer plus the files that grounded it.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<CorpusFile>,
    pub truncated: bool,
}

/// Answers one question against the configured documents directory.
///
/// An empty or whitespace-only question is rejected before any file or
/// network I/O happens.
pub async fn answer(client: &GenerateClient, config: &Config, question: &str) -> Result<Answer> {
    let question = question.trim();
    if question.is_empty() {
        bail!("question must not be empty");
    }

    let corpus = corpus::load_corpus(&config.documents)?;
    let instructions = config
        .prompt
        .instructions
        .as_deref()
        .unwrap_or(prompt::DEFAULT_INSTRUCTIONS);
    let prompt = prompt::build_prompt_with(instructions, &corpus.text, question);
    let response = client.generate(&prompt).await?;

    Ok(Answer {
        text: normalize::normalize(Some(&response)),
        sources: corpus.files,
        truncated: corpus.truncated,
    })
}

/// CLI entry point for `docqa ask`.
///
/// Validates the question before the client is constructed, so an empty
/// submission is rejected even when the API key is absent.
pub async fn run_ask(config: &Config, question: &str) -> Result<()> {
    if question.trim().is_empty() {
        bail!("question must not be empty");
    }

    let client = GenerateClient::from_config(&config.model)?;
    let answer = answer(&client, config, question).await?;

    println!("{}", answer.text);
    println!();
    println!(
        "({} file(s) consulted{})",
        answer.sources.len(),
        if answer.truncated {
            ", corpus truncated to fit the limit"
        } else {
            ""
        }
    );
    for file in &answer.sources {
        match &file.error {
            None => println!("  {} — {} chars", file.name, file.chars),
            Some(e) => println!("  {} — FAILED: {}", file.name, e),
        }
    }

    Ok(())
}
