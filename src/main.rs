//! # docqa CLI
//!
//! The `docqa` binary answers questions grounded in a local directory of
//! PDF/TXT documents, either one-shot or via an interactive web page.
//!
//! ## Usage
//!
//! ```bash
//! docqa --config ./config/docqa.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `docqa ask "<question>"` | Answer one question and print the result |
//! | `docqa sources` | List the files that would contribute to the corpus |
//! | `docqa serve` | Start the HTTP server with the interactive page |
//!
//! The inference API key is read from the `GEMINI_API_KEY` environment
//! variable; `ask` and `serve` fail at startup when it is missing.

mod ask;
mod config;
mod corpus;
mod extract;
mod llm;
mod models;
mod normalize;
mod prompt;
mod server;
mod sources;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docqa — question answering grounded in local PDF/TXT documents.
#[derive(Parser)]
#[command(
    name = "docqa",
    about = "docqa — question answering grounded in local PDF/TXT documents",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/docqa.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Answer one question against the configured documents.
    ///
    /// Loads the corpus, assembles the prompt, calls the inference endpoint
    /// once, and prints the normalized answer plus the consulted files.
    Ask {
        /// The question to answer.
        question: String,
    },

    /// List the files that would contribute to the corpus.
    ///
    /// Shows each matched file with its extracted character count, modified
    /// time, and extraction status. Useful for verifying configuration
    /// before serving.
    Sources,

    /// Start the HTTP server with the interactive question page.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Ask { question } => {
            ask::run_ask(&cfg, &question).await?;
        }
        Commands::Sources => {
            sources::list_sources(&cfg)?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
