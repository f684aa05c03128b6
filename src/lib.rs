//! # docqa
//!
//! A local-first document question-answering service.
//!
//! docqa concatenates the text of local PDF/TXT files into a grounding corpus,
//! embeds it together with a user's question in a fixed instruction template,
//! sends the prompt to a hosted text-generation endpoint, and returns the
//! normalized answer — via a CLI one-shot or an interactive web page.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌───────────┐
//! │  Loader  │──▶│  Prompt  │──▶│ Inference │──▶│ Normalize │
//! │ PDF/TXT  │   │ Template │   │  (Gemini) │   │  Answer   │
//! └──────────┘   └──────────┘   └───────────┘   └───────────┘
//!                                                     │
//!                                     ┌───────────────┤
//!                                     ▼               ▼
//!                                ┌─────────┐    ┌──────────┐
//!                                │   CLI   │    │   HTTP   │
//!                                │ (docqa) │    │  (page)  │
//!                                └─────────┘    └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY=...
//! docqa sources                 # verify which files will be read
//! docqa ask "Cấp nào có thẩm quyền?"
//! docqa serve                   # start the interactive page
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`extract`] | Per-file PDF/TXT text extraction |
//! | [`corpus`] | Directory scan, concatenation, truncation |
//! | [`prompt`] | Instruction template assembly |
//! | [`llm`] | Inference endpoint client |
//! | [`normalize`] | Response shape classification |
//! | [`ask`] | End-to-end pipeline |
//! | [`server`] | HTTP server and page |

pub mod ask;
pub mod config;
pub mod corpus;
pub mod extract;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod prompt;
pub mod server;
pub mod sources;
