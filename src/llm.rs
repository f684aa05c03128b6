//! Thin inference client for the Gemini `generateContent` endpoint.
//!
//! Single-attempt semantics: any transport error or non-2xx status becomes an
//! error carrying the status and response body. There is no retry or backoff;
//! the caller surfaces the failure to the user as-is.
//!
//! The client is constructed once from [`ModelConfig`] and the `GEMINI_API_KEY`
//! environment variable. A missing key fails construction, so misconfiguration
//! is caught at startup rather than on the first user request.

use anyhow::{bail, Result};
use serde::Serialize;
use std::time::Duration;

use crate::config::{ModelConfig, API_KEY_ENV};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// Client for a remote text-generation endpoint.
pub struct GenerateClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_output_tokens: u32,
}

// Manual impl: the key must not appear in debug output.
impl std::fmt::Debug for GenerateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateClient")
            .field("api_base", &self.api_base)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish_non_exhaustive()
    }
}

impl GenerateClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Fails if `GEMINI_API_KEY` is not set or the HTTP client cannot be built.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => key,
            _ => bail!("{} environment variable not set", API_KEY_ENV),
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.name.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Model identifier used for requests.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Sends one prompt and returns the raw response JSON.
    ///
    /// The response shape is not interpreted here; see [`crate::normalize`]
    /// for extraction of the answer text.
    pub async fn generate(&self, prompt: &str) -> Result<serde_json::Value> {
        // The key travels as a header, never in the URL: transport errors
        // quote the URL, and those messages are shown to the user.
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            bail!("Inference API error {}: {}", status, body_text);
        }

        Ok(response.json().await?)
    }
}
