use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable holding the inference API key.
///
/// The key is deliberately kept out of the TOML file; it is read once when the
/// inference client is constructed, and its absence is a fatal startup error.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub documents: DocumentsConfig,
    pub model: ModelConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentsConfig {
    /// Directory scanned for documents. Defaults to the working directory.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            max_chars: default_max_chars(),
            include_globs: default_include_globs(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_chars() -> usize {
    120_000
}

fn default_include_globs() -> Vec<String> {
    vec!["*.pdf".to_string(), "*.txt".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    pub name: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_max_output_tokens() -> u32 {
    2048
}
fn default_temperature() -> f64 {
    0.2
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
    /// Whether `/ask` responses include the contributing file list.
    #[serde(default = "default_show_sources")]
    pub show_sources: bool,
}

fn default_show_sources() -> bool {
    true
}

/// Optional override of the built-in instruction template.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PromptConfig {
    #[serde(default)]
    pub instructions: Option<String>,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate documents
    if config.documents.max_chars == 0 {
        anyhow::bail!("documents.max_chars must be > 0");
    }
    if config.documents.include_globs.is_empty() {
        anyhow::bail!("documents.include_globs must not be empty");
    }

    // Validate model
    if config.model.name.is_empty() {
        anyhow::bail!("model.name must not be empty");
    }
    if config.model.timeout_secs == 0 {
        anyhow::bail!("model.timeout_secs must be > 0");
    }
    if !(0.0..=2.0).contains(&config.model.temperature) {
        anyhow::bail!("model.temperature must be in [0.0, 2.0]");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("docqa.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
[documents]
dir = "./docs"

[model]
name = "gemini-2.0-flash"

[server]
bind = "127.0.0.1:8808"
"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.documents.max_chars, 120_000);
        assert!(cfg.server.show_sources);
        assert!(cfg.prompt.instructions.is_none());
        assert_eq!(cfg.documents.include_globs, vec!["*.pdf", "*.txt"]);
        assert_eq!(
            cfg.model.api_base,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(cfg.model.timeout_secs, 60);
    }

    #[test]
    fn zero_max_chars_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
[documents]
dir = "./docs"
max_chars = 0

[model]
name = "gemini-2.0-flash"

[server]
bind = "127.0.0.1:8808"
"#,
        );
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("max_chars"));
    }

    #[test]
    fn empty_model_name_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
[documents]
dir = "./docs"

[model]
name = ""

[server]
bind = "127.0.0.1:8808"
"#,
        );
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn documents_section_is_optional_and_defaults_to_cwd() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
[model]
name = "gemini-2.0-flash"

[server]
bind = "127.0.0.1:8808"
"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.documents.dir, PathBuf::from("."));
    }
}
