use std::path::PathBuf;
use std::time::Duration;

use crate::error::GenerationError;

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_REPORT_PATH: &str = "candidate_match_report.csv";

/// Configuration for the chat-completions client
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key (from GROQ_API_KEY env var)
    pub api_key: String,
    /// Model to use (e.g., "llama-3.1-8b-instant")
    pub model: String,
    /// API root; `/chat/completions` is appended
    pub base_url: String,
    /// Temperature (0-2, lower = more deterministic)
    pub temperature: f64,
    /// Maximum tokens in response
    pub max_tokens: u32,
    /// Per-request timeout enforced by the HTTP client
    pub timeout: Duration,
}

impl LlmConfig {
    /// Create config from environment variables, loading `.env` if present
    pub fn from_env() -> Result<Self, GenerationError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("GROQ_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var("GROQ_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Create with default model and endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.2,
            max_tokens: 1024,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Configuration for one screening run
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Where the report CSV is written; an existing file is overwritten
    pub report_path: PathBuf,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}
