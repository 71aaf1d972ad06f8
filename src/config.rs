// config.rs
use crate::errors::ListingError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_INPUT_DIR: &str = "./data";
pub const DEFAULT_OUTPUT_CSV: &str = "./fb_marketplace_listings.csv";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";

/// Turn a folder of furniture photos into marketplace listing rows.
#[derive(Debug, Parser)]
#[command(name = "listing_simple", version)]
pub struct Cli {
    /// Folder containing furniture images
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// CSV file to write
    #[arg(long, default_value = DEFAULT_OUTPUT_CSV)]
    pub output: PathBuf,

    /// API key for the model service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Vision-capable chat model
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the chat-completions API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Token limit for each reply
    #[arg(long, default_value_t = 1000)]
    pub max_tokens: u32,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn vision_config(&self) -> Result<VisionConfig, ListingError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ListingError::Config("OPENAI_API_KEY is not set".into()))?;

        VisionConfig::new(api_key, &self.model, &self.base_url)
            .map(|c| c.max_tokens(self.max_tokens).timeout(Duration::from_secs(self.timeout_secs)))
    }
}

/// Everything the model client needs. Built by the caller; the client never reads the environment.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: Url,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl VisionConfig {
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Result<Self, ListingError> {
        Ok(Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            endpoint: chat_completions_url(base_url)?,
            max_tokens: 1000,
            timeout: Duration::from_secs(120),
        })
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `Url::join` replaces the last segment unless the base ends in '/'.
pub fn chat_completions_url(base_url: &str) -> Result<Url, ListingError> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    Url::parse(&base)
        .and_then(|u| u.join("chat/completions"))
        .map_err(|e| ListingError::Config(format!("Invalid base URL '{base_url}': {e}")))
}
