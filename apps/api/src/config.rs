use anyhow::{bail, Context, Result};

use crate::ingest::{IngestOptions, PdfMode, DEFAULT_MAX_UPLOAD_BYTES};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Startup fails if the API key is missing or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub pdf_mode: PdfMode,
    /// Total attempts per provider call. 1 disables retries.
    pub llm_max_attempts: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = require_env("GEMINI_API_KEY")
            .or_else(|_| require_env("API_KEY"))
            .context("Either GEMINI_API_KEY or API_KEY must be set")?;

        let llm_max_attempts = optional_env("LLM_MAX_ATTEMPTS", "1")
            .parse::<u32>()
            .context("LLM_MAX_ATTEMPTS must be a positive integer")?;
        if llm_max_attempts == 0 {
            bail!("LLM_MAX_ATTEMPTS must be at least 1");
        }

        Ok(Config {
            gemini_api_key,
            gemini_base_url: optional_env("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            pdf_mode: optional_env("PDF_MODE", "inline").parse()?,
            llm_max_attempts,
        })
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            pdf_mode: self.pdf_mode,
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
