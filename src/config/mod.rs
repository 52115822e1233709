//! Configuration loading and management.
//!
//! Loads configuration from `./bilio.toml` (or `$BILIO_CONFIG_PATH`).
//! Environment variables override file values; file values override defaults.
//!
//! Precedence: env vars > config file > defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BilioConfig {
    /// HTTP listener settings (`[server]`).
    pub server: ServerConfig,
    /// Upstream generative-model settings (`[upstream]`).
    pub upstream: UpstreamConfig,
    /// Web-search collaborator settings (`[search]`).
    pub search: SearchConfig,
    /// OCR collaborator settings (`[ocr]`).
    pub ocr: OcrConfig,
    /// Session-memory settings (`[session]`).
    pub session: SessionConfig,
    /// Filesystem paths (`[paths]`).
    pub paths: PathsConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3000,
        }
    }
}

/// Upstream generative-model settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// API key for the generative-language endpoint.
    pub api_key: String,
    /// Endpoint base URL.
    pub base_url: String,
    /// Model identifier used when the client does not pick one.
    pub default_model: String,
    /// Bounded per-request timeout, seconds.
    pub timeout_seconds: u64,
    /// Response-cache TTL, seconds. Independent of the session TTL.
    pub cache_ttl_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            default_model: "gemini-1.5-flash".to_owned(),
            timeout_seconds: 30,
            cache_ttl_seconds: 300,
        }
    }
}

/// Web-search collaborator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Custom Search API key.
    pub api_key: String,
    /// Custom Search engine identifier.
    pub cse_id: String,
    /// Endpoint URL.
    pub base_url: String,
    /// Bounded per-request timeout, seconds.
    pub timeout_seconds: u64,
    /// Snippets requested per query.
    pub result_count: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            cse_id: String::new(),
            base_url: "https://www.googleapis.com/customsearch/v1".to_owned(),
            timeout_seconds: 10,
            result_count: 3,
        }
    }
}

/// OCR collaborator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// OCR endpoint base URL. Absent disables image handling.
    pub base_url: Option<String>,
    /// Bounded per-request timeout, seconds.
    pub timeout_seconds: u64,
    /// Language hint passed with every extraction.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: 20,
            language: "tur".to_owned(),
        }
    }
}

/// Session-memory settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Inactivity window after which a session expires, seconds.
    pub ttl_seconds: u64,
    /// Period of the background TTL sweep, seconds.
    pub sweep_interval_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 1800,
            sweep_interval_seconds: 300,
        }
    }
}

/// Filesystem paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory for rotated JSON log files.
    pub logs_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            logs_dir: "logs".to_owned(),
        }
    }
}

impl BilioConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the config file exists but cannot be read or
    /// parsed. A missing file falls back to defaults.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_from_file() -> Result<Self> {
        let path = Self::config_path_with(|key| std::env::var(key).ok());
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading config from file");
                let config: BilioConfig =
                    toml::from_str(&contents).context("failed to parse config TOML")?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found, using defaults");
                Ok(BilioConfig::default())
            }
            Err(e) => Err(anyhow::anyhow!("failed to read config file: {e}")),
        }
    }

    /// Resolve config path using a custom env resolver (for testing).
    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        match env("BILIO_CONFIG_PATH") {
            Some(p) => PathBuf::from(p),
            None => PathBuf::from("bilio.toml"),
        }
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function for testability.
    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("BILIO_HOST") {
            self.server.host = v;
        }
        if let Some(v) = env("BILIO_PORT") {
            match v.parse() {
                Ok(n) => self.server.port = n,
                Err(_) => tracing::warn!(var = "BILIO_PORT", value = %v, "ignoring invalid env override"),
            }
        }

        // Upstream. The key env names match what the hosting environment
        // already provisions for the legacy deployment.
        if let Some(v) = env("GEMINI_API_KEY") {
            self.upstream.api_key = v;
        }
        if let Some(v) = env("BILIO_MODEL") {
            self.upstream.default_model = v;
        }
        if let Some(v) = env("BILIO_CACHE_TTL_SECS") {
            match v.parse() {
                Ok(n) => self.upstream.cache_ttl_seconds = n,
                Err(_) => {
                    tracing::warn!(var = "BILIO_CACHE_TTL_SECS", value = %v, "ignoring invalid env override");
                }
            }
        }

        // Search.
        if let Some(v) = env("GOOGLE_SEARCH_API_KEY") {
            self.search.api_key = v;
        }
        if let Some(v) = env("GOOGLE_CSE_ID") {
            self.search.cse_id = v;
        }

        // OCR — env var presence enables the collaborator.
        if let Some(v) = env("BILIO_OCR_URL") {
            self.ocr.base_url = Some(v);
        }

        // Session memory.
        if let Some(v) = env("BILIO_SESSION_TTL_SECS") {
            match v.parse() {
                Ok(n) => self.session.ttl_seconds = n,
                Err(_) => {
                    tracing::warn!(var = "BILIO_SESSION_TTL_SECS", value = %v, "ignoring invalid env override");
                }
            }
        }

        // Paths.
        if let Some(v) = env("BILIO_LOGS_DIR") {
            self.paths.logs_dir = v;
        }
    }
}
