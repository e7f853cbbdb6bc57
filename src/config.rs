use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Model used for every summarization request; not user-configurable
pub const MODEL: &str = "llama-3.1-8b-instant";

/// Default timeout for page fetches
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_mode: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from ~/.config/urlsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("urlsum")
        .join("config.toml")
}

/// Process-wide settings resolved once at startup and injected into the
/// summarizer, instead of being read from the environment mid-request.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub trace_api_key: Option<String>,
    pub model: String,
}

impl Settings {
    /// Resolve settings from the process environment. Fails fast when the
    /// required API key is missing, before any user request runs.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                eyre::eyre!("GROQ_API_KEY environment variable not set (required for summarization)")
            })?;

        let trace_api_key = lookup("LANGSMITH_API_KEY").filter(|k| !k.trim().is_empty());
        if trace_api_key.is_some() {
            debug!("Tracing API key present");
        }

        Ok(Settings {
            api_key,
            trace_api_key,
            model: MODEL.to_string(),
        })
    }
}
