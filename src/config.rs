use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the remote assistant
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Sent as-is; an empty key only shows up as a failed call
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AssistantConfig {
    /// Read settings from the process environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout = match lookup("ROOMY_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid ROOMY_TIMEOUT_SECS: {}", raw))?;
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let config = Self {
            api_key: lookup("API_KEY").unwrap_or_default(),
            model: lookup("ROOMY_MODEL").unwrap_or(defaults.model),
            base_url: lookup("ROOMY_API_BASE_URL").unwrap_or(defaults.base_url),
            timeout,
        };

        info!(
            "Assistant model {} (timeout {}s)",
            config.model,
            config.timeout.as_secs()
        );
        Ok(config)
    }
}
