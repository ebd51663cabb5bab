//! Orchestrator configuration

use url::Url;

use producer::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use shared::{DEFAULT_MODEL, SharedError, SharedResult};

/// Backend serving `/api/generate` when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorConfig {
    /// Base URL of the fallback backend
    pub backend_url: Url,
    /// Chat model for both primary-path calls
    pub model: String,
    /// Whether the primary AI provider is wired in at all
    pub ai_enabled: bool,
    /// Sampling temperature for primary-path calls, within `0.0..=2.0`
    pub temperature: f32,
    /// Completion token cap for primary-path calls
    pub max_tokens: u32,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("static URL"),
            model: DEFAULT_MODEL.to_string(),
            ai_enabled: true,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl OrchestratorConfig {
    /// Load from `GENERATE_BACKEND_URL`, `GENERATE_MODEL`, `GENERATE_TEMPERATURE`
    /// and `GENERATE_MAX_TOKENS` (after `.env`)
    pub fn from_env() -> SharedResult<Self> {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();

        if let Ok(url) = std::env::var("GENERATE_BACKEND_URL") {
            config.backend_url = parse_backend_url(&url)?;
        }
        if let Ok(model) = std::env::var("GENERATE_MODEL") {
            if !model.trim().is_empty() {
                config.model = model.trim().to_string();
            }
        }
        if let Ok(temperature) = std::env::var("GENERATE_TEMPERATURE") {
            config = config.with_temperature(parse_temperature(&temperature)?)?;
        }
        if let Ok(max_tokens) = std::env::var("GENERATE_MAX_TOKENS") {
            config = config.with_max_tokens(parse_max_tokens(&max_tokens)?)?;
        }
        Ok(config)
    }

    pub fn with_backend_url(mut self, url: &str) -> SharedResult<Self> {
        self.backend_url = parse_backend_url(url)?;
        Ok(self)
    }

    pub fn with_temperature(mut self, temperature: f32) -> SharedResult<Self> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(invalid_config("temperature", temperature));
        }
        self.temperature = temperature;
        Ok(self)
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> SharedResult<Self> {
        if max_tokens == 0 {
            return Err(invalid_config("max_tokens", max_tokens));
        }
        self.max_tokens = max_tokens;
        Ok(self)
    }
}

fn invalid_config(field: &str, value: impl ToString) -> SharedError {
    SharedError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_temperature(value: &str) -> SharedResult<f32> {
    value.trim().parse().map_err(|_| invalid_config("temperature", value))
}

fn parse_max_tokens(value: &str) -> SharedResult<u32> {
    value.trim().parse().map_err(|_| invalid_config("max_tokens", value))
}

/// Parse and validate an http(s) base URL
pub fn parse_backend_url(value: &str) -> SharedResult<Url> {
    let invalid = || invalid_config("backend_url", value);

    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(invalid()),
    }
}
