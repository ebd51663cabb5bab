//! OpenAI-compatible chat provider over HTTP

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use shared::{ApiFailure, ChatOptions, ProcessId, process_debug, process_info};
use crate::traits::ChatProvider;
use crate::types::{ChatReply, SessionUser};

/// Default public API endpoint
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Environment variable holding the API key
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 700;

/// Chat provider speaking the `/v1/chat/completions` protocol
///
/// A session is the presence of an API key: `sign_in` loads it from the
/// environment (after reading `.env`) when none was supplied up front.
pub struct OpenAiChatProvider {
    client: reqwest::Client,
    base_url: String,
    key_var: String,
    api_key: RwLock<Option<String>>,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiChatProvider {
    /// Create provider against `base_url` with an optional key
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key_var: OPENAI_KEY_VAR.to_string(),
            api_key: RwLock::new(api_key.filter(|k| !k.trim().is_empty())),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Create provider from `OPENAI_BASE_URL` / `OPENAI_API_KEY`
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let base_url = std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        Self::new(base_url, std::env::var(OPENAI_KEY_VAR).ok())
    }

    /// Read the key from a different environment variable on sign-in
    pub fn with_key_var(mut self, key_var: impl Into<String>) -> Self {
        self.key_var = key_var.into();
        self
    }

    /// Sampling temperature and completion token cap sent with every request
    pub fn with_generation_params(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    /// Whether a key is currently held (non-blocking; false while a sign-in holds the lock)
    pub fn has_api_key(&self) -> bool {
        self.api_key.try_read().map(|key| key.is_some()).unwrap_or(false)
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn current_user(&self) -> Result<Option<SessionUser>, ApiFailure> {
        let key = self.api_key.read().await;
        Ok(key.as_ref().map(|_| SessionUser::new("api-key")))
    }

    async fn sign_in(&self) -> Result<SessionUser, ApiFailure> {
        let _ = dotenvy::dotenv();
        let key = std::env::var(&self.key_var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ApiFailure::AuthenticationFailed)?;

        *self.api_key.write().await = Some(key);
        process_info!(ProcessId::current(), "Signed in to openai using {}", self.key_var);
        Ok(SessionUser::new("api-key"))
    }

    async fn chat(&self, prompt: &str, options: &ChatOptions) -> Result<ChatReply, ApiFailure> {
        let api_key = self
            .api_key
            .read()
            .await
            .clone()
            .ok_or(ApiFailure::AuthenticationFailed)?;

        let request_start = std::time::Instant::now();

        let request_body = serde_json::json!({
            "model": options.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature
        });

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ApiFailure::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return match response.status().as_u16() {
                401 => Err(ApiFailure::AuthenticationFailed),
                429 => Err(ApiFailure::RateLimitExceeded),
                503 => Err(ApiFailure::ServiceUnavailable),
                _ => Err(ApiFailure::ServerError(response.status().to_string())),
            };
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ApiFailure::InvalidRequest(format!("Failed to parse response: {}", e)))?;

        process_debug!(
            ProcessId::current(),
            "openai {} replied in {}ms",
            options.model,
            request_start.elapsed().as_millis()
        );

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .filter(|content| !content.is_null())
            .ok_or_else(|| ApiFailure::InvalidRequest("No content in response".to_string()))?;

        Ok(match content {
            Value::String(text) => ChatReply::Text(text.clone()),
            other => ChatReply::Structured(other.clone()),
        })
    }
}
