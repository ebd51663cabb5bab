//! HTTP client for the backend `/api/generate` fallback endpoint

use async_trait::async_trait;
use serde_json::{Value, json};
use url::Url;

use producer::core::{normalize_questions, MAX_QUESTIONS};
use shared::{GenerationRequest, GenerationResult, ProcessId, process_warn};
use crate::error::{OrchestratorError, OrchestratorResult, BACKEND_DEFAULT_MESSAGE};
use crate::traits::BackendClient;

/// Path of the generation endpoint, relative to the backend base URL
pub const GENERATE_PATH: &str = "api/generate";

/// Real backend client posting `{"productName": ...}` and reading the JSON reply
pub struct RealBackendClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl RealBackendClient {
    /// Create client for a backend base URL; any path prefix on the base is kept
    pub fn new(base_url: &Url) -> OrchestratorResult<Self> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(GENERATE_PATH)
            .map_err(|e| OrchestratorError::backend(format!("Invalid backend URL {}: {}", base_url, e)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl BackendClient for RealBackendClient {
    async fn generate(&self, request: &GenerationRequest) -> OrchestratorResult<GenerationResult> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| OrchestratorError::backend(e.to_string()))?;

        let status = response.status();
        // Non-JSON bodies read as an empty object
        let body: Value = response.json().await.unwrap_or_else(|_| json!({}));

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
                .unwrap_or(BACKEND_DEFAULT_MESSAGE);
            return Err(OrchestratorError::backend(message));
        }

        if let Some(error) = body.get("error").and_then(Value::as_str) {
            process_warn!(ProcessId::current(), "Backend reported '{}' with status {}", error, status);
        }

        let questions = body
            .get("questions")
            .and_then(Value::as_array)
            .map(|items| normalize_questions(items, MAX_QUESTIONS))
            .unwrap_or_default();
        let answer = body
            .get("answer")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(GenerationResult { questions, answer })
    }
}
