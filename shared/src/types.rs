//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global process ID (set once per binary at startup)
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier for any component in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Client-side generation orchestrator
    Orchestrator,
    /// Backend serving the fallback endpoint
    WebServer,
    /// Offline content-page pipeline
    Producer,
}

impl ProcessId {
    /// Initialize the global process ID for orchestrator
    pub fn init_orchestrator() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Orchestrator)
    }

    /// Initialize the global process ID for webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Initialize the global process ID for the page pipeline binary
    pub fn init_producer() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Producer)
    }

    /// Get the global process ID, defaulting to the orchestrator when no
    /// binary has initialized it (library and test use)
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Orchestrator)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Orchestrator => write!(f, "orchestrator"),
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Producer => write!(f, "producer"),
        }
    }
}

/// Request body for `POST /api/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "productName")]
    pub product_name: String,
}

impl GenerationRequest {
    /// Build a request from raw user input; `None` when the trimmed name is empty
    pub fn from_input(raw: &str) -> Option<Self> {
        let product_name = raw.trim();
        if product_name.is_empty() {
            None
        } else {
            Some(Self {
                product_name: product_name.to_string(),
            })
        }
    }
}

/// Generated FAQ content for one product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub questions: Vec<String>,
    pub answer: String,
}

/// Terminal failure shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub message: String,
}

impl FailureReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body of `POST /api/generate`
///
/// Every field is optional so a client can read partial or error-only bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(rename = "productName", default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Always serialized so successful bodies carry `"error": null`
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Successful workflow output
    pub fn success(product_name: impl Into<String>, result: GenerationResult, mode: impl Into<String>) -> Self {
        Self {
            product_name: Some(product_name.into()),
            questions: Some(result.questions),
            answer: Some(result.answer),
            mode: Some(mode.into()),
            error: None,
        }
    }

    /// Body carrying only an error message
    pub fn error_only(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

/// Options passed with every chat call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatOptions {
    pub model: String,
}

impl ChatOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self { model: model.into() }
    }
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

/// Chat model used by both generation calls unless configured otherwise
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Provider-level failure reasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiFailure {
    AuthenticationFailed,
    RateLimitExceeded,
    ServiceUnavailable,
    NetworkError(String),
    ServerError(String),
    InvalidRequest(String),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::AuthenticationFailed => write!(f, "authentication failed"),
            ApiFailure::RateLimitExceeded => write!(f, "rate limit exceeded"),
            ApiFailure::ServiceUnavailable => write!(f, "service unavailable"),
            ApiFailure::NetworkError(msg) => write!(f, "network error: {msg}"),
            ApiFailure::ServerError(msg) => write!(f, "server error: {msg}"),
            ApiFailure::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
        }
    }
}
