//! Orchestrator-specific error types

use thiserror::Error;
use producer::ProducerError;
use shared::SharedError;

/// Message shown for empty input
pub const VALIDATION_MESSAGE: &str = "Please enter a product name.";

/// Message shown when the provider integration is missing entirely
pub const PROVIDER_UNAVAILABLE_MESSAGE: &str = "AI provider not available.";

/// Default message for a failed backend response without an `error` field
pub const BACKEND_DEFAULT_MESSAGE: &str = "Backend failed";

/// Last-resort message when a failure carries no text
pub const GENERIC_FAILURE_MESSAGE: &str = "Generation failed.";

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("{message}")]
    Validation { message: String },

    #[error("Provider authentication failed: {message}")]
    Auth { message: String },

    #[error("Generation failed: {message}")]
    Generation { message: String },

    #[error("{message}")]
    Backend { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] SharedError),
}

impl OrchestratorError {
    pub fn validation() -> Self {
        OrchestratorError::Validation {
            message: VALIDATION_MESSAGE.to_string(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        OrchestratorError::Backend { message: message.into() }
    }

    /// Short human-readable text for the presentation layer
    pub fn user_message(&self) -> String {
        let message = match self {
            OrchestratorError::Validation { message } | OrchestratorError::Backend { message } => message.clone(),
            other => other.to_string(),
        };

        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<ProducerError> for OrchestratorError {
    fn from(err: ProducerError) -> Self {
        if err.is_auth() {
            OrchestratorError::Auth { message: err.to_string() }
        } else {
            OrchestratorError::Generation { message: err.to_string() }
        }
    }
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
