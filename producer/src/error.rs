//! Producer error types

use thiserror::Error;
use shared::ApiFailure;

/// Result type for producer operations
pub type ProducerResult<T> = Result<T, ProducerError>;

/// Producer error types
#[derive(Error, Debug)]
pub enum ProducerError {
    #[error("Provider request failed: {provider} - {reason}")]
    ProviderError { provider: String, reason: ApiFailure },

    #[error("Provider authentication failed: {message}")]
    AuthError { message: String },

    #[error("Generation failed: {message}")]
    GenerationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation failed: {message}")]
    ValidationError { message: String },

    #[error("Failed to read product dataset {path}: {message}")]
    DatasetError { path: String, message: String },

    #[error("Failed to write {path}: {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProducerError {
    pub fn provider(provider: &str, reason: ApiFailure) -> Self {
        ProducerError::ProviderError {
            provider: provider.to_string(),
            reason,
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        ProducerError::GenerationError { message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ProducerError::ValidationError { message: message.into() }
    }

    /// True when the failure means the provider session could not be established
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            ProducerError::AuthError { .. }
                | ProducerError::ProviderError { reason: ApiFailure::AuthenticationFailed, .. }
        )
    }
}
