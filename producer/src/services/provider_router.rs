//! Provider selection by configured mode

use std::str::FromStr;
use async_trait::async_trait;

use shared::{ApiFailure, ChatOptions, ProcessId, process_warn};
use crate::error::ProducerError;
use crate::services::{DeterministicProvider, OpenAiChatProvider};
use crate::traits::ChatProvider;
use crate::types::{ChatReply, SessionUser};

/// Which provider backs content generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderMode {
    /// Deterministic, offline content
    #[default]
    Mock,
    /// OpenAI-compatible HTTP API
    OpenAi,
}

impl FromStr for ProviderMode {
    type Err = ProducerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "mock" => Ok(ProviderMode::Mock),
            "openai" => Ok(ProviderMode::OpenAi),
            other => Err(ProducerError::ConfigError {
                message: format!("Unknown provider mode '{}'. Valid options: mock, openai", other),
            }),
        }
    }
}

impl ProviderMode {
    /// Parse a mode, falling back to `Mock` with a warning on unknown values
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|e| {
            process_warn!(ProcessId::current(), "{}. Falling back to mock.", e);
            ProviderMode::Mock
        })
    }
}

/// Provider chosen at startup from a [`ProviderMode`]
pub enum RoutedProvider {
    Deterministic(DeterministicProvider),
    OpenAi(OpenAiChatProvider),
}

impl RoutedProvider {
    /// Build the provider for `mode`; `openai` without a key degrades to mock
    pub fn build(mode: ProviderMode) -> Self {
        match mode {
            ProviderMode::Mock => RoutedProvider::Deterministic(DeterministicProvider::new()),
            ProviderMode::OpenAi => {
                let provider = OpenAiChatProvider::from_env();
                if provider.has_api_key() {
                    RoutedProvider::OpenAi(provider)
                } else {
                    process_warn!(ProcessId::current(), "OPENAI_API_KEY is not set; falling back to mock provider");
                    RoutedProvider::Deterministic(DeterministicProvider::new())
                }
            }
        }
    }

    fn inner(&self) -> &dyn ChatProvider {
        match self {
            RoutedProvider::Deterministic(provider) => provider,
            RoutedProvider::OpenAi(provider) => provider,
        }
    }
}

#[async_trait]
impl ChatProvider for RoutedProvider {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    async fn current_user(&self) -> Result<Option<SessionUser>, ApiFailure> {
        self.inner().current_user().await
    }

    async fn sign_in(&self) -> Result<SessionUser, ApiFailure> {
        self.inner().sign_in().await
    }

    async fn chat(&self, prompt: &str, options: &ChatOptions) -> Result<ChatReply, ApiFailure> {
        self.inner().chat(prompt, options).await
    }
}
