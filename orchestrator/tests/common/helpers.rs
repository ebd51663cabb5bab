//! Test helpers and builder patterns for orchestrator tests
//!
//! Provides a recording presenter, provider doubles and a builder that wires
//! them into a `GenerationOrchestrator` with sensible defaults.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use orchestrator::traits::MockBackendClient;
use orchestrator::{GenerationOrchestrator, OrchestratorError, Presenter};
use producer::core::prompt::classify;
use producer::core::PromptKind;
use producer::{ChatProvider, ChatReply, MockChatProvider, SessionUser};
use shared::{ApiFailure, ChatOptions, GenerationResult};

/// One call into the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    Error(String),
    Loading(bool, String),
    Questions(Vec<String>),
    Answer(String),
}

/// Presenter that records every call in order
#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<PresenterEvent>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<PresenterEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: PresenterEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// Last message shown in the error area ("" when hidden)
    pub fn shown_error(&self) -> String {
        self.events()
            .into_iter()
            .rev()
            .find_map(|e| match e {
                PresenterEvent::Error(msg) => Some(msg),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn shown_questions(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|e| match e {
                PresenterEvent::Questions(q) => Some(q),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn shown_answer(&self) -> String {
        self.events()
            .into_iter()
            .rev()
            .find_map(|e| match e {
                PresenterEvent::Answer(a) => Some(a),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Loading flags in call order
    pub fn loading_transitions(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PresenterEvent::Loading(loading, _) => Some(loading),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn show_error(&self, message: &str) {
        self.push(PresenterEvent::Error(message.to_string()));
    }

    fn set_loading(&self, loading: bool, label: &str) {
        self.push(PresenterEvent::Loading(loading, label.to_string()));
    }

    fn render_questions(&self, questions: &[String]) {
        self.push(PresenterEvent::Questions(questions.to_vec()));
    }

    fn render_answer(&self, answer: &str) {
        self.push(PresenterEvent::Answer(answer.to_string()));
    }
}

/// Signed-in provider double answering each template with a fixed reply
pub fn scripted_provider(
    questions: Result<ChatReply, ApiFailure>,
    answer: Result<ChatReply, ApiFailure>,
) -> MockChatProvider {
    let mut provider = MockChatProvider::new();
    provider.expect_name().return_const("scripted");
    provider
        .expect_current_user()
        .returning(|| Ok(Some(SessionUser::new("tester"))));
    provider.expect_sign_in().times(0);
    provider
        .expect_chat()
        .times(1..=2)
        .returning(move |prompt: &str, _: &ChatOptions| match classify(prompt) {
            PromptKind::Questions => questions.clone(),
            PromptKind::Answer => answer.clone(),
        });
    provider
}

/// Provider double with no session that fails to sign in
pub fn signed_out_provider(sign_in: Result<SessionUser, ApiFailure>) -> MockChatProvider {
    let mut provider = MockChatProvider::new();
    provider.expect_name().return_const("signed-out");
    provider.expect_current_user().returning(|| Ok(None));
    provider.expect_sign_in().times(1).returning(move || sign_in.clone());
    provider.expect_chat().times(0);
    provider
}

/// Provider double that must never be called
pub fn untouchable_provider() -> MockChatProvider {
    let mut provider = MockChatProvider::new();
    provider.expect_name().return_const("untouchable");
    provider.expect_current_user().times(0);
    provider.expect_sign_in().times(0);
    provider.expect_chat().times(0);
    provider
}

/// Backend double returning a fixed result, called exactly `times` times
pub fn backend_returning(result: Result<GenerationResult, String>, times: usize) -> MockBackendClient {
    let mut backend = MockBackendClient::new();
    backend
        .expect_generate()
        .times(times)
        .returning(move |_| result.clone().map_err(OrchestratorError::backend));
    backend
}

/// Provider whose chat calls block until the test adds a permit to the gate
pub struct GatedProvider {
    gate: Arc<Semaphore>,
    reply: &'static str,
}

impl GatedProvider {
    pub fn new(reply: &'static str) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        (Self { gate: gate.clone(), reply }, gate)
    }
}

#[async_trait]
impl ChatProvider for GatedProvider {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn current_user(&self) -> Result<Option<SessionUser>, ApiFailure> {
        Ok(Some(SessionUser::new("gated")))
    }

    async fn sign_in(&self) -> Result<SessionUser, ApiFailure> {
        Ok(SessionUser::new("gated"))
    }

    async fn chat(&self, prompt: &str, _options: &ChatOptions) -> Result<ChatReply, ApiFailure> {
        // Dropping the permit hands it to the next waiting call
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| ApiFailure::NetworkError(e.to_string()))?;

        Ok(match classify(prompt) {
            PromptKind::Questions => ChatReply::from(self.reply),
            PromptKind::Answer => ChatReply::from("gated answer"),
        })
    }
}

/// Builder for test orchestrators reporting into a `RecordingPresenter`
pub struct OrchestratorBuilder<P: ChatProvider> {
    provider: Option<P>,
    backend: MockBackendClient,
}

impl OrchestratorBuilder<MockChatProvider> {
    /// Defaults: the provider must not be touched and the backend must not be called
    pub fn new() -> Self {
        Self {
            provider: Some(untouchable_provider()),
            backend: backend_returning(Err("unexpected backend call".to_string()), 0),
        }
    }
}

impl<P: ChatProvider> OrchestratorBuilder<P> {
    pub fn with_provider<Q: ChatProvider>(self, provider: Q) -> OrchestratorBuilder<Q> {
        OrchestratorBuilder {
            provider: Some(provider),
            backend: self.backend,
        }
    }

    /// Simulate a missing provider integration
    pub fn without_provider(mut self) -> Self {
        self.provider = None;
        self
    }

    pub fn with_backend(mut self, backend: MockBackendClient) -> Self {
        self.backend = backend;
        self
    }

    pub fn build(self) -> GenerationOrchestrator<P, MockBackendClient, RecordingPresenter> {
        GenerationOrchestrator::new(
            self.provider.map(Arc::new),
            self.backend,
            RecordingPresenter::default(),
            ChatOptions::default(),
        )
    }
}
