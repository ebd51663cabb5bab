//! Generation orchestrator
//!
//! Validates input, tries the AI provider (questions and answer in parallel),
//! falls back to the backend endpoint on any primary failure, and reports the
//! outcome to the injected presentation layer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use producer::core::{answer_prompt, ensure_session, questions_prompt, ResponseProcessor, MAX_QUESTIONS};
use producer::{ChatProvider, ProducerError};
use shared::{
    ChatOptions, FailureReport, GenerationRequest, GenerationResult, ProcessId, process_debug, process_error,
    process_info, process_warn,
};

use crate::config::OrchestratorConfig;
use crate::error::{OrchestratorError, OrchestratorResult, PROVIDER_UNAVAILABLE_MESSAGE};
use crate::traits::{BackendClient, Presenter};
use crate::types::{Outcome, FALLBACK_ADVISORY, IDLE_LABEL, LOADING_LABEL};

/// Coordinates one generation per trigger
pub struct GenerationOrchestrator<P, B, V>
where
    P: ChatProvider,
    B: BackendClient,
    V: Presenter,
{
    /// `None` when the provider integration is not available at all
    provider: Option<Arc<P>>,
    backend: B,
    presenter: V,
    options: ChatOptions,
    processor: ResponseProcessor,
    busy: AtomicBool,
}

/// Clears the busy flag however the invocation ends
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<P, B, V> GenerationOrchestrator<P, B, V>
where
    P: ChatProvider,
    B: BackendClient,
    V: Presenter,
{
    /// Create a new orchestrator with injected dependencies
    pub fn new(provider: Option<Arc<P>>, backend: B, presenter: V, options: ChatOptions) -> Self {
        Self {
            provider,
            backend,
            presenter,
            options,
            processor: ResponseProcessor::new(),
            busy: AtomicBool::new(false),
        }
    }

    /// Create from configuration; the provider is dropped when AI is disabled
    pub fn from_config(config: &OrchestratorConfig, provider: Arc<P>, backend: B, presenter: V) -> Self {
        let provider = config.ai_enabled.then_some(provider);
        Self::new(provider, backend, presenter, ChatOptions::new(config.model.clone()))
    }

    pub fn presenter(&self) -> &V {
        &self.presenter
    }

    pub fn into_presenter(self) -> V {
        self.presenter
    }

    /// Whether an invocation is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Handle one trigger: Idle → Loading → {Success, FallbackSuccess, Failed} → Idle
    ///
    /// A trigger arriving while another invocation is in flight is ignored and
    /// returns [`Outcome::Busy`] without touching the presenter.
    pub async fn generate(&self, raw_input: &str) -> Outcome {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            process_warn!(ProcessId::current(), "Generation already in progress; ignoring trigger");
            return Outcome::Busy;
        }
        let _guard = BusyGuard(&self.busy);

        let invocation = Uuid::new_v4();

        self.presenter.show_error("");
        self.presenter.render_questions(&[]);
        self.presenter.render_answer("");
        self.presenter.set_loading(true, LOADING_LABEL);

        let outcome = self.run(raw_input, invocation).await;
        self.present(&outcome);

        self.presenter.set_loading(false, IDLE_LABEL);
        outcome
    }

    async fn run(&self, raw_input: &str, invocation: Uuid) -> Outcome {
        let Some(request) = GenerationRequest::from_input(raw_input) else {
            return Outcome::Failed(FailureReport::new(OrchestratorError::validation().user_message()));
        };

        process_info!(ProcessId::current(), "[{}] Generating FAQ for '{}'", invocation, request.product_name);

        let primary_error = match self.generate_primary(&request).await {
            Ok(result) => return Outcome::Success(result),
            Err(e) => e,
        };
        process_warn!(ProcessId::current(), "[{}] Primary generation failed: {}", invocation, primary_error);

        match self.backend.generate(&request).await {
            Ok(result) => {
                process_info!(ProcessId::current(), "[{}] Served by backend fallback", invocation);
                Outcome::FallbackSuccess {
                    result,
                    advisory: FALLBACK_ADVISORY.to_string(),
                }
            }
            Err(e) => {
                process_error!(ProcessId::current(), "[{}] Backend fallback failed: {}", invocation, e);
                Outcome::Failed(FailureReport::new(e.user_message()))
            }
        }
    }

    fn present(&self, outcome: &Outcome) {
        if let Some(result) = outcome.result() {
            self.presenter.render_questions(&result.questions);
            self.presenter.render_answer(&result.answer);
        }
        if let Some(message) = outcome.message() {
            self.presenter.show_error(message);
        }
    }

    /// Primary path: session, then both generation calls concurrently
    async fn generate_primary(&self, request: &GenerationRequest) -> OrchestratorResult<GenerationResult> {
        let provider = self.provider.as_ref().ok_or_else(|| OrchestratorError::Auth {
            message: PROVIDER_UNAVAILABLE_MESSAGE.to_string(),
        })?;

        let user = ensure_session(provider.as_ref()).await?;
        process_debug!(ProcessId::current(), "Using {} session for {}", provider.name(), user.username);

        let name = request.product_name.as_str();
        let (questions, answer) = tokio::try_join!(
            self.generate_questions(provider.as_ref(), name),
            self.generate_answer(provider.as_ref(), name),
        )?;

        Ok(GenerationResult { questions, answer })
    }

    async fn generate_questions(&self, provider: &P, product_name: &str) -> OrchestratorResult<Vec<String>> {
        let reply = provider
            .chat(&questions_prompt(product_name), &self.options)
            .await
            .map_err(|reason| ProducerError::provider(provider.name(), reason))?;

        Ok(self.processor.parse_questions(&reply.into_text(), MAX_QUESTIONS)?)
    }

    async fn generate_answer(&self, provider: &P, product_name: &str) -> OrchestratorResult<String> {
        let reply = provider
            .chat(&answer_prompt(product_name), &self.options)
            .await
            .map_err(|reason| ProducerError::provider(provider.name(), reason))?;

        Ok(reply.into_text())
    }
}
