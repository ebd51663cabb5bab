//! Backend content workflow: product → questions → answer → mode

use std::sync::Arc;

use shared::{
    ChatOptions, DEFAULT_MODEL, GenerateResponse, GenerationResult, ProcessId, process_info, process_warn,
    truthy_flag,
};
use crate::core::{answer_prompt, ensure_session, questions_prompt, ResponseProcessor};
use crate::error::{ProducerError, ProducerResult};
use crate::services::{DeterministicProvider, ProviderMode};
use crate::traits::ChatProvider;

/// Workflow settings
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowConfig {
    pub mode: ProviderMode,
    /// Fail instead of substituting canned questions when the reply is unparseable
    pub strict: bool,
    pub model: String,
    /// Cap on returned questions; `None` keeps all
    pub max_questions: Option<usize>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            mode: ProviderMode::Mock,
            strict: false,
            model: DEFAULT_MODEL.to_string(),
            max_questions: None,
        }
    }
}

impl WorkflowConfig {
    /// Load from `CONTENT_LLM_MODE`, `CONTENT_LLM_STRICT` and `GENERATE_MODEL`
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();
        Self {
            mode: std::env::var("CONTENT_LLM_MODE")
                .map(|v| ProviderMode::parse_lenient(&v))
                .unwrap_or(defaults.mode),
            strict: std::env::var("CONTENT_LLM_STRICT").map(|v| truthy_flag(&v)).unwrap_or(false),
            model: std::env::var("GENERATE_MODEL").unwrap_or(defaults.model),
            max_questions: defaults.max_questions,
        }
    }
}

/// Generates FAQ content for the backend endpoint
pub struct ContentWorkflow<P: ChatProvider> {
    provider: Arc<P>,
    processor: ResponseProcessor,
    options: ChatOptions,
    strict: bool,
    max_questions: usize,
}

impl<P: ChatProvider> ContentWorkflow<P> {
    pub fn new(provider: Arc<P>, config: &WorkflowConfig) -> Self {
        Self {
            provider,
            processor: ResponseProcessor::new(),
            options: ChatOptions::new(config.model.clone()),
            strict: config.strict,
            max_questions: config.max_questions.unwrap_or(usize::MAX),
        }
    }

    /// Provider short name reported as `mode`
    pub fn mode(&self) -> &'static str {
        self.provider.name()
    }

    /// Run the workflow; failures are folded into the response body
    pub async fn run(&self, product_name: &str) -> GenerateResponse {
        let product_name = product_name.trim();
        match self.try_run(product_name).await {
            Ok(result) => GenerateResponse::success(product_name, result, self.mode()),
            Err(e) => {
                process_warn!(ProcessId::current(), "Content workflow failed for '{}': {}", product_name, e);
                GenerateResponse {
                    product_name: Some(product_name.to_string()),
                    questions: Some(Vec::new()),
                    answer: Some(String::new()),
                    mode: Some("error".to_string()),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Run the workflow, propagating the first failure
    pub async fn try_run(&self, product_name: &str) -> ProducerResult<GenerationResult> {
        if product_name.is_empty() {
            return Err(ProducerError::generation("product name is empty"));
        }

        ensure_session(self.provider.as_ref()).await?;

        let questions = self.generate_questions(product_name).await?;
        let answer = self.generate_answer(product_name).await?;

        process_info!(
            ProcessId::current(),
            "Generated {} questions for '{}' via {}",
            questions.len(),
            product_name,
            self.mode()
        );

        Ok(GenerationResult { questions, answer })
    }

    async fn generate_questions(&self, product_name: &str) -> ProducerResult<Vec<String>> {
        let reply = self
            .provider
            .chat(&questions_prompt(product_name), &self.options)
            .await
            .map_err(|reason| ProducerError::provider(self.provider.name(), reason))?
            .into_text();

        match self.processor.parse_structured_questions(&reply, self.max_questions) {
            Ok(questions) => Ok(questions),
            Err(e) if self.strict => Err(e),
            Err(e) => {
                process_warn!(ProcessId::current(), "Structured output invalid; using canned questions. Error={}", e);
                let mut canned = DeterministicProvider::question_list(product_name);
                canned.truncate(self.max_questions);
                Ok(canned)
            }
        }
    }

    async fn generate_answer(&self, product_name: &str) -> ProducerResult<String> {
        let reply = self
            .provider
            .chat(&answer_prompt(product_name), &self.options)
            .await
            .map_err(|reason| ProducerError::provider(self.provider.name(), reason))?;

        Ok(reply.into_text().trim().to_string())
    }
}
