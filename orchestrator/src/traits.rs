//! Orchestrator trait definitions for dependency injection

use async_trait::async_trait;

use shared::{GenerationRequest, GenerationResult};
use crate::error::OrchestratorResult;

/// Presentation layer the orchestrator reports into; it owns all rendering
#[mockall::automock]
pub trait Presenter: Send + Sync {
    /// Show a message; an empty string hides the error area
    fn show_error(&self, message: &str);

    /// Toggle the loading/disabled state and the trigger label
    fn set_loading(&self, loading: bool, label: &str);

    /// Replace the rendered question list
    fn render_questions(&self, questions: &[String]);

    /// Replace the rendered answer
    fn render_answer(&self, answer: &str);
}

/// Secondary generation path over the backend HTTP endpoint
#[mockall::automock]
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> OrchestratorResult<GenerationResult>;
}
