//! Orchestrator library for generating product FAQ content
//!
//! This library provides the generation orchestrator: it validates a product
//! name, asks the AI provider for questions and an answer, falls back to the
//! backend endpoint when that fails, and reports into an injected presenter.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::OrchestratorConfig;
pub use error::{OrchestratorError, OrchestratorResult};
pub use orchestrator::GenerationOrchestrator;
pub use traits::{BackendClient, Presenter};
pub use types::{Outcome, FALLBACK_ADVISORY, IDLE_LABEL, LOADING_LABEL};
