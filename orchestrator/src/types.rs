//! Orchestrator result types

use shared::{FailureReport, GenerationResult};

/// Trigger label while idle
pub const IDLE_LABEL: &str = "Generate";

/// Trigger label while a request is in flight
pub const LOADING_LABEL: &str = "Generating...";

/// Advisory shown alongside results served by the backend
pub const FALLBACK_ADVISORY: &str = "Puter failed; used backend fallback.";

/// Terminal state of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Primary path produced the result
    Success(GenerationResult),
    /// Primary path failed and the backend produced the result
    FallbackSuccess { result: GenerationResult, advisory: String },
    /// Validation failed, or both paths failed
    Failed(FailureReport),
    /// Another invocation was still in flight; this trigger was ignored
    Busy,
}

impl Outcome {
    /// Rendered result, if any
    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            Outcome::Success(result) | Outcome::FallbackSuccess { result, .. } => Some(result),
            Outcome::Failed(_) | Outcome::Busy => None,
        }
    }

    /// Message shown in the error area, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::FallbackSuccess { advisory, .. } => Some(advisory),
            Outcome::Failed(report) => Some(&report.message),
            Outcome::Success(_) | Outcome::Busy => None,
        }
    }
}
