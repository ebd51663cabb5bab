//! Producer services implementations

pub mod content_workflow;
pub mod deterministic_provider;
pub mod openai_provider;
pub mod provider_router;

#[cfg(test)]
pub mod tests;

pub use content_workflow::*;
pub use deterministic_provider::*;
pub use openai_provider::*;
pub use provider_router::*;
