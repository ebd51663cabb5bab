//! Producer library for FAQ content generation
//!
//! This library provides the AI chat provider capability (an OpenAI-compatible
//! HTTP client and a deterministic offline provider), the prompt templates and
//! reply parsing shared by every caller, the content workflow behind the
//! backend `/api/generate` endpoint, and the offline content-page pipeline.

pub mod core;
pub mod error;
pub mod pages;
pub mod types;
pub mod traits;
pub mod services;

// Re-export main types
pub use error::{ProducerError, ProducerResult};
pub use types::*;
pub use traits::*;
pub use services::*;
