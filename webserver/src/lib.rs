//! Webserver library for the FAQ generation backend
//!
//! This library serves `POST /api/generate`, the fallback endpoint the
//! generation orchestrator calls when its primary AI provider fails.

pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult, MISSING_PRODUCT_NAME};
pub use state::WebServerState;
pub use webserver_impl::WebServer;
