//! Producer trait definitions for dependency injection

use async_trait::async_trait;

use shared::{ApiFailure, ChatOptions};
use crate::types::{ChatReply, SessionUser};

/// External AI chat capability: session handling plus a single-prompt chat call
#[mockall::automock]
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Short provider name used in logs and the backend's `mode` field
    fn name(&self) -> &'static str;

    /// Query the current session; `None` when nobody is signed in
    async fn current_user(&self) -> Result<Option<SessionUser>, ApiFailure>;

    /// Start a session
    async fn sign_in(&self) -> Result<SessionUser, ApiFailure>;

    /// Send one prompt to the given model
    async fn chat(&self, prompt: &str, options: &ChatOptions) -> Result<ChatReply, ApiFailure>;
}
