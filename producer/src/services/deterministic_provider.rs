//! Offline provider with deterministic canned content

use async_trait::async_trait;
use serde_json::json;

use shared::{ApiFailure, ChatOptions};
use crate::core::prompt::{self, PromptKind};
use crate::traits::ChatProvider;
use crate::types::{ChatReply, SessionUser};

const UNKNOWN_PRODUCT: &str = "the product";

/// Provider that never touches the network; replies depend only on the prompt
#[derive(Debug, Clone, Default)]
pub struct DeterministicProvider;

impl DeterministicProvider {
    pub fn new() -> Self {
        Self
    }

    /// Canned question list for a product
    pub fn question_list(product_name: &str) -> Vec<String> {
        let p = product_name;
        vec![
            format!("What are the main benefits of using {p}?"),
            format!("How do I apply {p}?"),
            "Is it suitable for all skin types?".to_string(),
            format!("What are the key ingredients in {p}?"),
            format!("Can I use {p} with other skincare products?"),
            format!("How often should I use {p}?"),
            format!("Are there any precautions or side effects of {p}?"),
            format!("How should I store {p} properly?"),
            format!("How long does it take to see results with {p}?"),
            format!("Should I apply sunscreen when using {p}?"),
            format!("Can I layer {p} with retinol or acids?"),
            format!("What should I do if {p} irritates my skin?"),
            format!("Is {p} worth its price?"),
            format!("What is the concentration of actives in {p}?"),
            format!("What is {p} used for?"),
        ]
    }

    /// Canned safe-use answer for a product
    pub fn answer_text(product_name: &str) -> String {
        format!(
            "{product_name} is a skincare product.\n\n\
             Safe-use tips:\n\
             1) Patch test first.\n\
             2) Apply on clean, dry skin.\n\
             3) Start slowly and increase frequency as tolerated.\n\
             4) Use sunscreen in daytime routines.\n\
             5) Stop use if irritation persists."
        )
    }

    fn questions_reply(product_name: &str) -> String {
        json!({ "questions": Self::question_list(product_name) }).to_string()
    }
}

#[async_trait]
impl ChatProvider for DeterministicProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn current_user(&self) -> Result<Option<SessionUser>, ApiFailure> {
        Ok(Some(SessionUser::new("offline")))
    }

    async fn sign_in(&self) -> Result<SessionUser, ApiFailure> {
        Ok(SessionUser::new("offline"))
    }

    async fn chat(&self, prompt: &str, _options: &ChatOptions) -> Result<ChatReply, ApiFailure> {
        let product_name = prompt::extract_product_name(prompt).unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());

        let text = match prompt::classify(prompt) {
            PromptKind::Questions => Self::questions_reply(&product_name),
            PromptKind::Answer => Self::answer_text(&product_name),
        };
        Ok(ChatReply::Text(text))
    }
}
