//! End-to-end tests for the content workflow over the public producer API
//!
//! The OpenAI-compatible provider talks to a wiremock server, so the whole
//! path from prompt to parsed `GenerateResponse` is exercised without a key.

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use producer::{ContentWorkflow, DeterministicProvider, OpenAiChatProvider, ProviderMode, WorkflowConfig};

fn completion(content: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    }))
}

fn openai_config(strict: bool) -> WorkflowConfig {
    WorkflowConfig {
        mode: ProviderMode::OpenAi,
        strict,
        ..WorkflowConfig::default()
    }
}

async fn mount_answer(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("skincare FAQ assistant"))
        .respond_with(completion(json!("  - Patch test first.\n- Wear sunscreen.  ")))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_openai_workflow_parses_questions_and_trims_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("ecommerce content agent"))
        .respond_with(completion(json!(
            "```json\n{\"questions\":[\"Is it vegan?\",{\"question\":\"Can I use it daily?\"},\"\"]}\n```"
        )))
        .expect(1)
        .mount(&server)
        .await;
    mount_answer(&server).await;

    let provider = OpenAiChatProvider::new(server.uri(), Some("test-key".to_string()));
    let workflow = ContentWorkflow::new(Arc::new(provider), &openai_config(false));
    let response = workflow.run(" Retinol Cream ").await;

    assert_eq!(response.product_name.as_deref(), Some("Retinol Cream"));
    assert_eq!(response.mode.as_deref(), Some("openai"));
    assert_eq!(
        response.questions,
        Some(vec!["Is it vegan?".to_string(), "Can I use it daily?".to_string()])
    );
    assert_eq!(response.answer.as_deref(), Some("- Patch test first.\n- Wear sunscreen."));
    assert_eq!(response.error, None);
}

#[tokio::test]
async fn test_lenient_workflow_substitutes_canned_questions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("ecommerce content agent"))
        .respond_with(completion(json!("I'd rather write prose.")))
        .mount(&server)
        .await;
    mount_answer(&server).await;

    let provider = OpenAiChatProvider::new(server.uri(), Some("test-key".to_string()));
    let workflow = ContentWorkflow::new(Arc::new(provider), &openai_config(false));
    let response = workflow.run("Retinol Cream").await;

    let expected = DeterministicProvider::question_list("Retinol Cream");
    assert_eq!(response.questions, Some(expected));
    assert_eq!(response.mode.as_deref(), Some("openai"));
    assert_eq!(response.error, None);
}

#[tokio::test]
async fn test_strict_workflow_reports_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion(json!("{\"faq\": []}")))
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(server.uri(), Some("test-key".to_string()));
    let workflow = ContentWorkflow::new(Arc::new(provider), &openai_config(true));
    let response = workflow.run("Retinol Cream").await;

    assert_eq!(response.mode.as_deref(), Some("error"));
    assert_eq!(response.questions, Some(Vec::new()));
    assert_eq!(response.answer.as_deref(), Some(""));
    assert!(response.error.unwrap().contains("no questions array"));
}

#[tokio::test]
async fn test_upstream_outage_reports_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(server.uri(), Some("test-key".to_string()));
    let workflow = ContentWorkflow::new(Arc::new(provider), &openai_config(false));
    let response = workflow.run("Retinol Cream").await;

    assert_eq!(response.mode.as_deref(), Some("error"));
    assert!(response.error.unwrap().contains("service unavailable"));
}

#[tokio::test]
async fn test_offline_workflow_is_deterministic() {
    let workflow = ContentWorkflow::new(Arc::new(DeterministicProvider::new()), &WorkflowConfig::default());

    let first = workflow.run("Vitamin C Serum").await;
    let second = workflow.run("Vitamin C Serum").await;

    assert_eq!(first, second);
    assert_eq!(first.mode.as_deref(), Some("mock"));
    assert!(first.answer.unwrap().starts_with("Vitamin C Serum is a skincare product."));
}
