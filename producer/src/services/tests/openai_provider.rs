//! Tests for OpenAiChatProvider against a mock HTTP server

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared::{ApiFailure, ChatOptions};
use crate::services::openai_provider::OpenAiChatProvider;
use crate::traits::ChatProvider;
use crate::types::ChatReply;

fn completion_body(content: serde_json::Value) -> serde_json::Value {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
    })
}

#[tokio::test]
async fn test_chat_returns_text_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "messages": [{ "role": "user", "content": "hello" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!("Apply sparingly."))))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(server.uri(), Some("test-key".to_string()));
    let reply = provider.chat("hello", &ChatOptions::new("gpt-4o-mini")).await.unwrap();

    assert_eq!(reply, ChatReply::Text("Apply sparingly.".to_string()));
}

#[tokio::test]
async fn test_generation_params_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({ "temperature": 0.25, "max_tokens": 123 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!("ok"))))
        .expect(1)
        .mount(&server)
        .await;

    let provider =
        OpenAiChatProvider::new(server.uri(), Some("test-key".to_string())).with_generation_params(0.25, 123);
    let reply = provider.chat("hello", &ChatOptions::default()).await.unwrap();

    assert_eq!(reply.into_text(), "ok");
}

#[tokio::test]
async fn test_chat_returns_structured_content() {
    let server = MockServer::start().await;
    let parts = json!([{ "type": "text", "text": "part one" }]);
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(parts.clone())))
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(server.uri(), Some("test-key".to_string()));
    let reply = provider.chat("hello", &ChatOptions::default()).await.unwrap();

    assert_eq!(reply, ChatReply::Structured(parts));
}

#[tokio::test]
async fn test_status_codes_map_to_failures() {
    let cases = [
        (401, ApiFailure::AuthenticationFailed),
        (429, ApiFailure::RateLimitExceeded),
        (503, ApiFailure::ServiceUnavailable),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let provider = OpenAiChatProvider::new(server.uri(), Some("test-key".to_string()));
        let err = provider.chat("hello", &ChatOptions::default()).await.unwrap_err();
        assert_eq!(err, expected, "status {status}");
    }
}

#[tokio::test]
async fn test_other_errors_are_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(server.uri(), Some("test-key".to_string()));
    let err = provider.chat("hello", &ChatOptions::default()).await.unwrap_err();
    assert!(matches!(err, ApiFailure::ServerError(_)));
}

#[tokio::test]
async fn test_missing_content_is_invalid_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(server.uri(), Some("test-key".to_string()));
    let err = provider.chat("hello", &ChatOptions::default()).await.unwrap_err();
    assert!(matches!(err, ApiFailure::InvalidRequest(_)));
}

#[tokio::test]
async fn test_chat_without_key_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(server.uri(), None);
    let err = provider.chat("hello", &ChatOptions::default()).await.unwrap_err();
    assert_eq!(err, ApiFailure::AuthenticationFailed);
}

#[tokio::test]
async fn test_session_follows_key_presence() {
    let provider = OpenAiChatProvider::new("http://127.0.0.1:9", Some("test-key".to_string()));
    assert!(provider.has_api_key());
    assert!(provider.current_user().await.unwrap().is_some());

    let provider = OpenAiChatProvider::new("http://127.0.0.1:9", Some("   ".to_string()));
    assert!(!provider.has_api_key());
    assert!(provider.current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_sign_in_without_key_variable_fails() {
    let provider = OpenAiChatProvider::new("http://127.0.0.1:9", None)
        .with_key_var("FAQ_TEST_KEY_THAT_IS_NEVER_SET");

    let err = provider.sign_in().await.unwrap_err();
    assert_eq!(err, ApiFailure::AuthenticationFailed);
    assert!(provider.current_user().await.unwrap().is_none());
}
